//! Generate command - download the CLI, run it, report the release URL

use crate::cli::Cli;
use crate::runner;
use anyhow::{Context, Result};
use arn_action_core::{Environment, RawInputs, RunInputs};
use arn_action_tool::github::{Distribution, build_default_client};
use arn_action_tool::install::BINARY_NAME;
use arn_action_tool::{
    CliVersion, ExecOptions, ReleaseError, credential_env, exec_arn, extract_release_url,
    fetch_and_unpack, generate_args, resolve_download,
};

/// Name of the step output carrying the published URL
pub const RELEASE_URL_OUTPUT: &str = "release_url";

/// Execute the full generate flow
pub fn run(cli: Cli) -> Result<()> {
    let inputs = RunInputs::resolve(raw_inputs(&cli), cli.ref_name.as_deref())?;

    if let Some(to_ref) = &inputs.to_ref
        && to_ref.is_fallback()
    {
        log::info!(
            "ℹ️ No to_ref provided. Defaulting to {} from GITHUB_REF_NAME.",
            to_ref.as_str()
        );
    }

    let client = build_default_client().map_err(ReleaseError::Client)?;
    let dist = distribution(&cli)?;

    // 1. Resolve download location
    let version = CliVersion::parse(&inputs.cli_version);
    let info = resolve_download(&client, &dist, &version)?;

    // 2. Fetch and unpack
    let scratch = cli.scratch_dir.clone().unwrap_or_else(std::env::temp_dir);
    let cli_dir = fetch_and_unpack(&client, &info, &scratch)?;

    let mut env = Environment::inherited();
    env.prepend_path(&cli_dir)?;
    runner::add_path(&cli_dir)?;
    log::info!("✅ CLI added to PATH.");

    // 3. Invoke
    let options = ExecOptions {
        program: BINARY_NAME.to_string(),
        args: generate_args(&inputs),
        env: credential_env(env, &inputs),
        current_dir: std::env::current_dir().context("Failed to read working directory")?,
    };

    log::info!("🚀 Generating release notes...");
    let result = exec_arn(&options)?;

    print!("{}", result.stdout);
    eprint!("{}", result.stderr);

    if !result.success() {
        match result.exit_code {
            Some(code) => log::info!("{} exited with code {}", BINARY_NAME, code),
            None => log::info!("{} was terminated by a signal", BINARY_NAME),
        }
    }
    log::debug!("{} finished in {} ms", BINARY_NAME, result.duration_ms);

    // 4. Report
    let release_url = extract_release_url(&result)?;
    runner::set_output(RELEASE_URL_OUTPUT, &release_url)?;
    log::info!("🎉 Release notes ready: {}", release_url);

    Ok(())
}

fn raw_inputs(cli: &Cli) -> RawInputs {
    RawInputs {
        api_key: cli.api_key.clone(),
        project_id: cli.project_id.clone(),
        mode: cli.mode.clone(),
        template: cli.template.clone(),
        output_url: cli.output_url.clone(),
        from_ref: cli.from_ref.clone(),
        to_ref: cli.to_ref.clone(),
        cli_version: cli.cli_version.clone(),
    }
}

/// Distribution endpoints, honoring the hidden overrides
fn distribution(cli: &Cli) -> Result<Distribution> {
    let default = Distribution::github()?;
    Ok(Distribution::new(
        cli.github_url.clone().unwrap_or(default.web_base),
        cli.github_api_url.clone().unwrap_or(default.api_base),
    ))
}
