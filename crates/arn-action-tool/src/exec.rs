//! `arn generate` invocation
//!
//! Credentials travel only through the child's environment, never through
//! its argument list.

use arn_action_core::{Environment, RunInputs};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::Instant;
use thiserror::Error;

/// Environment variable carrying the API key
pub const TOKEN_ENV: &str = "AUTO_RELEASE_TOKEN";

/// Environment variable carrying the project id
pub const PROJECT_ID_ENV: &str = "AUTO_RELEASE_PROJECT_ID";

/// Builds the `arn` argument list for a run
pub fn generate_args(inputs: &RunInputs) -> Vec<String> {
    let mut args: Vec<String> = vec![
        "generate".into(),
        "--non-interactive".into(),
        "--mode".into(),
        inputs.mode.clone(),
        "--template".into(),
        inputs.template.clone(),
    ];

    if let Some(from_ref) = &inputs.from_ref {
        log::info!("Using from_ref: {}", from_ref);
        args.push("--from".into());
        args.push(from_ref.clone());
    }

    if let Some(to_ref) = &inputs.to_ref {
        log::info!("Using to_ref: {}", to_ref.as_str());
        args.push("--to".into());
        args.push(to_ref.as_str().to_string());
    }

    if inputs.output_url {
        args.push("--output-url".into());
    }

    args
}

/// Overlays the credential variables onto `env`
pub fn credential_env(mut env: Environment, inputs: &RunInputs) -> Environment {
    env.set(TOKEN_ENV, &inputs.api_key)
        .set(PROJECT_ID_ENV, &inputs.project_id);
    env
}

/// Options for executing the CLI
#[derive(Debug, Clone)]
pub struct ExecOptions {
    /// Program name, looked up on the `PATH` of `env`
    pub program: String,
    pub args: Vec<String>,
    /// Complete environment of the child process
    pub env: Environment,
    pub current_dir: PathBuf,
}

/// Result of the CLI execution
#[derive(Debug, Clone)]
pub struct ExecResult {
    /// `None` if the child was terminated by a signal
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
    pub duration_ms: u64,
}

impl ExecResult {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Runs the CLI to completion, capturing both output streams in full
///
/// A non-zero exit status is returned as data, not as an error.
pub fn exec_arn(options: &ExecOptions) -> Result<ExecResult, ExecError> {
    let binary = which::which_in(
        &options.program,
        options.env.get("PATH"),
        &options.current_dir,
    )
    .map_err(|_| ExecError::BinaryNotFound {
        program: options.program.clone(),
    })?;

    log::info!("[command]{} {}", binary.display(), options.args.join(" "));

    let start = Instant::now();
    let output = Command::new(&binary)
        .args(&options.args)
        .current_dir(&options.current_dir)
        .env_clear()
        .envs(options.env.vars())
        .stdin(Stdio::null())
        .output()
        .map_err(|source| ExecError::SpawnFailed {
            binary: binary.clone(),
            source,
        })?;

    Ok(ExecResult {
        exit_code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        duration_ms: start.elapsed().as_millis() as u64,
    })
}

#[derive(Debug, Error)]
pub enum ExecError {
    #[error("Unable to locate executable file: {program}. Please verify the file path exists.")]
    BinaryNotFound { program: String },

    #[error("Failed to run {}: {source}", .binary.display())]
    SpawnFailed {
        binary: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
