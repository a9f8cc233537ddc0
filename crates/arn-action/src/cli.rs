//! CLI structure using clap
//!
//! Every step input doubles as a long option and falls back to the runner's
//! `INPUT_<NAME>` variable.

use clap::Parser;
use std::path::PathBuf;
use url::Url;

#[derive(Parser, Debug)]
#[command(name = "arn-action")]
#[command(version, about = "Generate release notes with the Auto Release Note CLI", long_about = None)]
pub struct Cli {
    /// Auto Release Note API key
    #[arg(long, env = "INPUT_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Auto Release Note project id
    #[arg(long, env = "INPUT_PROJECT_ID", hide_env_values = true)]
    pub project_id: Option<String>,

    /// Generation mode passed to `arn --mode` [default: tag]
    #[arg(long, env = "INPUT_MODE")]
    pub mode: Option<String>,

    /// Template passed to `arn --template` [default: Standard Changelog]
    #[arg(long, env = "INPUT_TEMPLATE")]
    pub template: Option<String>,

    /// Ask the CLI to print the published URL (true/false)
    #[arg(long, env = "INPUT_OUTPUT_URL")]
    pub output_url: Option<String>,

    /// Start of the ref range
    #[arg(long, env = "INPUT_FROM_REF")]
    pub from_ref: Option<String>,

    /// End of the ref range [default: $GITHUB_REF_NAME]
    #[arg(long, env = "INPUT_TO_REF")]
    pub to_ref: Option<String>,

    /// CLI release to use, e.g. "v1.4.0" or "latest" [default: latest]
    #[arg(long, env = "INPUT_CLI_VERSION")]
    pub cli_version: Option<String>,

    /// Current branch or tag name, used when --to-ref is blank
    #[arg(long, env = "GITHUB_REF_NAME", hide = true)]
    pub ref_name: Option<String>,

    /// Scratch directory for the downloaded CLI
    #[arg(long, env = "RUNNER_TEMP", hide = true)]
    pub scratch_dir: Option<PathBuf>,

    /// Web root hosting release downloads
    #[arg(long, env = "ARN_GITHUB_URL", hide = true)]
    pub github_url: Option<Url>,

    /// REST API root serving release metadata
    #[arg(long, env = "ARN_GITHUB_API_URL", hide = true)]
    pub github_api_url: Option<Url>,

    #[arg(short, long)]
    pub verbose: bool,
}
