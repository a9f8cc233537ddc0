//! HTTP client construction for GitHub interactions

use reqwest::blocking::Client;
use std::time::Duration;

/// User agent sent with every request
pub const USER_AGENT: &str = "auto-release-note-action";

/// Media type requested from the GitHub REST API
pub const GITHUB_JSON: &str = "application/vnd.github+json";

/// Builds HTTP client with appropriate settings for GitHub
///
/// `None` disables the per-request timeout entirely; the runner's step
/// timeout then bounds the request.
///
/// # Errors
///
/// Returns error if client construction fails
pub fn build_client(timeout: Option<Duration>) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
}

/// Builds HTTP client without a request timeout
pub fn build_default_client() -> Result<Client, reqwest::Error> {
    build_client(None)
}
