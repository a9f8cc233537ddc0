//! Release URL extraction from captured CLI output

use crate::exec::ExecResult;
use thiserror::Error;

/// The CLI produced no usable last line
#[derive(Debug, Error)]
#[error(
    "Auto Release Note CLI finished without returning a URL. Check the logs above for details."
)]
pub struct MissingUrlError;

/// Returns the last non-blank line of `stdout`, trimmed
pub fn parse_release_url(stdout: &str) -> Option<&str> {
    stdout.lines().map(str::trim).filter(|line| !line.is_empty()).last()
}

/// Extracts the release URL from a finished run
///
/// Success is decided only by the presence of a trailing line; the exit
/// status is not consulted. When nothing is found, captured stderr is
/// surfaced as a warning before the error is returned.
pub fn extract_release_url(result: &ExecResult) -> Result<String, MissingUrlError> {
    match parse_release_url(&result.stdout) {
        Some(url) => Ok(url.to_string()),
        None => {
            if !result.stderr.is_empty() {
                log::warn!("{}", result.stderr.trim_end());
            }
            Err(MissingUrlError)
        }
    }
}
