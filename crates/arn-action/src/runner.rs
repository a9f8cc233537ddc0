//! Reporting to the pipeline runner
//!
//! Log records become workflow commands on stdout; step outputs and search
//! path additions go through the runner's file commands when available.

use arn_action_core::{ActionError, Result};
use log::Level;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

const OUTPUT_FILE_ENV: &str = "GITHUB_OUTPUT";
const PATH_FILE_ENV: &str = "GITHUB_PATH";

/// Installs the logger
///
/// `RUST_LOG` wins; otherwise `info`, or `debug` when `verbose` is set or the
/// runner has step debugging enabled.
pub fn init_logger(verbose: bool) {
    let runner_debug = std::env::var("RUNNER_DEBUG").is_ok_and(|v| v == "1");
    let default_filter = if verbose || runner_debug {
        "debug"
    } else {
        "info"
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .target(env_logger::Target::Stdout)
        .format(|buf, record| {
            writeln!(
                buf,
                "{}",
                format_record(record.level(), &record.args().to_string())
            )
        })
        .init();
}

/// Renders a log message as the matching workflow command
pub fn format_record(level: Level, message: &str) -> String {
    match level {
        Level::Error => format!("::error::{}", escape_data(message)),
        Level::Warn => format!("::warning::{}", escape_data(message)),
        Level::Info => message.to_string(),
        Level::Debug | Level::Trace => format!("::debug::{}", escape_data(message)),
    }
}

/// Escapes workflow command data
pub fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}

/// Reports the run as failed
pub fn set_failed(error: &anyhow::Error) {
    log::error!("{}", error);
}

/// Sets a step output
pub fn set_output(name: &str, value: &str) -> Result<()> {
    match std::env::var_os(OUTPUT_FILE_ENV).filter(|v| !v.is_empty()) {
        Some(file) => append_file_command(Path::new(&file), &key_value_message(name, value)?),
        None => {
            println!();
            println!("::set-output name={}::{}", escape_property(name), escape_data(value));
            Ok(())
        }
    }
}

/// Makes `dir` visible on the search path of later steps
pub fn add_path(dir: &Path) -> Result<()> {
    match std::env::var_os(PATH_FILE_ENV).filter(|v| !v.is_empty()) {
        Some(file) => append_file_command(Path::new(&file), &dir.display().to_string()),
        None => {
            println!("::add-path::{}", escape_data(&dir.display().to_string()));
            Ok(())
        }
    }
}

/// Heredoc block for a key/value file command
pub fn key_value_message(key: &str, value: &str) -> Result<String> {
    let delimiter = format!("ghadelimiter_{}", uuid::Uuid::new_v4());

    if key.contains(&delimiter) {
        return Err(ActionError::Generic(format!(
            "Unexpected input: name should not contain the delimiter \"{delimiter}\""
        )));
    }
    if value.contains(&delimiter) {
        return Err(ActionError::Generic(format!(
            "Unexpected input: value should not contain the delimiter \"{delimiter}\""
        )));
    }

    Ok(format!("{key}<<{delimiter}\n{value}\n{delimiter}"))
}

fn append_file_command(file: &Path, message: &str) -> Result<()> {
    let to_error = |source| ActionError::RunnerFile {
        path: file.display().to_string(),
        source,
    };

    let mut handle = OpenOptions::new()
        .create(true)
        .append(true)
        .open(file)
        .map_err(to_error)?;
    writeln!(handle, "{message}").map_err(to_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_record_levels() {
        assert_eq!(format_record(Level::Info, "plain"), "plain");
        assert_eq!(format_record(Level::Warn, "boom"), "::warning::boom");
        assert_eq!(format_record(Level::Error, "failed"), "::error::failed");
        assert_eq!(format_record(Level::Debug, "detail"), "::debug::detail");
    }

    #[test]
    fn test_escape_data() {
        assert_eq!(escape_data("50%\r\nnext"), "50%25%0D%0Anext");
        assert_eq!(
            format_record(Level::Warn, "line one\nline two"),
            "::warning::line one%0Aline two"
        );
    }

    #[test]
    fn test_escape_property() {
        assert_eq!(escape_property("a:b,c"), "a%3Ab%2Cc");
    }

    #[test]
    fn test_key_value_message() {
        let message = key_value_message("release_url", "https://x.test/r/1").unwrap();
        let lines: Vec<&str> = message.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("release_url<<ghadelimiter_"));
        assert_eq!(lines[1], "https://x.test/r/1");
        assert_eq!(lines[0].trim_start_matches("release_url<<"), lines[2]);
    }

    #[test]
    fn test_append_file_command() {
        let temp = tempfile::tempdir().unwrap();
        let file = temp.path().join("github_path");

        append_file_command(&file, "/tmp/one").unwrap();
        append_file_command(&file, "/tmp/two").unwrap();

        assert_eq!(
            std::fs::read_to_string(&file).unwrap(),
            "/tmp/one\n/tmp/two\n"
        );
    }
}
