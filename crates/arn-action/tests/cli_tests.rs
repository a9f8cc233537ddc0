//! Integration tests for argument handling

#![allow(deprecated)] // cargo_bin is deprecated in favor of cargo_bin! macro

use assert_cmd::assert::OutputAssertExt;
use assert_cmd::cargo::CommandCargoExt;
use predicates::prelude::*;
use std::process::Command;

fn clean_command() -> Command {
    let mut cmd = Command::cargo_bin("arn-action").unwrap();
    cmd.env_clear();
    cmd
}

#[test]
fn test_help_lists_step_inputs() {
    clean_command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--api-key"))
        .stdout(predicate::str::contains("--project-id"))
        .stdout(predicate::str::contains("--cli-version"))
        .stdout(predicate::str::contains("INPUT_API_KEY"));
}

#[test]
fn test_help_hides_secret_values() {
    clean_command()
        .env("INPUT_API_KEY", "very-secret")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("very-secret").not());
}

#[test]
fn test_version_flag() {
    clean_command()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("arn-action"));
}

#[test]
fn test_invalid_output_url_value() {
    clean_command()
        .env("INPUT_API_KEY", "k")
        .env("INPUT_PROJECT_ID", "p")
        .env("INPUT_OUTPUT_URL", "yes")
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "::error::Input does not meet YAML 1.2 \"Core Schema\" specification: output_url",
        ));
}

#[test]
fn test_unknown_flag_is_rejected() {
    clean_command()
        .arg("--no-such-flag")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--no-such-flag"));
}
