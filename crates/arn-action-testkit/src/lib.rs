//! Test utilities for arn-action
//!
//! This crate provides shared testing utilities used across the workspace.

pub mod fixtures;
pub mod mock;

pub use fixtures::{fake_cli_archive, fake_cli_script, write_fake_cli};
pub use mock::{LATEST_RELEASE_PATH, mock_latest_release, release_json};

use tempfile::TempDir;

/// Creates a temporary directory within `.tmp/` at the current directory
///
/// # Panics
///
/// Panics if the directory cannot be created
///
/// # Examples
///
/// ```rust
/// use arn_action_testkit::temp_dir_in_workspace;
///
/// let temp = temp_dir_in_workspace();
/// std::fs::write(temp.path().join("test.txt"), "test data").unwrap();
/// // Cleanup happens automatically when temp is dropped
/// ```
pub fn temp_dir_in_workspace() -> TempDir {
    let workspace_root = std::env::current_dir().expect("Failed to get current directory");
    let tmp_base = workspace_root.join(".tmp");

    std::fs::create_dir_all(&tmp_base).expect("Failed to create .tmp directory");

    TempDir::new_in(&tmp_base).expect("Failed to create temporary directory in .tmp/")
}
