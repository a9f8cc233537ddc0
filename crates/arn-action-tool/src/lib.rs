//! Download, invocation and output handling for the Auto Release Note CLI.
//!
//! # Flow
//!
//! ```text
//! resolve_download(selector)
//!     ↓  Tag  → constructed release-download URL (no network)
//!     ↓  Latest → GET releases/latest, first linux_amd64 asset
//! fetch_and_unpack(DownloadInfo)
//!     ↓  archive → fresh directory, prepended to the child's PATH
//! exec_arn(ExecOptions)
//!     ↓  stdout/stderr captured in full
//! extract_release_url(ExecResult)
//! ```

pub mod exec;
pub mod github;
pub mod install;
pub mod output;

// Re-export commonly used types
pub use exec::{ExecError, ExecOptions, ExecResult, credential_env, exec_arn, generate_args};
pub use install::{CliVersion, DownloadInfo, ReleaseError, fetch_and_unpack, resolve_download};
pub use output::{MissingUrlError, extract_release_url, parse_release_url};
