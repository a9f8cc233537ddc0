//! Shared GitHub interaction utilities
//!
//! - HTTP client construction with the action's user agent
//! - Streaming asset downloads
//! - URL construction for the distribution repository

pub mod client;
pub mod download;
pub mod url;

// Re-exports for convenient access
pub use client::{GITHUB_JSON, USER_AGENT, build_client, build_default_client};
pub use download::{DownloadError, download_to_writer};
pub use url::{
    DISTRIBUTION_OWNER, DISTRIBUTION_REPO, Distribution, UrlError, add_path_segments,
    github_api_base_url, github_base_url,
};
