//! GitHub Release metadata and install errors

use crate::github::{DownloadError, UrlError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;
use url::Url;

/// GitHub Release metadata from API
///
/// Fields are optional so that incomplete documents can be reported with a
/// specific error instead of a generic parse failure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Release {
    /// Release tag name (e.g., "v1.4.0")
    #[serde(default)]
    pub tag_name: Option<String>,
    /// List of downloadable assets
    #[serde(default)]
    pub assets: Option<Vec<Asset>>,
}

/// GitHub Release asset (downloadable file)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Asset {
    /// Asset filename (e.g., "arn_v1.4.0_linux_amd64.tar.gz")
    #[serde(default)]
    pub name: Option<String>,
    /// Direct download URL
    #[serde(default)]
    pub browser_download_url: Option<String>,
}

/// Resolved CLI archive location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadInfo {
    /// Human-readable version, e.g. "v1.4.0"
    pub version_label: String,
    pub url: Url,
}

/// Errors raised while resolving, downloading or unpacking the CLI
#[derive(Debug, Error)]
pub enum ReleaseError {
    #[error("Failed to fetch latest release: {status}")]
    LatestReleaseStatus { status: u16 },

    #[error("Failed to fetch latest release from {url}: {source}")]
    LatestReleaseRequest {
        url: Url,
        #[source]
        source: reqwest::Error,
    },

    #[error("Latest release response is not valid JSON: {reason}")]
    MalformedRelease { reason: String },

    #[error("Latest release response did not include assets.")]
    MissingAssets,

    #[error("Could not find {platform} binary in the latest release.")]
    AssetNotFound { platform: String },

    #[error("Release asset '{name}' has an invalid download URL: {reason}")]
    InvalidAssetUrl { name: String, reason: String },

    #[error("{0}")]
    Url(#[from] UrlError),

    #[error("HTTP client setup failed: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Failed to download {url}: {source}")]
    DownloadFailed {
        url: Url,
        #[source]
        source: DownloadError,
    },

    #[error("Failed to extract {archive_type} archive {}: {reason}", .path.display())]
    ExtractionFailed {
        archive_type: String,
        path: PathBuf,
        reason: String,
    },

    #[error("I/O error during {operation}: {source}")]
    IoError {
        operation: String,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_deserialization() {
        let json = r#"{
            "tag_name": "v1.4.0",
            "assets": [
                {
                    "name": "arn_v1.4.0_linux_amd64.tar.gz",
                    "browser_download_url": "https://github.com/papyrus-digital/auto-release-cli-distribution/releases/download/v1.4.0/arn_v1.4.0_linux_amd64.tar.gz",
                    "size": 12345678
                }
            ]
        }"#;

        let release: Release = serde_json::from_str(json).expect("Failed to deserialize Release");
        assert_eq!(release.tag_name.as_deref(), Some("v1.4.0"));
        assert_eq!(release.assets.map(|a| a.len()), Some(1));
    }

    #[test]
    fn test_release_without_tag_or_assets() {
        let release: Release = serde_json::from_str("{}").unwrap();
        assert!(release.tag_name.is_none());
        assert!(release.assets.is_none());
    }

    #[test]
    fn test_asset_without_name() {
        let asset: Asset =
            serde_json::from_str(r#"{"browser_download_url": "https://example.com/a"}"#).unwrap();
        assert!(asset.name.is_none());
        assert_eq!(
            asset.browser_download_url.as_deref(),
            Some("https://example.com/a")
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ReleaseError::LatestReleaseStatus { status: 403 }.to_string(),
            "Failed to fetch latest release: 403"
        );
        assert_eq!(
            ReleaseError::AssetNotFound {
                platform: "linux_amd64".to_string()
            }
            .to_string(),
            "Could not find linux_amd64 binary in the latest release."
        );
    }
}
