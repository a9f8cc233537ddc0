//! CLI version selection and download URL resolution
//!
//! An explicit version maps straight onto the distribution repository's
//! release-download path. `latest` asks the release API which tag is current
//! and picks the linux/amd64 archive from its assets. Both paths produce the
//! same [`DownloadInfo`] so fetching does not care which one ran.

use crate::github::{Distribution, GITHUB_JSON};
use crate::install::platform::asset_name;
use crate::install::release::{DownloadInfo, Release, ReleaseError};
use crate::install::select::select_asset;
use arn_action_core::inputs::LATEST;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use url::Url;

/// Version selector for the CLI
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliVersion {
    /// Whatever the release API reports as the latest release
    Latest,
    /// A release tag, always carrying the leading `v`
    Tag(String),
}

impl CliVersion {
    /// Parses a selector; `latest` matches case-insensitively and blank means latest
    pub fn parse(selector: &str) -> Self {
        let selector = selector.trim();
        if selector.is_empty() || selector.eq_ignore_ascii_case(LATEST) {
            CliVersion::Latest
        } else if selector.starts_with('v') {
            CliVersion::Tag(selector.to_string())
        } else {
            CliVersion::Tag(format!("v{selector}"))
        }
    }
}

/// Resolves a version selector to a download location
///
/// Only [`CliVersion::Latest`] touches the network. A tag that does not exist
/// upstream is not detected here; the download fails later instead.
pub fn resolve_download(
    client: &Client,
    dist: &Distribution,
    version: &CliVersion,
) -> Result<DownloadInfo, ReleaseError> {
    match version {
        CliVersion::Tag(tag) => Ok(DownloadInfo {
            version_label: tag.clone(),
            url: dist.release_asset_url(tag, &asset_name(tag))?,
        }),
        CliVersion::Latest => {
            log::info!("🔍 Finding latest CLI version...");
            let release = fetch_latest_release(client, dist)?;
            latest_download_info(&release)
        }
    }
}

/// Fetches the latest release document from the release API
pub fn fetch_latest_release(client: &Client, dist: &Distribution) -> Result<Release, ReleaseError> {
    let url = dist.latest_release_url()?;
    log::debug!("GET {}", url);

    let response = client
        .get(url.as_str())
        .header(ACCEPT, GITHUB_JSON)
        .send()
        .map_err(|source| ReleaseError::LatestReleaseRequest {
            url: url.clone(),
            source,
        })?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(ReleaseError::LatestReleaseStatus {
            status: status.as_u16(),
        });
    }

    let body = response
        .text()
        .map_err(|source| ReleaseError::LatestReleaseRequest { url, source })?;

    parse_latest_release(&body)
}

/// Parses a release document, requiring an `assets` array
pub fn parse_latest_release(body: &str) -> Result<Release, ReleaseError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| ReleaseError::MalformedRelease {
            reason: e.to_string(),
        })?;

    if !value.get("assets").is_some_and(serde_json::Value::is_array) {
        return Err(ReleaseError::MissingAssets);
    }

    serde_json::from_value(value).map_err(|e| ReleaseError::MalformedRelease {
        reason: e.to_string(),
    })
}

/// Picks the platform asset from a release and builds its [`DownloadInfo`]
pub fn latest_download_info(release: &Release) -> Result<DownloadInfo, ReleaseError> {
    let assets = release.assets.as_deref().ok_or(ReleaseError::MissingAssets)?;
    let asset = select_asset(assets)?;
    let name = asset.name.clone().unwrap_or_default();

    let raw_url = asset
        .browser_download_url
        .as_deref()
        .ok_or_else(|| ReleaseError::InvalidAssetUrl {
            name: name.clone(),
            reason: "missing browser_download_url".to_string(),
        })?;
    let url = Url::parse(raw_url).map_err(|e| ReleaseError::InvalidAssetUrl {
        name,
        reason: e.to_string(),
    })?;

    let version_label = release
        .tag_name
        .as_deref()
        .filter(|tag| !tag.is_empty())
        .unwrap_or(LATEST)
        .to_string();

    Ok(DownloadInfo { version_label, url })
}
