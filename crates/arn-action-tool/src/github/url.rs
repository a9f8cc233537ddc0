//! URL construction for the CLI distribution repository

use thiserror::Error;
use url::Url;

/// Owner of the repository hosting CLI releases
pub const DISTRIBUTION_OWNER: &str = "papyrus-digital";

/// Repository hosting CLI releases
pub const DISTRIBUTION_REPO: &str = "auto-release-cli-distribution";

/// Builds GitHub base URL
pub fn github_base_url() -> Result<Url, url::ParseError> {
    Url::parse("https://github.com")
}

/// Builds GitHub API base URL
pub fn github_api_base_url() -> Result<Url, url::ParseError> {
    Url::parse("https://api.github.com")
}

/// Appends path segments to `url`, keeping any existing path prefix
///
/// # Errors
///
/// Returns error if URL cannot be a base
pub fn add_path_segments(url: &mut Url, segments: &[&str]) -> Result<(), UrlError> {
    let url_for_error = url.clone();
    url.path_segments_mut()
        .map_err(|_| UrlError::CannotBeABase { url: url_for_error })?
        .pop_if_empty()
        .extend(segments);
    Ok(())
}

/// Location of the distribution repository on a GitHub host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distribution {
    /// Web root used for release download links
    pub web_base: Url,
    /// REST API root used for release metadata
    pub api_base: Url,
    pub owner: String,
    pub repo: String,
}

impl Distribution {
    /// The public distribution repository on github.com
    pub fn github() -> Result<Self, UrlError> {
        Ok(Self::new(github_base_url()?, github_api_base_url()?))
    }

    /// Distribution repository on an arbitrary host (mirrors, test servers)
    pub fn new(web_base: Url, api_base: Url) -> Self {
        Self {
            web_base,
            api_base,
            owner: DISTRIBUTION_OWNER.to_string(),
            repo: DISTRIBUTION_REPO.to_string(),
        }
    }

    /// `{web}/{owner}/{repo}/releases/download/{tag}/{asset}`
    pub fn release_asset_url(&self, tag: &str, asset_name: &str) -> Result<Url, UrlError> {
        let mut url = self.web_base.clone();
        add_path_segments(
            &mut url,
            &[
                &self.owner,
                &self.repo,
                "releases",
                "download",
                tag,
                asset_name,
            ],
        )?;
        Ok(url)
    }

    /// `{api}/repos/{owner}/{repo}/releases/latest`
    pub fn latest_release_url(&self) -> Result<Url, UrlError> {
        let mut url = self.api_base.clone();
        add_path_segments(
            &mut url,
            &["repos", &self.owner, &self.repo, "releases", "latest"],
        )?;
        Ok(url)
    }
}

/// URL construction errors
#[derive(Debug, Error)]
pub enum UrlError {
    /// URL cannot be used as a base
    #[error("URL cannot be a base: {url}")]
    CannotBeABase {
        /// The problematic URL
        url: Url,
    },

    /// Invalid URL parse error
    #[error("Invalid URL: {0}")]
    ParseError(#[from] url::ParseError),
}
