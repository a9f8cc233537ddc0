//! Platform asset selection from a release's asset list

use crate::install::platform::{PLATFORM_ASSET_SUFFIX, PLATFORM_LABEL};
use crate::install::release::{Asset, ReleaseError};

/// Returns the first asset whose name contains the linux/amd64 archive suffix
///
/// Listed order decides; there is no ranking by size or recency.
pub fn select_asset(assets: &[Asset]) -> Result<&Asset, ReleaseError> {
    assets
        .iter()
        .find(|asset| {
            asset
                .name
                .as_deref()
                .is_some_and(|name| name.contains(PLATFORM_ASSET_SUFFIX))
        })
        .ok_or_else(|| ReleaseError::AssetNotFound {
            platform: PLATFORM_LABEL.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(name: &str, url: &str) -> Asset {
        Asset {
            name: Some(name.to_string()),
            browser_download_url: Some(url.to_string()),
        }
    }

    #[test]
    fn test_select_asset_skips_other_platforms() {
        let assets = vec![
            asset("arn_v1.0_darwin_amd64.tar.gz", "D"),
            asset("arn_v1.0_linux_amd64.tar.gz", "U"),
        ];
        let selected = select_asset(&assets).unwrap();
        assert_eq!(selected.browser_download_url.as_deref(), Some("U"));
    }

    #[test]
    fn test_select_asset_first_match_wins() {
        let assets = vec![
            asset("arn_v1.0_linux_amd64.tar.gz", "first"),
            asset("arn_v1.0_linux_amd64.tar.gz.sbom", "second"),
            asset("arn_v1.0_linux_amd64.tar.gz", "third"),
        ];
        let selected = select_asset(&assets).unwrap();
        assert_eq!(selected.browser_download_url.as_deref(), Some("first"));
    }

    #[test]
    fn test_select_asset_ignores_unnamed_assets() {
        let assets = vec![
            Asset {
                name: None,
                browser_download_url: Some("nameless".to_string()),
            },
            asset("arn_v1.0_linux_amd64.tar.gz", "U"),
        ];
        assert_eq!(
            select_asset(&assets).unwrap().browser_download_url.as_deref(),
            Some("U")
        );
    }

    #[test]
    fn test_select_asset_no_match() {
        let assets = vec![
            asset("arn_v1.0_darwin_amd64.tar.gz", "D"),
            asset("arn_v1.0_linux_arm64.tar.gz", "A"),
        ];
        match select_asset(&assets).unwrap_err() {
            ReleaseError::AssetNotFound { platform } => assert_eq!(platform, "linux_amd64"),
            err => panic!("Expected AssetNotFound error, got: {:?}", err),
        }
    }

    #[test]
    fn test_select_asset_empty_list() {
        assert!(select_asset(&[]).is_err());
    }
}
