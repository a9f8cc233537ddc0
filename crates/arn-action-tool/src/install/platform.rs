//! The single platform the CLI is fetched for

/// Substring identifying the linux/amd64 archive among release assets
pub const PLATFORM_ASSET_SUFFIX: &str = "linux_amd64.tar.gz";

/// Platform name used in error messages
pub const PLATFORM_LABEL: &str = "linux_amd64";

/// Name of the executable inside the archive
pub const BINARY_NAME: &str = "arn";

/// Archive name published for a release tag, e.g. `arn_v2.3.1_linux_amd64.tar.gz`
pub fn asset_name(tag: &str) -> String {
    format!("{BINARY_NAME}_{tag}_{PLATFORM_ASSET_SUFFIX}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_name() {
        assert_eq!(asset_name("v2.3.1"), "arn_v2.3.1_linux_amd64.tar.gz");
    }

    #[test]
    fn test_asset_name_matches_platform_suffix() {
        assert!(asset_name("v0.1.0").contains(PLATFORM_ASSET_SUFFIX));
    }
}
