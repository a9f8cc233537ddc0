pub mod download;
pub mod platform;
pub mod release;
pub mod resolve;
pub mod select;

// Re-export for convenience
pub use download::{download_archive, extract_archive, fetch_and_unpack};
pub use platform::{BINARY_NAME, PLATFORM_ASSET_SUFFIX, asset_name};
pub use release::{Asset, DownloadInfo, Release, ReleaseError};
pub use resolve::{CliVersion, fetch_latest_release, resolve_download};
pub use select::select_asset;
