//! Release API fixtures for mockito servers

use mockito::{Mock, ServerGuard};

/// Path of the latest-release endpoint for the distribution repository
pub const LATEST_RELEASE_PATH: &str =
    "/repos/papyrus-digital/auto-release-cli-distribution/releases/latest";

/// Builds a release document with the given tag and `(name, url)` assets
pub fn release_json(tag: Option<&str>, assets: &[(&str, &str)]) -> String {
    let assets: Vec<serde_json::Value> = assets
        .iter()
        .map(|(name, url)| {
            serde_json::json!({
                "name": name,
                "browser_download_url": url,
                "size": 1024,
            })
        })
        .collect();

    let mut release = serde_json::json!({ "assets": assets });
    if let Some(tag) = tag {
        release["tag_name"] = serde_json::Value::from(tag);
    }
    release.to_string()
}

/// Registers a 200 response for the latest-release endpoint
pub fn mock_latest_release(server: &mut ServerGuard, body: &str) -> Mock {
    server
        .mock("GET", LATEST_RELEASE_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create()
}
