//! Streaming download of GitHub release assets

use reqwest::blocking::Client;
use std::io::{Read, Write};
use thiserror::Error;
use url::Url;

/// Streams `url` into `dest`, returning the number of bytes written
///
/// # Errors
///
/// Returns error if:
/// - HTTP request fails
/// - Response status is not success
/// - I/O error while reading the body or writing `dest`
pub fn download_to_writer<W: Write>(
    client: &Client,
    url: &Url,
    dest: &mut W,
) -> Result<u64, DownloadError> {
    let mut response = client
        .get(url.as_str())
        .send()
        .map_err(|source| DownloadError::HttpError {
            url: url.clone(),
            source,
        })?;

    if let Err(err) = response.error_for_status_ref() {
        return Err(DownloadError::HttpError {
            url: url.clone(),
            source: err.without_url(),
        });
    }

    let mut chunk = [0; 8192];
    let mut downloaded: u64 = 0;

    loop {
        let bytes_read = response.read(&mut chunk)?;
        if bytes_read == 0 {
            break;
        }
        dest.write_all(&chunk[..bytes_read])?;
        downloaded += bytes_read as u64;
    }

    dest.flush()?;
    Ok(downloaded)
}

/// Download error types
#[derive(Debug, Error)]
pub enum DownloadError {
    /// Transport failure or non-success status
    #[error("HTTP error downloading {url}: {source}")]
    HttpError {
        /// URL that failed
        url: Url,
        /// Underlying reqwest error
        #[source]
        source: reqwest::Error,
    },

    /// I/O error during download
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::build_default_client;
    use mockito::Server;

    #[test]
    fn test_download_to_writer_success() {
        let mut server = Server::new();
        let body = vec![7u8; 20_000];
        let mock = server
            .mock("GET", "/asset.tar.gz")
            .with_status(200)
            .with_body(&body)
            .create();

        let client = build_default_client().unwrap();
        let url = Url::parse(&format!("{}/asset.tar.gz", server.url())).unwrap();
        let mut dest = Vec::new();

        let written = download_to_writer(&client, &url, &mut dest).unwrap();

        mock.assert();
        assert_eq!(written, 20_000);
        assert_eq!(dest, body);
    }

    #[test]
    fn test_download_to_writer_http_error() {
        let mut server = Server::new();
        let _mock = server
            .mock("GET", "/missing.tar.gz")
            .with_status(404)
            .create();

        let client = build_default_client().unwrap();
        let url = Url::parse(&format!("{}/missing.tar.gz", server.url())).unwrap();
        let mut dest = Vec::new();

        let err = download_to_writer(&client, &url, &mut dest).unwrap_err();
        match err {
            DownloadError::HttpError { url: failed, source } => {
                assert_eq!(failed, url);
                assert_eq!(source.status().map(|s| s.as_u16()), Some(404));
            }
            other => panic!("Expected HttpError, got: {:?}", other),
        }
        assert!(dest.is_empty());
    }

    #[test]
    fn test_download_to_writer_network_error() {
        let client = build_default_client().unwrap();
        // Port 9 (discard) on localhost is not expected to accept HTTP
        let url = Url::parse("http://127.0.0.1:9/asset.tar.gz").unwrap();
        let mut dest = Vec::new();

        assert!(matches!(
            download_to_writer(&client, &url, &mut dest),
            Err(DownloadError::HttpError { .. })
        ));
    }
}
