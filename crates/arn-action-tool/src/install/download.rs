//! Archive download and extraction
//!
//! The archive is written to a kept temporary file under the scratch
//! directory and unpacked into a fresh sibling directory. Neither is removed
//! afterwards: they live as long as the runner's workspace does.

use crate::github::download_to_writer;
use crate::install::release::{DownloadInfo, ReleaseError};
use reqwest::blocking::Client;
use std::fs;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use url::Url;

const SCRATCH_PREFIX: &str = "arn-";

/// Downloads the resolved archive and unpacks it
///
/// # Returns
///
/// The directory the archive was extracted into
///
/// # Errors
///
/// Returns `ReleaseError` if the download fails (transport error or
/// non-success status) or the archive cannot be extracted
pub fn fetch_and_unpack(
    client: &Client,
    info: &DownloadInfo,
    scratch: &Path,
) -> Result<PathBuf, ReleaseError> {
    log::info!(
        "⬇️ Downloading Auto Release Note CLI ({})...",
        info.version_label
    );
    let archive = download_archive(client, &info.url, scratch)?;

    log::info!("📦 Extracting archive...");
    extract_archive(&archive, scratch)
}

/// Downloads `url` into a new file under `scratch`
pub fn download_archive(client: &Client, url: &Url, scratch: &Path) -> Result<PathBuf, ReleaseError> {
    fs::create_dir_all(scratch).map_err(|e| ReleaseError::IoError {
        operation: format!("create scratch directory {}", scratch.display()),
        source: e,
    })?;

    let temp_file = tempfile::Builder::new()
        .prefix(SCRATCH_PREFIX)
        .suffix(".tar.gz")
        .tempfile_in(scratch)
        .map_err(|e| ReleaseError::IoError {
            operation: "create temporary file for download".to_string(),
            source: e,
        })?;

    let mut writer = BufWriter::new(temp_file.as_file());
    let downloaded =
        download_to_writer(client, url, &mut writer).map_err(|source| ReleaseError::DownloadFailed {
            url: url.clone(),
            source,
        })?;
    drop(writer);

    let path = temp_file
        .into_temp_path()
        .keep()
        .map_err(|e| ReleaseError::IoError {
            operation: "persist downloaded archive".to_string(),
            source: e.error,
        })?;

    log::debug!("Downloaded {} bytes to {}", downloaded, path.display());
    Ok(path)
}

/// Extracts a .tar.gz archive into a fresh directory under `scratch`
pub fn extract_archive(archive_path: &Path, scratch: &Path) -> Result<PathBuf, ReleaseError> {
    let dest = tempfile::Builder::new()
        .prefix(SCRATCH_PREFIX)
        .tempdir_in(scratch)
        .map_err(|e| ReleaseError::IoError {
            operation: format!("create extraction directory in {}", scratch.display()),
            source: e,
        })?;

    extract_tar_gz(archive_path, dest.path())?;

    Ok(dest.keep())
}

fn extract_tar_gz(archive_path: &Path, dest_dir: &Path) -> Result<(), ReleaseError> {
    let file = fs::File::open(archive_path).map_err(|e| ReleaseError::IoError {
        operation: format!("open archive {}", archive_path.display()),
        source: e,
    })?;

    let extraction_error = |e: std::io::Error| ReleaseError::ExtractionFailed {
        archive_type: "tar.gz".to_string(),
        path: archive_path.to_path_buf(),
        reason: e.to_string(),
    };

    let mut archive = tar::Archive::new(flate2::read::GzDecoder::new(file));

    // unpack_in refuses entries that would land outside dest_dir
    for entry in archive.entries().map_err(extraction_error)? {
        let mut entry = entry.map_err(extraction_error)?;
        entry.unpack_in(dest_dir).map_err(extraction_error)?;
    }

    Ok(())
}
