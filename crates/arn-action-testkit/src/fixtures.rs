//! Fake `arn` executables and release archives
//!
//! The fake CLI is a POSIX shell script, so anything that runs it is
//! Unix-only.

use flate2::Compression;
use flate2::write::GzEncoder;
use std::fs;
use std::path::{Path, PathBuf};

/// Wraps `body` in a `#!/bin/sh` script
pub fn fake_cli_script(body: &str) -> String {
    format!("#!/bin/sh\n{body}\n")
}

/// Builds a .tar.gz containing an executable `arn` script at the archive root
///
/// # Panics
///
/// Panics if the in-memory archive cannot be written
pub fn fake_cli_archive(body: &str) -> Vec<u8> {
    let script = fake_cli_script(body);

    let encoder = GzEncoder::new(Vec::new(), Compression::default());
    let mut builder = tar::Builder::new(encoder);

    let mut header = tar::Header::new_gnu();
    header.set_size(script.len() as u64);
    header.set_mode(0o755);
    builder
        .append_data(&mut header, "arn", script.as_bytes())
        .expect("Failed to append arn to archive");

    builder
        .into_inner()
        .expect("Failed to finish tar stream")
        .finish()
        .expect("Failed to finish gzip stream")
}

/// Writes an executable `arn` script into `dir`
///
/// # Panics
///
/// Panics if the file cannot be written
pub fn write_fake_cli(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("arn");
    fs::write(&path, fake_cli_script(body)).expect("Failed to write fake arn");

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("Failed to make fake arn executable");
    }

    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::GzDecoder;

    #[test]
    fn test_fake_cli_archive_contains_executable() {
        let bytes = fake_cli_archive("echo hi");
        let mut archive = tar::Archive::new(GzDecoder::new(&bytes[..]));
        let entries: Vec<_> = archive
            .entries()
            .unwrap()
            .map(|e| {
                let e = e.unwrap();
                (
                    e.path().unwrap().to_string_lossy().into_owned(),
                    e.header().mode().unwrap(),
                )
            })
            .collect();

        assert_eq!(entries, vec![("arn".to_string(), 0o755)]);
    }

    #[test]
    fn test_fake_cli_script() {
        assert_eq!(fake_cli_script("exit 0"), "#!/bin/sh\nexit 0\n");
    }
}
