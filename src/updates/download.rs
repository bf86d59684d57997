//! Release binary downloads.

use std::fs::File;
use std::path::Path;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use tracing::info;

use crate::error::{BinupError, Result};

/// Default timeout for a binary download.
pub const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(5 * 60);

/// Streams release binaries to disk.
pub struct Downloader {
    client: Client,
    timeout: Duration,
}

impl Downloader {
    /// Create a downloader with the default 5-minute timeout.
    pub fn new() -> Result<Self> {
        Self::with_timeout(DOWNLOAD_TIMEOUT)
    }

    /// Create a downloader with a custom timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("binup/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| BinupError::Other(e.into()))?;

        Ok(Self { client, timeout })
    }

    /// Get the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Download `url` into `dest`.
    ///
    /// `dest` is created before the request is sent and is left in place if
    /// the download fails.
    pub fn download(&self, url: &str, dest: &Path) -> Result<()> {
        info!("Downloading {} to {}...", url, dest.display());

        let mut out = File::create(dest)
            .map_err(|e| BinupError::filesystem(dest, "Failed to create download file", e))?;

        let mut response = self
            .client
            .get(url)
            .send()
            .map_err(|e| BinupError::network(url, e))?;

        if response.status() != StatusCode::OK {
            return Err(BinupError::Download {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        response
            .copy_to(&mut out)
            .map_err(|e| BinupError::network(url, e))?;

        make_executable(dest)?;

        info!("Downloaded {}", dest.display());
        Ok(())
    }
}

/// Set `0o755` on `path`. No-op where permission bits do not apply.
pub fn make_executable(path: &Path) -> Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))
            .map_err(|e| BinupError::filesystem(path, "Failed to set executable permissions", e))?;
    }
    #[cfg(not(unix))]
    let _ = path;
    Ok(())
}
