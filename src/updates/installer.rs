//! Downloading and installing release binaries.
//!
//! [`Installer`] builds the release download URL, streams the asset to
//! `<final>.tmp`, swaps it into place with the platform's [`PlatformSwap`]
//! strategy and marks the result executable. A failed download leaves the
//! `.tmp` file behind.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::download::{make_executable, Downloader};
use super::locator::BinaryLocator;
use super::release::ReleaseSource;
use super::swap::{swap_for, PlatformSwap};
use super::Platform;
use crate::config::UpdateConfig;
use crate::error::Result;

/// Suffix of the in-progress download next to the final binary.
pub const TMP_SUFFIX: &str = ".tmp";

/// Installs a release binary.
pub trait BinaryInstaller {
    /// Install `version` of the configured binary.
    ///
    /// With `upgrade == false` nothing is downloaded when the binary is
    /// already on the search path or in the install directory. An empty
    /// `version` installs the latest release. Returns the installed path, or
    /// `None` when no install was needed.
    fn install(&self, upgrade: bool, tag_prefix: &str, version: &str) -> Result<Option<PathBuf>>;
}

/// Paths involved in a single install.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallTarget {
    pub binary_name: String,
    pub directory: PathBuf,
    pub final_path: PathBuf,
    pub temporary_path: PathBuf,
}

impl InstallTarget {
    /// Target for `file_name` inside `directory`.
    pub fn new(binary_name: &str, directory: &Path, file_name: &str) -> Self {
        let final_path = directory.join(file_name);
        let mut tmp = OsString::from(final_path.as_os_str());
        tmp.push(TMP_SUFFIX);

        Self {
            binary_name: binary_name.to_string(),
            directory: directory.to_path_buf(),
            final_path,
            temporary_path: PathBuf::from(tmp),
        }
    }
}

/// Download URL of a release asset.
///
/// `<protocol><host>/<org>/<repo>/releases/download/<prefix><version>/<binary>-<os>-<arch>[.exe]`,
/// where the protocol is `https://` unless the host starts with `http`.
pub fn download_url(
    config: &UpdateConfig,
    platform: &Platform,
    tag_prefix: &str,
    version: &str,
) -> String {
    // Plain prefix test: a host such as `httpmirror.example.com` is also taken
    // as already carrying a scheme and is used verbatim.
    let protocol = if config.git_server.starts_with("http") {
        ""
    } else {
        "https://"
    };

    format!(
        "{}{}/{}/{}/releases/download/{}{}/{}-{}-{}{}",
        protocol,
        config.git_server,
        config.org,
        config.repo,
        tag_prefix,
        version,
        config.binary,
        platform.os(),
        platform.arch(),
        platform.exe_suffix(),
    )
}

/// Installs release binaries from the configured release server.
pub struct Installer<'a> {
    config: &'a UpdateConfig,
    locator: BinaryLocator,
    releases: &'a dyn ReleaseSource,
    downloader: Downloader,
    swap: Box<dyn PlatformSwap>,
}

impl<'a> Installer<'a> {
    /// Create an installer; the swap strategy follows the locator's platform.
    pub fn new(
        config: &'a UpdateConfig,
        locator: BinaryLocator,
        releases: &'a dyn ReleaseSource,
        downloader: Downloader,
    ) -> Self {
        let swap = swap_for(locator.platform());
        Self {
            config,
            locator,
            releases,
            downloader,
            swap,
        }
    }

    /// Replace the swap strategy.
    pub fn with_swap(mut self, swap: Box<dyn PlatformSwap>) -> Self {
        self.swap = swap;
        self
    }

    /// Directory to install into.
    ///
    /// Normally the install directory, but when the running binary lives
    /// somewhere else it is upgraded in place.
    pub fn target_directory(&self) -> Result<PathBuf> {
        let bin_dir = self.locator.install_directory()?;
        match self.locator.binary_location() {
            Ok(current) if current != bin_dir => {
                debug!("Installing into non-standard location {}", current.display());
                Ok(current)
            }
            _ => Ok(bin_dir),
        }
    }
}

impl BinaryInstaller for Installer<'_> {
    fn install(&self, upgrade: bool, tag_prefix: &str, version: &str) -> Result<Option<PathBuf>> {
        let binary = &self.config.binary;
        debug!("installing {} {}", self.config.repo, version);

        if !upgrade {
            let (_, should_download) = self.locator.should_install(binary)?;
            if !should_download {
                return Ok(None);
            }
        }

        let (prefix, version) = if version.is_empty() {
            let latest = self.releases.latest(&self.config.org, &self.config.repo)?;
            (latest.tag_prefix, latest.version.to_string())
        } else {
            (tag_prefix.to_string(), version.to_string())
        };

        let directory = self.target_directory()?;
        let file_name = self.locator.binary_with_extension(binary);
        let target = InstallTarget::new(binary, &directory, &file_name);

        let url = download_url(self.config, self.locator.platform(), &prefix, &version);
        self.downloader.download(&url, &target.temporary_path)?;

        self.swap.swap(&target.temporary_path, &target.final_path)?;
        make_executable(&target.final_path)?;

        info!(
            "{} cli has been installed into {}",
            self.config.repo,
            target.final_path.display()
        );
        Ok(Some(target.final_path))
    }
}
