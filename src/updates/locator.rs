//! Install directory and binary lookup.
//!
//! Decides where binaries are installed (`~/bin`) and whether a binary needs
//! downloading at all. PATH resolution iterates the entries directly rather
//! than shelling out to `which`.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::Platform;
use crate::error::{BinupError, Result};

/// Directory under the home directory that receives installed binaries.
pub const INSTALL_SUBDIR: &str = "bin";

/// Locates install directories and existing binaries.
///
/// All environment inputs are captured at construction so lookups are
/// deterministic and testable.
#[derive(Debug, Clone)]
pub struct BinaryLocator {
    home: Option<PathBuf>,
    search_path: Vec<PathBuf>,
    current_exe: Option<PathBuf>,
    platform: Platform,
}

impl BinaryLocator {
    /// Create a locator from explicit inputs.
    pub fn new(
        home: impl Into<PathBuf>,
        search_path: Vec<PathBuf>,
        current_exe: Option<PathBuf>,
        platform: Platform,
    ) -> Self {
        Self {
            home: Some(home.into()),
            search_path,
            current_exe,
            platform,
        }
    }

    /// Create a locator for an environment with no home directory.
    ///
    /// Lookups that need the install directory fail with
    /// [`BinupError::Lookup`]; everything else works as usual.
    pub fn without_home(
        search_path: Vec<PathBuf>,
        current_exe: Option<PathBuf>,
        platform: Platform,
    ) -> Self {
        Self {
            home: None,
            search_path,
            current_exe,
            platform,
        }
    }

    /// Create a locator from the process environment.
    pub fn from_env() -> Self {
        let search_path = parse_system_path();
        let current_exe = std::env::current_exe().ok();
        match dirs::home_dir() {
            Some(home) => Self::new(home, search_path, current_exe, Platform::current()),
            None => Self::without_home(search_path, current_exe, Platform::current()),
        }
    }

    /// Platform binaries are named for.
    pub fn platform(&self) -> &Platform {
        &self.platform
    }

    /// `<home>/bin`, created if missing.
    pub fn install_directory(&self) -> Result<PathBuf> {
        let home = self.home.as_ref().ok_or_else(|| BinupError::Lookup {
            name: "home directory".to_string(),
            message: "could not determine the user's home directory".to_string(),
        })?;
        let path = home.join(INSTALL_SUBDIR);
        fs::create_dir_all(&path)
            .map_err(|e| BinupError::filesystem(&path, "Failed to create install directory", e))?;
        Ok(path)
    }

    /// Directory containing the running executable, symlinks resolved.
    pub fn binary_location(&self) -> Result<PathBuf> {
        let process_binary = self.current_exe.as_ref().ok_or_else(|| BinupError::Lookup {
            name: "current executable".to_string(),
            message: "the running executable path is unknown".to_string(),
        })?;
        debug!("processBinary {}", process_binary.display());

        let resolved = fs::canonicalize(process_binary).map_err(|e| BinupError::Lookup {
            name: process_binary.display().to_string(),
            message: e.to_string(),
        })?;
        debug!("processBinary {}", resolved.display());

        let dir = resolved
            .parent()
            .map(Path::to_path_buf)
            .ok_or_else(|| BinupError::Lookup {
                name: resolved.display().to_string(),
                message: "executable has no parent directory".to_string(),
            })?;
        debug!("dir from '{}' is '{}'", resolved.display(), dir.display());
        Ok(dir)
    }

    /// Platform file name for `binary`.
    pub fn binary_with_extension(&self, binary: &str) -> String {
        binary_with_extension(binary, &self.platform)
    }

    /// Decide whether `binary` must be downloaded.
    ///
    /// Returns the platform file name and `true` only when the binary is
    /// neither on the search path nor already in the install directory.
    pub fn should_install(&self, binary: &str) -> Result<(String, bool)> {
        let file_name = self.binary_with_extension(binary);

        if let Some(found) = find_on_path(&file_name, &self.search_path) {
            debug!(
                "{} is already available on your PATH at {}",
                file_name,
                found.display()
            );
            return Ok((file_name, false));
        }

        let bin_dir = self.install_directory()?;
        let installed = bin_dir.join(&file_name);
        let exists = installed.try_exists().map_err(|e| BinupError::Lookup {
            name: file_name.clone(),
            message: e.to_string(),
        })?;

        if exists {
            debug!("Please add {} to your PATH", bin_dir.display());
            return Ok((file_name, false));
        }

        Ok((file_name, true))
    }
}

/// Platform file name for `binary`.
///
/// Windows executables get `.exe`, except `gcloud`, which ships as a `.cmd`
/// wrapper.
pub fn binary_with_extension(binary: &str, platform: &Platform) -> String {
    if platform.is_windows() {
        if binary == "gcloud" {
            return format!("{}.cmd", binary);
        }
        return format!("{}.exe", binary);
    }
    binary.to_string()
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// First executable `file_name` found in `path_entries`.
pub fn find_on_path(file_name: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    path_entries
        .iter()
        .map(|dir| dir.join(file_name))
        .find(|candidate| candidate.is_file() && is_executable(candidate))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    fs::metadata(path)
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
fn is_executable(_path: &Path) -> bool {
    true
}
