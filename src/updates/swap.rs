//! Replacing an installed binary with a freshly downloaded one.
//!
//! POSIX systems rename the download directly over the old binary; a running
//! process keeps the old inode. Windows refuses to overwrite a running
//! executable, so the old binary is first moved aside to `<final>.deleteme`.
//! Moved-aside files are never cleaned up.
//!
//! Neither strategy is safe under concurrent invocation, and on Windows a
//! crash between the two renames leaves no binary at the final path.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::Platform;
use crate::error::{BinupError, Result};

/// Suffix for the moved-aside binary on Windows.
pub const DELETEME_SUFFIX: &str = ".deleteme";

/// Strategy for moving a downloaded binary into place.
pub trait PlatformSwap {
    /// Move `temp_path` to `final_path`, replacing any existing binary.
    fn swap(&self, temp_path: &Path, final_path: &Path) -> Result<()>;
}

/// Single atomic rename.
#[derive(Debug, Clone, Copy, Default)]
pub struct PosixSwap;

impl PlatformSwap for PosixSwap {
    fn swap(&self, temp_path: &Path, final_path: &Path) -> Result<()> {
        fs::rename(temp_path, final_path)
            .map_err(|e| BinupError::filesystem(final_path, "Failed to replace binary", e))
    }
}

/// Move the locked binary aside, then rename the download into its place.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowsSwap;

impl PlatformSwap for WindowsSwap {
    fn swap(&self, temp_path: &Path, final_path: &Path) -> Result<()> {
        if final_path.exists() {
            let aside = deleteme_path(final_path);
            debug!("Moving {} aside to {}", final_path.display(), aside.display());
            // Nothing has been touched yet if this fails.
            fs::rename(final_path, &aside).map_err(|e| {
                BinupError::filesystem(final_path, "Failed to move running binary aside", e)
            })?;
        }

        fs::rename(temp_path, final_path)
            .map_err(|e| BinupError::filesystem(final_path, "Failed to move new binary into place", e))
    }
}

/// `<path>.deleteme`
pub fn deleteme_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(DELETEME_SUFFIX);
    PathBuf::from(name)
}

/// Pick the swap strategy for `platform`.
pub fn swap_for(platform: &Platform) -> Box<dyn PlatformSwap> {
    if platform.is_windows() {
        Box::new(WindowsSwap)
    } else {
        Box::new(PosixSwap)
    }
}
