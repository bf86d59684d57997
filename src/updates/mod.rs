//! Self-update of the running binary.
//!
//! This module provides:
//! - Semantic version parsing and comparison
//! - Latest-release lookup against the GitHub releases API
//! - The upgrade decision flow (compare, confirm, install)
//! - Locating, downloading and atomically swapping in release binaries

pub mod download;
pub mod installer;
pub mod locator;
pub mod platform;
pub mod release;
pub mod swap;
pub mod upgrade;
pub mod version;

pub use download::{make_executable, Downloader, DOWNLOAD_TIMEOUT};
pub use installer::{download_url, BinaryInstaller, InstallTarget, Installer};
pub use locator::{binary_with_extension, parse_system_path, BinaryLocator};
pub use platform::Platform;
pub use release::{GitHubReleases, ReleaseInfo, ReleaseSource};
pub use swap::{swap_for, PlatformSwap, PosixSwap, WindowsSwap};
pub use upgrade::{UpgradeEngine, UpgradeOutcome};
pub use version::{compare, is_dev_prerelease, Version};
