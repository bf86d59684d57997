//! Target platform naming for release assets.
//!
//! Release assets are named `<binary>-<os>-<arch>`, using `linux`, `darwin`
//! and `windows` for the OS and `amd64`, `arm64`, `386` and `arm` for the
//! architecture.

use std::fmt;

/// Operating system and architecture of a release asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Platform {
    os: String,
    arch: String,
}

impl Platform {
    /// Create a platform from asset-style names.
    pub fn new(os: impl Into<String>, arch: impl Into<String>) -> Self {
        Self {
            os: os.into(),
            arch: arch.into(),
        }
    }

    /// Platform of the running binary.
    pub fn current() -> Self {
        Self::from_rust(std::env::consts::OS, std::env::consts::ARCH)
    }

    /// Map Rust's `std::env::consts` names to asset names.
    pub fn from_rust(os: &str, arch: &str) -> Self {
        let os = match os {
            "macos" => "darwin",
            other => other,
        };
        let arch = match arch {
            "x86_64" => "amd64",
            "aarch64" => "arm64",
            "x86" => "386",
            other => other,
        };
        Self::new(os, arch)
    }

    /// Windows-style platform for tests and cross-platform callers.
    pub fn windows_amd64() -> Self {
        Self::new("windows", "amd64")
    }

    pub fn os(&self) -> &str {
        &self.os
    }

    pub fn arch(&self) -> &str {
        &self.arch
    }

    pub fn is_windows(&self) -> bool {
        self.os == "windows"
    }

    /// Extension appended to downloaded executables.
    pub fn exe_suffix(&self) -> &'static str {
        if self.is_windows() {
            ".exe"
        } else {
            ""
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.os, self.arch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_rust_names_to_asset_names() {
        assert_eq!(Platform::from_rust("macos", "aarch64").to_string(), "darwin-arm64");
        assert_eq!(Platform::from_rust("linux", "x86_64").to_string(), "linux-amd64");
        assert_eq!(Platform::from_rust("windows", "x86").to_string(), "windows-386");
        assert_eq!(Platform::from_rust("linux", "arm").to_string(), "linux-arm");
    }

    #[test]
    fn only_windows_gets_exe_suffix() {
        assert_eq!(Platform::windows_amd64().exe_suffix(), ".exe");
        assert_eq!(Platform::new("linux", "amd64").exe_suffix(), "");
        assert_eq!(Platform::new("darwin", "arm64").exe_suffix(), "");
    }

    #[test]
    fn current_platform_is_named() {
        let platform = Platform::current();
        assert!(!platform.os().is_empty());
        assert!(!platform.arch().is_empty());
        assert_eq!(platform.is_windows(), cfg!(windows));
    }
}
