//! Build-time identity of the running binary.
//!
//! Release builds stamp the version, commit and date through environment
//! variables at compile time (`BINUP_VERSION`, `BINUP_COMMIT`,
//! `BINUP_BUILD_DATE`). Unstamped builds fall back to the crate version.

use crate::error::Result;
use crate::updates::Version;

/// Version, commit and date of the running build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    version: String,
    commit: Option<String>,
    build_date: Option<String>,
}

impl BuildInfo {
    /// Create build info with explicit values.
    pub fn new(
        version: impl Into<String>,
        commit: Option<String>,
        build_date: Option<String>,
    ) -> Self {
        Self {
            version: version.into(),
            commit,
            build_date,
        }
    }

    /// Build info stamped into this binary.
    pub fn current() -> Self {
        Self {
            version: option_env!("BINUP_VERSION")
                .unwrap_or(env!("CARGO_PKG_VERSION"))
                .to_string(),
            commit: option_env!("BINUP_COMMIT").map(String::from),
            build_date: option_env!("BINUP_BUILD_DATE").map(String::from),
        }
    }

    /// Raw version string as stamped.
    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn commit(&self) -> Option<&str> {
        self.commit.as_deref()
    }

    pub fn build_date(&self) -> Option<&str> {
        self.build_date.as_deref()
    }

    /// Parsed version of this build.
    pub fn semver(&self) -> Result<Version> {
        Version::parse(&self.version)
    }

    /// The version string if it parses, otherwise `default`.
    pub fn version_string_or<'a>(&'a self, default: &'a str) -> &'a str {
        match self.semver() {
            Ok(_) => &self.version,
            Err(_) => default,
        }
    }
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self::current()
    }
}
