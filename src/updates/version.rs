//! Semantic version parsing and ordering.
//!
//! [`Version`] wraps [`semver::Version`] and orders by precedence only:
//! build metadata is carried for display but never affects comparison.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::{BinupError, Result};

/// Pre-release identifier that marks a development build.
pub const DEV_MARKER: &str = "dev";

/// A parsed `MAJOR.MINOR.PATCH[-PRE][+BUILD]` version.
#[derive(Debug, Clone)]
pub struct Version {
    inner: semver::Version,
}

impl Version {
    /// Create a release version with no pre-release or build metadata.
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            inner: semver::Version::new(major, minor, patch),
        }
    }

    /// Parse a version string.
    ///
    /// An empty string is treated as `0.0.0` rather than an error, so an
    /// unstamped build still has a comparable version.
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.is_empty() {
            return Ok(Self::new(0, 0, 0));
        }

        semver::Version::parse(raw)
            .map(|inner| Self { inner })
            .map_err(|e| BinupError::InvalidVersionFormat {
                raw: raw.to_string(),
                reason: e.to_string(),
            })
    }

    pub fn major(&self) -> u64 {
        self.inner.major
    }

    pub fn minor(&self) -> u64 {
        self.inner.minor
    }

    pub fn patch(&self) -> u64 {
        self.inner.patch
    }

    /// Dot-separated pre-release identifiers, in order.
    pub fn pre_release(&self) -> Vec<&str> {
        if self.inner.pre.is_empty() {
            Vec::new()
        } else {
            self.inner.pre.as_str().split('.').collect()
        }
    }

    /// Dot-separated build metadata identifiers, in order.
    pub fn build(&self) -> Vec<&str> {
        if self.inner.build.is_empty() {
            Vec::new()
        } else {
            self.inner.build.as_str().split('.').collect()
        }
    }

    /// Whether this is a development build (a `dev` pre-release identifier).
    pub fn is_dev_prerelease(&self) -> bool {
        self.pre_release().contains(&DEV_MARKER)
    }
}

/// Compare two versions by precedence.
pub fn compare(a: &Version, b: &Version) -> Ordering {
    a.cmp(b)
}

/// Whether `version` carries the `dev` pre-release marker.
pub fn is_dev_prerelease(version: &Version) -> bool {
    version.is_dev_prerelease()
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        // semver's Prerelease ordering already ranks an empty pre-release
        // above any non-empty one and compares numeric identifiers numerically.
        self.inner
            .major
            .cmp(&other.inner.major)
            .then_with(|| self.inner.minor.cmp(&other.inner.minor))
            .then_with(|| self.inner.patch.cmp(&other.inner.patch))
            .then_with(|| self.inner.pre.cmp(&other.inner.pre))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl FromStr for Version {
    type Err = BinupError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(raw: &str) -> Version {
        Version::parse(raw).unwrap()
    }

    #[test]
    fn parses_standard_version() {
        let version = v("1.2.1");
        assert_eq!(
            (version.major(), version.minor(), version.patch()),
            (1, 2, 1)
        );
        assert!(version.pre_release().is_empty());
        assert!(version.build().is_empty());
    }

    #[test]
    fn parses_prerelease_and_build_metadata() {
        let version = v("1.3.153-dev+7a8285f4");
        assert_eq!(
            (version.major(), version.minor(), version.patch()),
            (1, 3, 153)
        );
        assert_eq!(version.pre_release(), vec!["dev"]);
        assert_eq!(version.build(), vec!["7a8285f4"]);
    }

    #[test]
    fn empty_string_is_zero_version() {
        let version = Version::parse("").unwrap();
        assert_eq!(version, Version::new(0, 0, 0));
        assert_eq!(version.to_string(), "0.0.0");
    }

    #[test]
    fn garbage_fails_with_offending_string() {
        let err = Version::parse("abc").unwrap_err();
        assert!(matches!(err, BinupError::InvalidVersionFormat { .. }));
        assert!(err.to_string().starts_with("failed to parse version abc: "));
    }

    #[test]
    fn partial_versions_are_rejected() {
        assert!(Version::parse("1.2").is_err());
        assert!(Version::parse("v1.2.3").is_err());
    }

    #[test]
    fn display_preserves_core_and_prerelease() {
        for raw in ["0.0.0", "1.0.0-alpha", "1.0.0-alpha.1", "1.3.153-dev+7a8285f4"] {
            let reparsed = v(&v(raw).to_string());
            assert_eq!(reparsed.pre_release(), v(raw).pre_release());
            assert_eq!(reparsed.to_string(), raw);
        }
    }

    #[test]
    fn ordering_over_representative_chain() {
        let chain = [
            "0.0.0",
            "1.0.0-alpha",
            "1.0.0-alpha.2",
            "1.0.0-alpha.10",
            "1.0.0-beta",
            "1.0.0",
            "1.2.1",
            "1.3.153-dev+7a8285f4",
            "1.3.153",
            "2.0.0",
        ];
        let versions: Vec<Version> = chain.iter().map(|raw| v(raw)).collect();

        for (i, a) in versions.iter().enumerate() {
            assert_eq!(compare(a, a), Ordering::Equal, "{} not reflexive", a);
            for b in &versions[i + 1..] {
                assert_eq!(compare(a, b), Ordering::Less, "{} < {}", a, b);
                assert_eq!(compare(b, a), Ordering::Greater, "{} > {}", b, a);
            }
        }
    }

    #[test]
    fn prerelease_sorts_below_release() {
        assert!(v("1.3.153-dev+build") < v("1.3.153"));
        assert!(v("1.0.0-rc.1") < v("1.0.0"));
    }

    #[test]
    fn build_metadata_does_not_affect_ordering() {
        assert_eq!(compare(&v("1.2.1+abc"), &v("1.2.1+def")), Ordering::Equal);
        assert_eq!(v("1.2.1+abc"), v("1.2.1"));
    }

    #[test]
    fn dev_prerelease_detection() {
        assert!(is_dev_prerelease(&v("1.3.153-dev+7a8285f4")));
        assert!(is_dev_prerelease(&v("1.0.0-rc.dev")));
        assert!(!is_dev_prerelease(&v("1.2.1")));
        assert!(!is_dev_prerelease(&v("1.3.153-beta")));
        assert!(!is_dev_prerelease(&v("1.3.153-develop")));
        assert!(!is_dev_prerelease(&v("1.2.1+dev")));
    }

    #[test]
    fn from_str_matches_parse() {
        let parsed: Version = "2.4.6-beta.1".parse().unwrap();
        assert_eq!(parsed, v("2.4.6-beta.1"));
    }
}
