//! Latest-release lookup.
//!
//! The upgrade flow only sees [`ReleaseSource`]; [`GitHubReleases`] is the
//! production implementation backed by the GitHub REST API.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::debug;

use super::Version;
use crate::config::UpdateConfig;
use crate::error::{BinupError, Result};

/// Timeout for a release lookup request.
const LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

/// Latest published release of a repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseInfo {
    /// Parsed release version.
    pub version: Version,
    /// Literal text preceding the version in the release tag (e.g. `v`).
    pub tag_prefix: String,
}

impl ReleaseInfo {
    /// Split a release tag into its prefix and version.
    ///
    /// The prefix is everything before the first ASCII digit, so `v1.2.1`
    /// yields (`v`, `1.2.1`) and `release-2.0.0` yields (`release-`, `2.0.0`).
    pub fn from_tag(tag: &str) -> Result<Self> {
        let split = tag.find(|c: char| c.is_ascii_digit()).unwrap_or(tag.len());
        let (prefix, raw_version) = tag.split_at(split);

        if raw_version.is_empty() {
            return Err(BinupError::InvalidVersionFormat {
                raw: tag.to_string(),
                reason: "release tag carries no version".to_string(),
            });
        }

        Ok(Self {
            version: Version::parse(raw_version)?,
            tag_prefix: prefix.to_string(),
        })
    }
}

/// Source of release information.
///
/// Each call performs a fresh lookup; results are never cached.
pub trait ReleaseSource {
    /// Resolve the latest published release of `org/repo`.
    fn latest(&self, org: &str, repo: &str) -> Result<ReleaseInfo>;
}

#[derive(Debug, Deserialize)]
struct LatestRelease {
    tag_name: String,
}

/// Release lookup against the GitHub REST API.
pub struct GitHubReleases {
    client: Client,
    api_url: String,
    token: Option<String>,
}

impl GitHubReleases {
    /// Create a client for the given API base URL (e.g. `https://api.github.com`).
    pub fn new(api_url: impl Into<String>, token: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("binup/", env!("CARGO_PKG_VERSION")))
            .timeout(LOOKUP_TIMEOUT)
            .build()
            .map_err(|e| BinupError::Other(e.into()))?;

        Ok(Self {
            client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            token,
        })
    }

    /// Create a client from the update configuration.
    pub fn from_config(config: &UpdateConfig) -> Result<Self> {
        Self::new(&config.api_url, config.github_token.clone())
    }

    fn latest_url(&self, org: &str, repo: &str) -> String {
        format!("{}/repos/{}/{}/releases/latest", self.api_url, org, repo)
    }
}

impl ReleaseSource for GitHubReleases {
    fn latest(&self, org: &str, repo: &str) -> Result<ReleaseInfo> {
        let url = self.latest_url(org, repo);
        debug!("Fetching latest release from: {}", url);

        let mut request = self
            .client
            .get(&url)
            .header("Accept", "application/vnd.github+json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .map_err(|e| BinupError::network(&url, e))?;

        match response.status() {
            status if status.is_success() => {}
            StatusCode::NOT_FOUND => {
                return Err(BinupError::NotFound {
                    org: org.to_string(),
                    repo: repo.to_string(),
                })
            }
            status => {
                return Err(BinupError::ReleaseLookup {
                    org: org.to_string(),
                    repo: repo.to_string(),
                    status: status.as_u16(),
                })
            }
        }

        let release: LatestRelease = response.json().map_err(|e| BinupError::InvalidResponse {
            url: url.clone(),
            message: e.to_string(),
        })?;
        debug!("Latest release tag of {}/{}: {}", org, repo, release.tag_name);

        ReleaseInfo::from_tag(&release.tag_name)
    }
}
