//! Update source configuration.
//!
//! Settings resolve in three layers, later overriding earlier:
//!
//! 1. Compile-time defaults (`BINUP_GIT_SERVER`, `BINUP_ORG`, `BINUP_REPO`,
//!    `BINUP_BINARY` stamped by the release build)
//! 2. User config file (`~/.binup/config.yml`)
//! 3. Command-line flags and their environment fallbacks
//!
//! # Example
//!
//! ```
//! use binup::config::{ConfigOverrides, UpdateConfig};
//!
//! let mut config = UpdateConfig::default();
//! config.apply(ConfigOverrides {
//!     git_server: Some("git.example.com".to_string()),
//!     ..Default::default()
//! });
//! assert_eq!(config.git_server, "git.example.com");
//! ```

pub mod loader;

pub use loader::{load_config, load_config_from, user_config_path};

use serde::{Deserialize, Serialize};

/// Where releases are published and which binary to fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateConfig {
    /// Host serving release downloads, optionally with a scheme.
    pub git_server: String,

    /// Base URL of the releases API.
    pub api_url: String,

    /// Organization that owns the repository.
    pub org: String,

    /// Repository publishing the releases.
    pub repo: String,

    /// Binary name, used for the asset name and the installed file name.
    pub binary: String,

    /// Token sent as a bearer credential to the releases API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_token: Option<String>,
}

impl Default for UpdateConfig {
    fn default() -> Self {
        Self {
            git_server: option_env!("BINUP_GIT_SERVER")
                .unwrap_or("github.com")
                .to_string(),
            api_url: option_env!("BINUP_API_URL")
                .unwrap_or("https://api.github.com")
                .to_string(),
            org: option_env!("BINUP_ORG").unwrap_or("binup-dev").to_string(),
            repo: option_env!("BINUP_REPO").unwrap_or("binup").to_string(),
            binary: option_env!("BINUP_BINARY").unwrap_or("binup").to_string(),
            github_token: None,
        }
    }
}

/// Values supplied on the command line or through the environment.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub git_server: Option<String>,
    pub api_url: Option<String>,
    pub github_token: Option<String>,
}

impl UpdateConfig {
    /// Apply overrides on top of the current values.
    pub fn apply(&mut self, overrides: ConfigOverrides) {
        if let Some(git_server) = overrides.git_server {
            self.git_server = git_server;
        }
        if let Some(api_url) = overrides.api_url {
            self.api_url = api_url;
        }
        if let Some(token) = overrides.github_token.filter(|t| !t.is_empty()) {
            self.github_token = Some(token);
        }
    }
}
