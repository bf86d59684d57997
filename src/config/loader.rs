//! User configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::UpdateConfig;
use crate::error::{BinupError, Result};

/// Location of the user config: `~/.binup/config.yml`.
pub fn user_config_path() -> Option<PathBuf> {
    Some(dirs::home_dir()?.join(".binup").join("config.yml"))
}

/// Load the user config, falling back to defaults when no file exists.
pub fn load_config() -> Result<UpdateConfig> {
    match user_config_path() {
        Some(path) if path.exists() => load_config_from(&path),
        _ => Ok(UpdateConfig::default()),
    }
}

/// Load config from a specific file. Missing keys keep their defaults.
pub fn load_config_from(path: &Path) -> Result<UpdateConfig> {
    debug!("Loading config from {}", path.display());

    let content = fs::read_to_string(path)?;

    // An empty file parses to null; treat it as "no changes".
    if content.trim().is_empty() {
        return Ok(UpdateConfig::default());
    }

    serde_yaml::from_str(&content).map_err(|e| BinupError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
