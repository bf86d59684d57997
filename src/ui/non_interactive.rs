//! Non-interactive UI for batch mode and CI.

use std::collections::HashMap;

use tracing::debug;

use crate::error::Result;

use super::{OutputMode, Prompt, UserInterface};

/// Prefix for environment variables that answer prompts.
pub const PROMPT_ENV_PREFIX: &str = "BINUP_PROMPT_";

/// UI implementation for non-interactive mode.
///
/// Prompts are never shown. Each answer comes from a
/// `BINUP_PROMPT_<KEY>` environment variable when set, otherwise the
/// prompt's default.
pub struct NonInteractiveUI {
    mode: OutputMode,
    env_overrides: HashMap<String, String>,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        let env_overrides: HashMap<String, String> = std::env::vars()
            .filter(|(k, _)| k.starts_with(PROMPT_ENV_PREFIX))
            .collect();

        Self {
            mode,
            env_overrides,
        }
    }

    /// Create with explicit overrides (for testing).
    pub fn with_overrides(mode: OutputMode, overrides: HashMap<String, String>) -> Self {
        Self {
            mode,
            env_overrides: overrides,
        }
    }
}

impl UserInterface for NonInteractiveUI {
    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn confirm(&mut self, prompt: &Prompt) -> Result<bool> {
        let env_key = format!("{}{}", PROMPT_ENV_PREFIX, prompt.key.to_uppercase());
        if let Some(value) = self.env_overrides.get(&env_key) {
            match value.trim().to_lowercase().as_str() {
                "y" | "yes" | "true" | "1" => return Ok(true),
                "n" | "no" | "false" | "0" => return Ok(false),
                other => debug!("Ignoring unrecognised answer {other:?} in {env_key}"),
            }
        }

        debug!("Answering '{}' with default {}", prompt.key, prompt.default);
        Ok(prompt.default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompt(default: bool) -> Prompt {
        Prompt::confirm("upgrade", "Upgrade?", default)
    }

    #[test]
    fn confirm_uses_default() {
        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, HashMap::new());
        assert!(ui.confirm(&prompt(true)).unwrap());
        assert!(!ui.confirm(&prompt(false)).unwrap());
    }

    #[test]
    fn confirm_uses_env_override() {
        let mut overrides = HashMap::new();
        overrides.insert("BINUP_PROMPT_UPGRADE".to_string(), "no".to_string());
        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, overrides);
        assert!(!ui.confirm(&prompt(true)).unwrap());
    }

    #[test]
    fn unrecognised_override_falls_back_to_default() {
        let mut overrides = HashMap::new();
        overrides.insert("BINUP_PROMPT_UPGRADE".to_string(), "perhaps".to_string());
        let mut ui = NonInteractiveUI::with_overrides(OutputMode::Normal, overrides);
        assert!(ui.confirm(&prompt(true)).unwrap());
    }
}
