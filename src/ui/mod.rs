//! User interaction.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`StreamUI`] over caller-supplied input, output and error streams
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for batch mode and CI
//! - [`MockUI`] for tests
//!
//! # Example
//!
//! ```
//! use binup::ui::{Prompt, StreamUI, UserInterface};
//!
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! let mut ui = StreamUI::new(&b"n\n"[..], &mut out, &mut err);
//! let answer = ui.confirm(&Prompt::confirm("upgrade", "Upgrade now?", true)).unwrap();
//! assert!(!answer);
//! ```

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod prompts;
pub mod stream;
pub mod terminal;

pub use mock::MockUI;
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use prompts::{prompt_confirm, read_confirm};
pub use stream::StreamUI;
pub use terminal::{create_ui, TerminalUI};

use crate::error::Result;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Ask a yes/no question.
    fn confirm(&mut self, prompt: &Prompt) -> Result<bool>;
}

/// A yes/no question to show to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    /// Unique key for the prompt (used for overrides and test lookup).
    pub key: String,
    /// The question to display.
    pub question: String,
    /// Extra explanation shown on request.
    pub help: Option<String>,
    /// Answer used when the user just presses enter.
    pub default: bool,
}

impl Prompt {
    /// Create a confirmation prompt.
    pub fn confirm(key: impl Into<String>, question: impl Into<String>, default: bool) -> Self {
        Self {
            key: key.into(),
            question: question.into(),
            help: None,
            default,
        }
    }

    /// Attach help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

/// Check if running in a CI environment.
///
/// Checks common CI environment variables: `CI`, `GITHUB_ACTIONS`,
/// `GITLAB_CI`, `CIRCLECI`, `TRAVIS`, `JENKINS_URL`.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
        || std::env::var("GITLAB_CI").is_ok()
        || std::env::var("CIRCLECI").is_ok()
        || std::env::var("TRAVIS").is_ok()
        || std::env::var("JENKINS_URL").is_ok()
}
