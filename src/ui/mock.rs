//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. It can be configured with
//! pre-determined prompt answers.
//!
//! # Example
//!
//! ```
//! use binup::ui::{MockUI, Prompt, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.set_prompt_response("upgrade", false);
//!
//! let answer = ui.confirm(&Prompt::confirm("upgrade", "Upgrade?", true)).unwrap();
//! assert!(!answer);
//! assert_eq!(ui.prompts_shown(), ["upgrade"]);
//! ```

use std::collections::{HashMap, VecDeque};

use crate::error::{BinupError, Result};

use super::{Prompt, UserInterface};

/// Mock UI implementation for testing.
///
/// Supports both single answers (via `set_prompt_response`) and queued
/// answers (via `queue_prompt_responses`) for keys asked multiple times.
/// Unconfigured prompts take their default.
#[derive(Debug, Default)]
pub struct MockUI {
    messages: Vec<String>,
    successes: Vec<String>,
    prompt_responses: HashMap<String, bool>,
    prompt_queues: HashMap<String, VecDeque<bool>>,
    prompt_failure: Option<String>,
    prompts_shown: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the answer for a prompt key.
    pub fn set_prompt_response(&mut self, key: &str, answer: bool) {
        self.prompt_responses.insert(key.to_string(), answer);
    }

    /// Queue multiple answers for the same prompt key.
    ///
    /// Answers are returned in order. After the queue is exhausted,
    /// falls back to `set_prompt_response` or the prompt default.
    pub fn queue_prompt_responses(&mut self, key: &str, answers: Vec<bool>) {
        self.prompt_queues
            .insert(key.to_string(), answers.into_iter().collect());
    }

    /// Make every prompt fail as if reading the answer broke.
    pub fn fail_prompts(&mut self, message: &str) {
        self.prompt_failure = Some(message.to_string());
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all prompts that were shown (by key).
    pub fn prompts_shown(&self) -> &[String] {
        &self.prompts_shown
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn confirm(&mut self, prompt: &Prompt) -> Result<bool> {
        self.prompts_shown.push(prompt.key.clone());

        if let Some(message) = &self.prompt_failure {
            return Err(BinupError::Prompt {
                message: message.clone(),
            });
        }

        if let Some(answer) = self
            .prompt_queues
            .get_mut(&prompt.key)
            .and_then(|queue| queue.pop_front())
        {
            return Ok(answer);
        }

        Ok(self
            .prompt_responses
            .get(&prompt.key)
            .copied()
            .unwrap_or(prompt.default))
    }
}
