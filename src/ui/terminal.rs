//! Interactive terminal UI.

use std::io::{IsTerminal, Write};

use console::{Style, Term};

use crate::error::Result;

use super::{is_ci, prompt_confirm, NonInteractiveUI, OutputMode, Prompt, StreamUI, UserInterface};

/// Interactive terminal UI implementation.
pub struct TerminalUI {
    term: Term,
    success: Style,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let colors = should_use_colors();
        let style = |s: Style| if colors { s } else { Style::new() };

        Self {
            term: Term::stdout(),
            success: style(Style::new().green()),
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.success.apply_to(msg)).ok();
    }

    fn confirm(&mut self, prompt: &Prompt) -> Result<bool> {
        if let Some(help) = &prompt.help {
            if self.mode.shows_status() {
                writeln!(self.term, "{}", Style::new().dim().apply_to(help)).ok();
            }
        }
        prompt_confirm(prompt, &self.term)
    }
}

/// Whether terminal output should be colored.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    Term::stdout().is_term()
}

/// Create the appropriate UI based on context.
///
/// Batch mode and CI never prompt. A real terminal gets the dialoguer
/// prompt, and anything else reads answers line by line from stdin.
pub fn create_ui(batch_mode: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if batch_mode || is_ci() {
        return Box::new(NonInteractiveUI::new(mode));
    }

    if Term::stdout().is_term() && std::io::stdin().is_terminal() {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(StreamUI::with_mode(
            std::io::stdin().lock(),
            std::io::stdout(),
            std::io::stderr(),
            mode,
        ))
    }
}
