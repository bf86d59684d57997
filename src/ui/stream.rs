//! UI over caller-supplied streams.

use std::io::{BufRead, Write};

use crate::error::Result;

use super::{read_confirm, OutputMode, Prompt, UserInterface};

/// UI that reads answers from `input` and writes to `out` and `err`.
///
/// Used when stdin is not a terminal (piped answers) and by embedders that
/// want to drive the prompt themselves.
pub struct StreamUI<R, W, E> {
    input: R,
    out: W,
    err: E,
    mode: OutputMode,
}

impl<R: BufRead, W: Write, E: Write> StreamUI<R, W, E> {
    /// Create a stream UI in normal output mode.
    pub fn new(input: R, out: W, err: E) -> Self {
        Self::with_mode(input, out, err, OutputMode::Normal)
    }

    pub fn with_mode(input: R, out: W, err: E, mode: OutputMode) -> Self {
        Self {
            input,
            out,
            err,
            mode,
        }
    }
}

impl<R: BufRead, W: Write, E: Write> UserInterface for StreamUI<R, W, E> {
    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        writeln!(self.out, "{}", msg).ok();
    }

    fn confirm(&mut self, prompt: &Prompt) -> Result<bool> {
        read_confirm(prompt, &mut self.input, &mut self.out, &mut self.err)
    }
}
