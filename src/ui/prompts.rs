//! Confirmation prompts.
//!
//! [`prompt_confirm`] drives a real terminal through dialoguer;
//! [`read_confirm`] works over any reader and writers.

use std::io::{BufRead, Write};

use console::Term;
use dialoguer::Confirm;

use crate::error::{BinupError, Result};

use super::Prompt;

/// Convert dialoguer errors to BinupError.
fn map_dialoguer_err(e: dialoguer::Error) -> BinupError {
    BinupError::Prompt {
        message: e.to_string(),
    }
}

fn map_io_err(e: std::io::Error) -> BinupError {
    BinupError::Prompt {
        message: e.to_string(),
    }
}

/// Ask a yes/no question on a terminal.
pub fn prompt_confirm(prompt: &Prompt, term: &Term) -> Result<bool> {
    Confirm::new()
        .with_prompt(&prompt.question)
        .default(prompt.default)
        .interact_on(term)
        .map_err(map_dialoguer_err)
}

/// Ask a yes/no question over plain streams.
///
/// An empty answer takes the default, `?` prints the help text, and anything
/// unrecognised is reported on `err` before asking again. End of input is an
/// error.
pub fn read_confirm<R, W, E>(prompt: &Prompt, input: &mut R, out: &mut W, err: &mut E) -> Result<bool>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let hint = match (prompt.default, prompt.help.is_some()) {
        (true, true) => "[? for help] (Y/n)",
        (true, false) => "(Y/n)",
        (false, true) => "[? for help] (y/N)",
        (false, false) => "(y/N)",
    };

    loop {
        write!(out, "{} {} ", prompt.question, hint).map_err(map_io_err)?;
        out.flush().map_err(map_io_err)?;

        let mut line = String::new();
        let read = input.read_line(&mut line).map_err(map_io_err)?;
        if read == 0 {
            return Err(BinupError::Prompt {
                message: "unexpected end of input".to_string(),
            });
        }

        match line.trim().to_lowercase().as_str() {
            "" => return Ok(prompt.default),
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            "?" if prompt.help.is_some() => {
                if let Some(help) = &prompt.help {
                    writeln!(out, "{}", help).map_err(map_io_err)?;
                }
            }
            other => {
                writeln!(
                    err,
                    "Sorry, your reply was invalid: \"{}\" is not a valid answer, please try again.",
                    other
                )
                .map_err(map_io_err)?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ask(prompt: &Prompt, input: &str) -> (Result<bool>, String, String) {
        let mut reader = input.as_bytes();
        let mut out = Vec::new();
        let mut err = Vec::new();
        let answer = read_confirm(prompt, &mut reader, &mut out, &mut err);
        (
            answer,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn empty_answer_takes_default() {
        let (answer, out, _) = ask(&Prompt::confirm("k", "Upgrade?", true), "\n");
        assert!(answer.unwrap());
        assert!(out.contains("Upgrade? (Y/n)"));

        let (answer, out, _) = ask(&Prompt::confirm("k", "Upgrade?", false), "\n");
        assert!(!answer.unwrap());
        assert!(out.contains("(y/N)"));
    }

    #[test]
    fn explicit_answers() {
        let prompt = Prompt::confirm("k", "Upgrade?", true);
        assert!(ask(&prompt, "y\n").0.unwrap());
        assert!(ask(&prompt, "YES\n").0.unwrap());
        assert!(!ask(&prompt, "n\n").0.unwrap());
        assert!(!ask(&prompt, " No \n").0.unwrap());
    }

    #[test]
    fn invalid_answer_asks_again() {
        let (answer, out, err) = ask(&Prompt::confirm("k", "Upgrade?", true), "maybe\nn\n");
        assert!(!answer.unwrap());
        assert!(err.contains("\"maybe\" is not a valid answer"));
        assert_eq!(out.matches("Upgrade?").count(), 2);
    }

    #[test]
    fn question_mark_shows_help() {
        let prompt = Prompt::confirm("k", "Upgrade?", true).with_help("Fetches the latest binary");
        let (answer, out, _) = ask(&prompt, "?\ny\n");
        assert!(answer.unwrap());
        assert!(out.contains("[? for help]"));
        assert!(out.contains("Fetches the latest binary"));
    }

    #[test]
    fn end_of_input_is_error() {
        let (answer, _, _) = ask(&Prompt::confirm("k", "Upgrade?", true), "");
        assert!(matches!(answer, Err(BinupError::Prompt { .. })));
    }
}
