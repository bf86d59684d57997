//! Turning errors into process exits.
//!
//! Nothing below the CLI layer exits the process. Commands return errors, and
//! [`check_err`] formats them and hands them to a [`Terminator`], which the
//! binary backs with [`ProcessExit`] and tests replace with a recorder.

use std::error::Error as StdError;
use std::io;

use crate::error::BinupError;

/// Exit code for a failed command.
pub const DEFAULT_ERROR_EXIT_CODE: i32 = 1;

const ERROR_PREFIX: &str = "error: ";

/// Ends the program with a message and exit code.
pub trait Terminator {
    fn terminate(&self, message: &str, code: i32);
}

/// Prints the message to stderr and exits the process.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessExit;

impl Terminator for ProcessExit {
    fn terminate(&self, message: &str, code: i32) {
        if !message.is_empty() {
            let message = if message.ends_with('\n') {
                message.to_string()
            } else {
                format!("{}\n", message)
            };
            eprint!("{}", message);
        }
        std::process::exit(code);
    }
}

/// User-facing text for `err`.
///
/// Connection failures are rephrased so they point at the server setting
/// rather than the request internals.
pub fn standard_error_message(err: &BinupError) -> String {
    let Some(transport) = find_source::<reqwest::Error>(err) else {
        return err.to_string();
    };

    if !transport.is_connect() {
        return err.to_string();
    }

    let refused = find_source::<io::Error>(transport)
        .is_some_and(|e| e.kind() == io::ErrorKind::ConnectionRefused);
    if refused {
        let host = transport
            .url()
            .and_then(|u| u.host_str().map(|h| match u.port() {
                Some(port) => format!("{}:{}", h, port),
                None => h.to_string(),
            }))
            .unwrap_or_else(|| "localhost".to_string());
        return format!(
            "The connection to the server {} was refused - did you specify the right host or port?",
            host
        );
    }

    format!("Unable to connect to the server: {}", err)
}

/// Report `err` through `terminator` with the `error: ` prefix.
pub fn check_err(err: &BinupError, terminator: &dyn Terminator) {
    let mut message = standard_error_message(err);
    if !message.starts_with(ERROR_PREFIX) {
        message = format!("{}{}", ERROR_PREFIX, message);
    }
    terminator.terminate(&message, DEFAULT_ERROR_EXIT_CODE);
}

fn find_source<'a, T: StdError + 'static>(err: &'a (dyn StdError + 'static)) -> Option<&'a T> {
    let mut current = Some(err);
    while let Some(e) = current {
        if let Some(found) = e.downcast_ref::<T>() {
            return Some(found);
        }
        current = e.source();
    }
    None
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Records terminations instead of exiting.
    #[derive(Default)]
    pub(crate) struct RecordingTerminator {
        pub(crate) calls: RefCell<Vec<(String, i32)>>,
    }

    impl Terminator for RecordingTerminator {
        fn terminate(&self, message: &str, code: i32) {
            self.calls.borrow_mut().push((message.to_string(), code));
        }
    }

    #[test]
    fn prefixes_plain_errors() {
        let terminator = RecordingTerminator::default();
        let err = BinupError::NotFound {
            org: "acme".into(),
            repo: "tool".into(),
        };

        check_err(&err, &terminator);

        let calls = terminator.calls.borrow();
        assert_eq!(
            calls.as_slice(),
            [(
                "error: No published release found for acme/tool".to_string(),
                1
            )]
        );
    }

    #[test]
    fn does_not_double_prefix() {
        let terminator = RecordingTerminator::default();
        let err = BinupError::Other(anyhow::anyhow!("error: already prefixed"));

        check_err(&err, &terminator);

        assert_eq!(terminator.calls.borrow()[0].0, "error: already prefixed");
    }

    #[test]
    fn connection_failures_mention_server() {
        let client = reqwest::blocking::Client::new();
        let url = "http://127.0.0.1:1/repos/acme/tool/releases/latest";
        let transport = client.get(url).send().unwrap_err();
        let err = BinupError::LatestVersion {
            source: Box::new(BinupError::network(url, transport)),
        };

        let message = standard_error_message(&err);

        assert!(
            message.starts_with("The connection to the server 127.0.0.1:1 was refused")
                || message.starts_with("Unable to connect to the server: "),
            "unexpected message: {}",
            message
        );
    }

    #[test]
    fn non_transport_errors_pass_through() {
        let err = BinupError::Download {
            url: "https://example.com/tool".into(),
            status: 404,
        };
        assert_eq!(
            standard_error_message(&err),
            "download of https://example.com/tool failed with return code 404"
        );
    }
}
