//! Log level selection.

use tracing::Level;

/// Environment variable that overrides the log level flags.
pub const LOG_LEVEL_ENV: &str = "BINUP_LOG_LEVEL";

/// Pick the log level.
///
/// A valid `env_level` wins over the flags. An invalid one falls back to the
/// flags and is returned as the second element so the caller can report it
/// once logging is up.
pub fn select_level(env_level: Option<&str>, verbose: bool, quiet: bool) -> (Level, Option<String>) {
    let mut invalid = None;

    if let Some(raw) = env_level.map(str::trim).filter(|s| !s.is_empty()) {
        match parse_level(raw) {
            Some(level) => return (level, None),
            None => invalid = Some(format!("invalid log level {:?} in {}", raw, LOG_LEVEL_ENV)),
        }
    }

    let level = if verbose {
        Level::DEBUG
    } else if quiet {
        Level::WARN
    } else {
        Level::INFO
    };
    (level, invalid)
}

fn parse_level(raw: &str) -> Option<Level> {
    match raw.to_lowercase().as_str() {
        "fatal" | "panic" => Some(Level::ERROR),
        "warning" => Some(Level::WARN),
        other => other.parse().ok(),
    }
}
