//! Command-line interface for binup.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations
//! - [`exit`] - Error formatting and the injected process terminator
//! - [`logging`] - Log level selection

pub mod args;
pub mod commands;
pub mod exit;
pub mod logging;

pub use args::{Cli, Commands, CompletionsArgs, InstallArgs, VersionArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
pub use exit::{check_err, standard_error_message, ProcessExit, Terminator};
pub use logging::{select_level, LOG_LEVEL_ENV};

use crate::build_info::BuildInfo;
use crate::config::UpdateConfig;
use crate::ui::UserInterface;

/// Run the parsed command line and return the exit code.
///
/// Failures are reported through `terminator`; when it returns (as a test
/// terminator does) the default error exit code is returned.
pub fn run(
    cli: &Cli,
    build: BuildInfo,
    config: UpdateConfig,
    ui: &mut dyn UserInterface,
    terminator: &dyn Terminator,
) -> i32 {
    let dispatcher = CommandDispatcher::new(build, config);

    match dispatcher.dispatch(cli, ui) {
        Ok(result) => result.exit_code,
        Err(e) => {
            tracing::debug!("command failed: {:?}", e);
            check_err(&e, terminator);
            exit::DEFAULT_ERROR_EXIT_CODE
        }
    }
}
