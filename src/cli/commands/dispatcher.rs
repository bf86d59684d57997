//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::build_info::BuildInfo;
use crate::cli::args::{Cli, Commands, VersionArgs};
use crate::config::UpdateConfig;
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output and prompts
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    build: BuildInfo,
    config: UpdateConfig,
}

impl CommandDispatcher {
    /// Create a dispatcher for the running build and resolved configuration.
    pub fn new(build: BuildInfo, config: UpdateConfig) -> Self {
        Self { build, config }
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Version(args)) => {
                let cmd = super::version::VersionCommand::new(&self.build, &self.config, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Upgrade) => {
                let cmd = super::upgrade::UpgradeCommand::new(&self.build, &self.config);
                cmd.execute(ui)
            }
            Some(Commands::Install(args)) => {
                let cmd = super::install::InstallCommand::new(&self.config, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => {
                // Default to version command with default args
                let cmd = super::version::VersionCommand::new(
                    &self.build,
                    &self.config,
                    VersionArgs::default(),
                );
                cmd.execute(ui)
            }
        }
    }
}
