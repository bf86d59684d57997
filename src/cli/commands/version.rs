//! Version command implementation.
//!
//! The `binup version` command prints the running version and then offers an
//! upgrade when a newer release exists.

use tracing::debug;

use crate::build_info::BuildInfo;
use crate::cli::args::VersionArgs;
use crate::config::UpdateConfig;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::upgrade::run_upgrade;

/// The version command implementation.
pub struct VersionCommand<'a> {
    build: &'a BuildInfo,
    config: &'a UpdateConfig,
    args: VersionArgs,
}

impl<'a> VersionCommand<'a> {
    /// Create a new version command.
    pub fn new(build: &'a BuildInfo, config: &'a UpdateConfig, args: VersionArgs) -> Self {
        Self {
            build,
            config,
            args,
        }
    }

    fn show_build_info(&self, ui: &mut dyn UserInterface) {
        ui.message(&format!("Version: {}", self.build.version()));
        if let Some(commit) = self.build.commit() {
            ui.message(&format!("Commit: {}", commit));
        }
        if let Some(date) = self.build.build_date() {
            ui.message(&format!("Built: {}", date));
        }
    }
}

impl Command for VersionCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if self.args.short {
            ui.message(self.build.version());
            return Ok(CommandResult::success());
        }

        if self.args.no_check {
            self.show_build_info(ui);
            return Ok(CommandResult::success());
        }

        debug!(
            "commit {} built {}",
            self.build.commit().unwrap_or("unknown"),
            self.build.build_date().unwrap_or("unknown")
        );
        let outcome = run_upgrade(self.build, self.config, None, ui)?;
        debug!("upgrade finished: {:?}", outcome);
        Ok(CommandResult::success())
    }
}
