//! Upgrade command implementation.
//!
//! The `binup upgrade` command checks for a newer release and, with the
//! user's consent, replaces the running binary.

use tracing::debug;

use crate::build_info::BuildInfo;
use crate::config::UpdateConfig;
use crate::error::Result;
use crate::ui::UserInterface;
use crate::updates::{
    BinaryLocator, Downloader, GitHubReleases, Installer, UpgradeEngine, UpgradeOutcome,
};

use super::dispatcher::{Command, CommandResult};

/// The upgrade command implementation.
pub struct UpgradeCommand<'a> {
    build: &'a BuildInfo,
    config: &'a UpdateConfig,
    locator: Option<BinaryLocator>,
}

impl<'a> UpgradeCommand<'a> {
    /// Create a new upgrade command.
    pub fn new(build: &'a BuildInfo, config: &'a UpdateConfig) -> Self {
        Self {
            build,
            config,
            locator: None,
        }
    }

    /// Use `locator` instead of one built from the process environment.
    pub fn with_locator(mut self, locator: BinaryLocator) -> Self {
        self.locator = Some(locator);
        self
    }
}

impl Command for UpgradeCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let outcome = run_upgrade(self.build, self.config, self.locator.clone(), ui)?;
        debug!("upgrade finished: {:?}", outcome);
        Ok(CommandResult::success())
    }
}

/// Wire the GitHub release source and installer into an [`UpgradeEngine`]
/// and run it once.
pub(crate) fn run_upgrade(
    build: &BuildInfo,
    config: &UpdateConfig,
    locator: Option<BinaryLocator>,
    ui: &mut dyn UserInterface,
) -> Result<UpgradeOutcome> {
    let releases = GitHubReleases::from_config(config)?;
    let locator = locator.unwrap_or_else(BinaryLocator::from_env);
    let installer = Installer::new(config, locator, &releases, Downloader::new()?);

    UpgradeEngine::new(build, config, &releases, &installer).run(ui)
}
