//! Install command implementation.
//!
//! The `binup install` command downloads the configured binary into the
//! install directory unless it is already available.

use crate::cli::args::InstallArgs;
use crate::config::UpdateConfig;
use crate::error::Result;
use crate::ui::UserInterface;
use crate::updates::{BinaryInstaller, BinaryLocator, Downloader, GitHubReleases, Installer};

use super::dispatcher::{Command, CommandResult};

/// The install command implementation.
pub struct InstallCommand<'a> {
    config: &'a UpdateConfig,
    args: InstallArgs,
    locator: Option<BinaryLocator>,
}

impl<'a> InstallCommand<'a> {
    /// Create a new install command.
    pub fn new(config: &'a UpdateConfig, args: InstallArgs) -> Self {
        Self {
            config,
            args,
            locator: None,
        }
    }

    /// Use `locator` instead of one built from the process environment.
    pub fn with_locator(mut self, locator: BinaryLocator) -> Self {
        self.locator = Some(locator);
        self
    }

    /// Requested version with any tag prefix removed; empty means latest.
    fn requested_version(&self) -> &str {
        let version = self.args.version.as_deref().unwrap_or("");
        version
            .strip_prefix(self.args.tag_prefix.as_str())
            .unwrap_or(version)
    }
}

impl Command for InstallCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let releases = GitHubReleases::from_config(self.config)?;
        let locator = self.locator.clone().unwrap_or_else(BinaryLocator::from_env);
        let installer = Installer::new(self.config, locator, &releases, Downloader::new()?);

        match installer.install(false, &self.args.tag_prefix, self.requested_version())? {
            Some(path) => ui.success(&format!(
                "{} cli has been installed into {}",
                self.config.repo,
                path.display()
            )),
            None => ui.message(&format!("{} is already installed", self.config.binary)),
        }

        Ok(CommandResult::success())
    }
}
