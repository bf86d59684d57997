//! Deciding whether to upgrade the running binary.
//!
//! One [`UpgradeEngine::run`] walks a single attempt:
//!
//! 1. Read the current version from [`BuildInfo`]
//! 2. Resolve the latest release and compare
//! 3. Skip dev builds, then ask the user
//! 4. Resolve the latest release again and install it if still newer
//!
//! Every terminal state is reported as an [`UpgradeOutcome`].

use std::path::PathBuf;

use tracing::debug;

use super::installer::BinaryInstaller;
use super::release::{ReleaseInfo, ReleaseSource};
use super::Version;
use crate::build_info::BuildInfo;
use crate::config::UpdateConfig;
use crate::error::{BinupError, Result};
use crate::ui::{Prompt, UserInterface};

/// Prompt key for the upgrade confirmation.
pub const UPGRADE_PROMPT_KEY: &str = "upgrade";

const UPGRADE_HELP: &str = "This will fetch the latest binary and update your local with it";

/// Where an upgrade attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpgradeOutcome {
    /// The current build is at or past the latest release.
    UpToDate,
    /// The current build is a development build and is never replaced.
    DevBuild,
    /// The user declined the upgrade.
    Declined,
    /// The second lookup found nothing newer to install.
    NotNeeded,
    /// A new binary was installed.
    Installed { version: Version, path: PathBuf },
}

/// Runs the upgrade decision for the running binary.
pub struct UpgradeEngine<'a> {
    build: &'a BuildInfo,
    config: &'a UpdateConfig,
    releases: &'a dyn ReleaseSource,
    installer: &'a dyn BinaryInstaller,
}

impl<'a> UpgradeEngine<'a> {
    pub fn new(
        build: &'a BuildInfo,
        config: &'a UpdateConfig,
        releases: &'a dyn ReleaseSource,
        installer: &'a dyn BinaryInstaller,
    ) -> Self {
        Self {
            build,
            config,
            releases,
            installer,
        }
    }

    /// Run one upgrade attempt, asking `ui` for consent.
    pub fn run(&self, ui: &mut dyn UserInterface) -> Result<UpgradeOutcome> {
        let current = self.current_version()?;
        ui.message(&format!("Version: {}", current));

        let latest = self.latest()?;
        debug!("latest {} release is {}", self.config.repo, latest.version);

        if current >= latest.version {
            self.report_up_to_date(ui, &current);
            return Ok(UpgradeOutcome::UpToDate);
        }

        if current.is_dev_prerelease() {
            debug!("not offering {} to dev build {}", latest.version, current);
            return Ok(UpgradeOutcome::DevBuild);
        }

        let prompt = Prompt::confirm(
            UPGRADE_PROMPT_KEY,
            format!("Would you like to upgrade to the {} version?", latest.version),
            true,
        )
        .with_help(UPGRADE_HELP);

        if !ui.confirm(&prompt)? {
            return Ok(UpgradeOutcome::Declined);
        }

        let candidate = self.latest()?;
        if !self.needs_upgrade(ui, &current, &candidate.version) {
            return Ok(UpgradeOutcome::NotNeeded);
        }

        if !self.should_update(&candidate.version)? {
            return Ok(if current.is_dev_prerelease() {
                UpgradeOutcome::DevBuild
            } else {
                UpgradeOutcome::NotNeeded
            });
        }

        let version = candidate.version.to_string();
        match self
            .installer
            .install(true, &candidate.tag_prefix, &version)?
        {
            Some(path) => {
                ui.success(&format!(
                    "Upgraded {} to {}",
                    self.config.repo, candidate.version
                ));
                Ok(UpgradeOutcome::Installed {
                    version: candidate.version,
                    path,
                })
            }
            None => Ok(UpgradeOutcome::NotNeeded),
        }
    }

    /// False when `candidate` is exactly the running version.
    pub fn needs_upgrade(
        &self,
        ui: &mut dyn UserInterface,
        current: &Version,
        candidate: &Version,
    ) -> bool {
        if current == candidate {
            self.report_up_to_date(ui, current);
            return false;
        }
        true
    }

    /// Whether `candidate` should replace the running build.
    ///
    /// Re-reads the current version. Dev builds are never replaced.
    pub fn should_update(&self, candidate: &Version) -> Result<bool> {
        let current = self.current_version()?;
        if current.is_dev_prerelease() {
            return Ok(false);
        }
        Ok(*candidate > current)
    }

    fn current_version(&self) -> Result<Version> {
        self.build
            .semver()
            .map_err(|e| BinupError::VersionUnavailable {
                source: Box::new(e),
            })
    }

    fn latest(&self) -> Result<ReleaseInfo> {
        self.releases
            .latest(&self.config.org, &self.config.repo)
            .map_err(|e| BinupError::LatestVersion {
                source: Box::new(e),
            })
    }

    fn report_up_to_date(&self, ui: &mut dyn UserInterface, current: &Version) {
        ui.message(&format!(
            "You are already on the latest version of {} {}",
            self.config.repo, current
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;

    /// Serves tags in order, repeating the last one.
    struct QueuedReleases {
        tags: RefCell<VecDeque<&'static str>>,
        calls: Cell<usize>,
    }

    impl QueuedReleases {
        fn new(tags: &[&'static str]) -> Self {
            Self {
                tags: RefCell::new(tags.iter().copied().collect()),
                calls: Cell::new(0),
            }
        }
    }

    impl ReleaseSource for QueuedReleases {
        fn latest(&self, org: &str, repo: &str) -> Result<ReleaseInfo> {
            self.calls.set(self.calls.get() + 1);
            let mut tags = self.tags.borrow_mut();
            let tag = if tags.len() > 1 {
                tags.pop_front()
            } else {
                tags.front().copied()
            };
            match tag {
                Some(tag) => ReleaseInfo::from_tag(tag),
                None => Err(BinupError::NotFound {
                    org: org.to_string(),
                    repo: repo.to_string(),
                }),
            }
        }
    }

    #[derive(Default)]
    struct RecordingInstaller {
        calls: RefCell<Vec<(bool, String, String)>>,
        fail: bool,
    }

    impl BinaryInstaller for RecordingInstaller {
        fn install(&self, upgrade: bool, tag_prefix: &str, version: &str) -> Result<Option<PathBuf>> {
            self.calls
                .borrow_mut()
                .push((upgrade, tag_prefix.to_string(), version.to_string()));
            if self.fail {
                return Err(BinupError::Download {
                    url: "https://example.com/tool".into(),
                    status: 404,
                });
            }
            Ok(Some(PathBuf::from("/opt/bin/tool")))
        }
    }

    fn config() -> UpdateConfig {
        UpdateConfig {
            org: "acme".into(),
            repo: "tool".into(),
            binary: "tool".into(),
            ..Default::default()
        }
    }

    fn build(version: &str) -> BuildInfo {
        BuildInfo::new(version, None, None)
    }

    #[test]
    fn already_latest_does_nothing() {
        let build = build("1.2.1");
        let config = config();
        let releases = QueuedReleases::new(&["v1.2.1"]);
        let installer = RecordingInstaller::default();
        let mut ui = MockUI::new();

        let outcome = UpgradeEngine::new(&build, &config, &releases, &installer)
            .run(&mut ui)
            .unwrap();

        assert_eq!(outcome, UpgradeOutcome::UpToDate);
        assert!(ui.has_message("Version: 1.2.1"));
        assert!(ui.has_message("You are already on the latest version of tool 1.2.1"));
        assert!(ui.prompts_shown().is_empty());
        assert!(installer.calls.borrow().is_empty());
    }

    #[test]
    fn newer_than_latest_is_up_to_date() {
        let build = build("3.0.0");
        let config = config();
        let releases = QueuedReleases::new(&["v2.0.0"]);
        let installer = RecordingInstaller::default();
        let mut ui = MockUI::new();

        let outcome = UpgradeEngine::new(&build, &config, &releases, &installer)
            .run(&mut ui)
            .unwrap();

        assert_eq!(outcome, UpgradeOutcome::UpToDate);
        assert!(installer.calls.borrow().is_empty());
    }

    #[test]
    fn dev_build_never_prompts_or_installs() {
        let build = build("1.0.0-dev+abc");
        let config = config();
        let releases = QueuedReleases::new(&["v2.0.0"]);
        let installer = RecordingInstaller::default();
        let mut ui = MockUI::new();

        let outcome = UpgradeEngine::new(&build, &config, &releases, &installer)
            .run(&mut ui)
            .unwrap();

        assert_eq!(outcome, UpgradeOutcome::DevBuild);
        assert!(ui.prompts_shown().is_empty());
        assert!(installer.calls.borrow().is_empty());
    }

    #[test]
    fn declined_prompt_installs_nothing() {
        let build = build("1.0.0");
        let config = config();
        let releases = QueuedReleases::new(&["v2.0.0"]);
        let installer = RecordingInstaller::default();
        let mut ui = MockUI::new();
        ui.set_prompt_response(UPGRADE_PROMPT_KEY, false);

        let outcome = UpgradeEngine::new(&build, &config, &releases, &installer)
            .run(&mut ui)
            .unwrap();

        assert_eq!(outcome, UpgradeOutcome::Declined);
        assert_eq!(ui.prompts_shown(), [UPGRADE_PROMPT_KEY]);
        assert_eq!(releases.calls.get(), 1);
        assert!(installer.calls.borrow().is_empty());
    }

    #[test]
    fn accepted_upgrade_resolves_twice_and_installs() {
        let build = build("1.0.0");
        let config = config();
        let releases = QueuedReleases::new(&["v2.0.0"]);
        let installer = RecordingInstaller::default();
        let mut ui = MockUI::new();

        let outcome = UpgradeEngine::new(&build, &config, &releases, &installer)
            .run(&mut ui)
            .unwrap();

        assert_eq!(
            outcome,
            UpgradeOutcome::Installed {
                version: Version::new(2, 0, 0),
                path: PathBuf::from("/opt/bin/tool"),
            }
        );
        assert_eq!(releases.calls.get(), 2);
        assert_eq!(
            *installer.calls.borrow(),
            vec![(true, "v".to_string(), "2.0.0".to_string())]
        );
        assert!(ui.has_success("Upgraded tool to 2.0.0"));
    }

    #[test]
    fn second_lookup_equal_to_current_skips_install() {
        let build = build("1.0.0");
        let config = config();
        let releases = QueuedReleases::new(&["v2.0.0", "v1.0.0"]);
        let installer = RecordingInstaller::default();
        let mut ui = MockUI::new();

        let outcome = UpgradeEngine::new(&build, &config, &releases, &installer)
            .run(&mut ui)
            .unwrap();

        assert_eq!(outcome, UpgradeOutcome::NotNeeded);
        assert!(ui.has_message("already on the latest version of tool 1.0.0"));
        assert!(installer.calls.borrow().is_empty());
    }

    #[test]
    fn second_lookup_older_than_current_skips_install() {
        let build = build("1.5.0");
        let config = config();
        let releases = QueuedReleases::new(&["v2.0.0", "v1.4.0"]);
        let installer = RecordingInstaller::default();
        let mut ui = MockUI::new();

        let outcome = UpgradeEngine::new(&build, &config, &releases, &installer)
            .run(&mut ui)
            .unwrap();

        assert_eq!(outcome, UpgradeOutcome::NotNeeded);
        assert!(installer.calls.borrow().is_empty());
    }

    #[test]
    fn prompt_failure_propagates() {
        let build = build("1.0.0");
        let config = config();
        let releases = QueuedReleases::new(&["v2.0.0"]);
        let installer = RecordingInstaller::default();
        let mut ui = MockUI::new();
        ui.fail_prompts("stdin closed");

        let err = UpgradeEngine::new(&build, &config, &releases, &installer)
            .run(&mut ui)
            .unwrap_err();

        assert!(matches!(err, BinupError::Prompt { .. }));
        assert!(installer.calls.borrow().is_empty());
    }

    #[test]
    fn unparseable_current_version_is_unavailable() {
        let build = build("not-a-version");
        let config = config();
        let releases = QueuedReleases::new(&["v2.0.0"]);
        let installer = RecordingInstaller::default();
        let mut ui = MockUI::new();

        let err = UpgradeEngine::new(&build, &config, &releases, &installer)
            .run(&mut ui)
            .unwrap_err();

        assert!(matches!(err, BinupError::VersionUnavailable { .. }));
        assert!(err.to_string().contains("is this a dev build?"));
        assert_eq!(releases.calls.get(), 0);
    }

    #[test]
    fn latest_lookup_failure_is_wrapped() {
        let build = build("1.0.0");
        let config = config();
        let releases = QueuedReleases::new(&[]);
        let installer = RecordingInstaller::default();
        let mut ui = MockUI::new();

        let err = UpgradeEngine::new(&build, &config, &releases, &installer)
            .run(&mut ui)
            .unwrap_err();

        assert!(err.to_string().starts_with("getting latest version: "));
        assert!(err.to_string().contains("acme/tool"));
    }

    #[test]
    fn install_failure_propagates() {
        let build = build("1.0.0");
        let config = config();
        let releases = QueuedReleases::new(&["v2.0.0"]);
        let installer = RecordingInstaller {
            fail: true,
            ..Default::default()
        };
        let mut ui = MockUI::new();

        let err = UpgradeEngine::new(&build, &config, &releases, &installer)
            .run(&mut ui)
            .unwrap_err();

        assert!(matches!(err, BinupError::Download { status: 404, .. }));
    }

    #[test]
    fn should_update_requires_newer_non_dev() {
        let config = config();
        let releases = QueuedReleases::new(&["v2.0.0"]);
        let installer = RecordingInstaller::default();

        let release = build("1.0.0");
        let engine = UpgradeEngine::new(&release, &config, &releases, &installer);
        assert!(engine.should_update(&Version::new(2, 0, 0)).unwrap());
        assert!(!engine.should_update(&Version::new(1, 0, 0)).unwrap());

        let dev = build("1.0.0-dev");
        let engine = UpgradeEngine::new(&dev, &config, &releases, &installer);
        assert!(!engine.should_update(&Version::new(2, 0, 0)).unwrap());
    }
}
