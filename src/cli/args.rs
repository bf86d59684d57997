//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::builder::BoolishValueParser;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::config::ConfigOverrides;
use crate::ui::OutputMode;

/// binup - Keep a release binary up to date.
#[derive(Debug, Parser)]
#[command(name = "binup")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Host serving release downloads (e.g. github.com)
    #[arg(long, global = true, env = "BINUP_GIT_SERVER")]
    pub git_server: Option<String>,

    /// Base URL of the releases API
    #[arg(long, global = true, env = "BINUP_API_URL")]
    pub api_url: Option<String>,

    /// Token for the releases API
    #[arg(long, global = true, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    /// Never prompt; answer every question with its default
    #[arg(short, long, global = true, env = "BATCH_MODE", value_parser = BoolishValueParser::new())]
    pub batch_mode: bool,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Output mode selected by `--verbose` and `--quiet`.
    pub fn output_mode(&self) -> OutputMode {
        if self.quiet {
            OutputMode::Quiet
        } else if self.verbose {
            OutputMode::Verbose
        } else {
            OutputMode::Normal
        }
    }

    /// Settings given on the command line or through the environment.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            git_server: self.git_server.clone(),
            api_url: self.api_url.clone(),
            github_token: self.github_token.clone(),
        }
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the version and offer an upgrade (default if no command specified)
    Version(VersionArgs),

    /// Upgrade to the latest release
    Upgrade,

    /// Install the binary unless it is already available
    Install(InstallArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `version` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct VersionArgs {
    /// Print only the version number
    #[arg(long)]
    pub short: bool,

    /// Skip checking for a newer release
    #[arg(long)]
    pub no_check: bool,
}

/// Arguments for the `install` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InstallArgs {
    /// Release version to install (latest when omitted)
    #[arg(id = "install_version", value_name = "VERSION")]
    pub version: Option<String>,

    /// Text preceding the version in the release tag
    #[arg(long, default_value = "v")]
    pub tag_prefix: String,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
