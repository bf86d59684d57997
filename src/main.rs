//! binup CLI entry point.

use std::process::ExitCode;

use binup::build_info::BuildInfo;
use binup::cli::{check_err, select_level, Cli, ProcessExit, LOG_LEVEL_ENV};
use binup::config::load_config;
use binup::ui::create_ui;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `BINUP_LOG_LEVEL` environment variable (if valid)
/// 2. `--verbose` sets DEBUG, `--quiet` sets WARN
/// 3. Default is INFO
fn init_tracing(verbose: bool, quiet: bool) {
    let env_level = std::env::var(LOG_LEVEL_ENV).ok();
    let (level, invalid) = select_level(env_level.as_deref(), verbose, quiet);
    let filter = EnvFilter::new(format!("binup={}", level.to_string().to_lowercase()));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();

    if let Some(message) = invalid {
        tracing::error!("{}", message);
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    tracing::debug!("binup starting with args: {:?}", cli);

    let terminator = ProcessExit;
    let mut config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            check_err(&e, &terminator);
            return ExitCode::FAILURE;
        }
    };
    config.apply(cli.overrides());

    let mut ui = create_ui(cli.batch_mode, cli.output_mode());
    let code = binup::cli::run(&cli, BuildInfo::current(), config, ui.as_mut(), &terminator);
    ExitCode::from(code as u8)
}
