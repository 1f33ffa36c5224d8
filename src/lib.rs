// src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod cli;
pub mod config;
pub mod logging;
pub mod presentation;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build the configuration, install logging and run the analysis.
///
/// # Errors
///
/// Returns `Err` for unusable arguments, unreadable input, or text that
/// has no words or sentences to score.
pub fn run(args: cli::Args) -> anyhow::Result<()> {
    let config = cli::build_config(args)?;
    logging::init(config.log_level);
    log::debug!("running with {config:?}");
    app::run(&config)?;
    Ok(())
}
