// src/logging.rs
use std::io::IsTerminal;

use log::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable that overrides the level chosen on the command line.
pub const LOG_ENV: &str = "READABILITY_LOG";

/// Install the stderr subscriber. `log` records reach it through the
/// subscriber's `tracing-log` bridge.
pub fn init(level: LevelFilter) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_ascii_lowercase()));

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false),
        )
        .try_init();
    if let Err(err) = installed {
        eprintln!("[warn] logging is unavailable: {err}");
    }
}
