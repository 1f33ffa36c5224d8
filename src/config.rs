// src/config.rs
use std::path::PathBuf;

use log::LevelFilter;
use readability_domain::options::{OutputFormat, ScoreSelection};

use crate::cli::Args;

/// Runtime settings derived from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    /// `None` means the user is asked interactively.
    pub selection: Option<ScoreSelection>,
    pub format: OutputFormat,
    pub log_level: LevelFilter,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let format = OutputFormat::from(args.format);
        // JSON output never prompts.
        let selection = args
            .score
            .map(ScoreSelection::from)
            .or_else(|| (format == OutputFormat::Json).then_some(ScoreSelection::All));

        Self {
            input: args.file,
            selection,
            format,
            log_level: log_level(args.verbose, args.quiet),
        }
    }
}

fn log_level(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
