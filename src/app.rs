// src/app.rs
use std::io::{self, Write};

use readability_domain::options::{OutputFormat, ScoreSelection};
use readability_infra::{FsDocumentReader, LinePrompt};
use readability_ports::{filesystem::DocumentReader, prompt::Prompt};
use readability_shared_kernel::{ErrorContext, Result};
use readability_usecase::{AnalyzeDocument, ScoreDocument, SelectScores};

use crate::{config::Config, presentation};

/// Run against the real filesystem, stdin and stdout.
pub fn run(config: &Config) -> Result<()> {
    let mut prompt = LinePrompt::stdio();
    let mut out = io::stdout();
    run_with(config, &FsDocumentReader, &mut prompt, &mut out)
}

/// Read, measure, select and score, writing the report to `out`.
pub fn run_with<W: Write>(
    config: &Config,
    reader: &dyn DocumentReader,
    prompt: &mut dyn Prompt,
    out: &mut W,
) -> Result<()> {
    let Some(analysis) = AnalyzeDocument::new(reader).run(&config.input)? else {
        return Ok(());
    };

    match config.format {
        OutputFormat::Text => {
            presentation::write_statistics(out, &analysis.statistics).context("writing statistics")?;
            let selection = SelectScores::new(prompt).run(config.selection)?;
            let report = ScoreDocument::run(selection, &analysis.statistics)?;
            presentation::write_scores(out, &report.scores).context("writing scores")
        }
        OutputFormat::Json => {
            let selection = config.selection.unwrap_or(ScoreSelection::All);
            let report = ScoreDocument::run(selection, &analysis.statistics)?;
            presentation::write_json(out, &analysis.path, &analysis.statistics, &report.scores)
                .with_context(|| format!("writing JSON report for {}", analysis.path.display()))
        }
    }
}
