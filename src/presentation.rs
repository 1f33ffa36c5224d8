// src/presentation.rs
use std::{io::Write, path::Path};

use readability_domain::model::{Score, TextStatistics};
use readability_shared_kernel::Result;
use serde::Serialize;

/// Counts block printed before the score prompt.
pub fn write_statistics<W: Write>(out: &mut W, stats: &TextStatistics) -> Result<()> {
    writeln!(out, "Words: {}", stats.words())?;
    writeln!(out, "Sentences: {}", stats.sentences())?;
    writeln!(out, "Characters: {}", stats.characters())?;
    writeln!(out, "Syllables: {}", stats.syllables())?;
    writeln!(out, "Polysyllables: {}", stats.polysyllables())?;
    out.flush()?;
    Ok(())
}

/// One line per score, e.g. `Coleman–Liau index: 10.64 (about 17-year-olds).`
pub fn write_scores<W: Write>(out: &mut W, scores: &[Score]) -> Result<()> {
    for score in scores {
        writeln!(out, "{}", format_score(score))?;
    }
    out.flush()?;
    Ok(())
}

pub fn format_score(score: &Score) -> String {
    format!("{}: {:.2} (about {}-year-olds).", score.kind.label(), score.value, score.age)
}

#[derive(Serialize)]
struct JsonReport<'a> {
    file: &'a Path,
    statistics: &'a TextStatistics,
    scores: &'a [Score],
}

/// Whole report as one pretty-printed JSON document.
pub fn write_json<W: Write>(out: &mut W, file: &Path, stats: &TextStatistics, scores: &[Score]) -> Result<()> {
    let report = JsonReport { file, statistics: stats, scores };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
