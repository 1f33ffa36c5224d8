use std::path::PathBuf;

use readability_domain::model::{Score, TextStatistics};

/// Counts of one non-empty document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentAnalysis {
    pub path: PathBuf,
    pub statistics: TextStatistics,
}

/// Scores computed for a document, in report order.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreReport {
    pub scores: Vec<Score>,
}
