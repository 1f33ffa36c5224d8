// crates/domain/src/options.rs
use std::str::FromStr;

use readability_shared_kernel::DomainError;

use crate::model::ScoreKind;

/// Output format options for the tool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Which scores to compute: one index or all four.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScoreSelection {
    Single(ScoreKind),
    #[default]
    All,
}

impl ScoreSelection {
    /// Kinds covered by this selection, in report order.
    pub fn kinds(self) -> Vec<ScoreKind> {
        match self {
            Self::Single(kind) => vec![kind],
            Self::All => ScoreKind::ALL.to_vec(),
        }
    }
}

impl From<ScoreKind> for ScoreSelection {
    fn from(kind: ScoreKind) -> Self {
        Self::Single(kind)
    }
}

/// Selector syntax: `ARI`, `FK`, `SMOG`, `CL` or `all`, any case.
impl FromStr for ScoreSelection {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        trimmed.parse().map(Self::Single)
    }
}
