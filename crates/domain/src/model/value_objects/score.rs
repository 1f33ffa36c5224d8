use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use readability_shared_kernel::DomainError;

/// The readability indices this tool knows how to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoreKind {
    #[serde(rename = "ARI")]
    Ari,
    #[serde(rename = "FK")]
    FleschKincaid,
    #[serde(rename = "SMOG")]
    Smog,
    #[serde(rename = "CL")]
    ColemanLiau,
}

impl ScoreKind {
    /// Every kind, in report order.
    pub const ALL: [Self; 4] = [Self::Ari, Self::FleschKincaid, Self::Smog, Self::ColemanLiau];

    /// Short selector typed by the user.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Ari => "ARI",
            Self::FleschKincaid => "FK",
            Self::Smog => "SMOG",
            Self::ColemanLiau => "CL",
        }
    }

    /// Human readable name used in reports.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ari => "Automated Readability Index",
            Self::FleschKincaid => "Flesch–Kincaid readability tests",
            Self::Smog => "Simple Measure of Gobbledygook",
            Self::ColemanLiau => "Coleman–Liau index",
        }
    }
}

impl fmt::Display for ScoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ScoreKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.code().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| DomainError::UnknownScoreSelector { input: trimmed.to_string() })
    }
}

/// Estimated age, in years, of a reader who understands the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReadingAge(u8);

impl ReadingAge {
    #[inline]
    pub const fn new(years: u8) -> Self {
        Self(years)
    }

    #[inline]
    pub const fn years(self) -> u8 {
        self.0
    }
}

impl fmt::Display for ReadingAge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One computed index together with its reader age.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub kind: ScoreKind,
    pub value: f64,
    pub age: ReadingAge,
}
