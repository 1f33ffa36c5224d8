pub mod age;
pub mod formulas;

pub use age::reading_age;
pub use formulas::{automated_readability_index, coleman_liau_index, flesch_kincaid, smog_index};

use readability_shared_kernel::DomainResult;

use crate::{
    model::{Score, ScoreKind, TextStatistics},
    options::ScoreSelection,
};

/// Compute one index and look up its reader age.
pub fn evaluate(kind: ScoreKind, stats: &TextStatistics) -> DomainResult<Score> {
    let value = match kind {
        ScoreKind::Ari => automated_readability_index(stats),
        ScoreKind::FleschKincaid => flesch_kincaid(stats),
        ScoreKind::Smog => smog_index(stats),
        ScoreKind::ColemanLiau => coleman_liau_index(stats),
    }?;
    Ok(Score { kind, value, age: reading_age(value) })
}

/// Compute every index in `selection`, failing on the first one that cannot be scored.
pub fn evaluate_selection(selection: ScoreSelection, stats: &TextStatistics) -> DomainResult<Vec<Score>> {
    selection.kinds().into_iter().map(|kind| evaluate(kind, stats)).collect()
}
