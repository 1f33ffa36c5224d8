//! Readability formulas over aggregate counts.
//!
//! Every ratio checks its divisor first, so an empty document yields
//! [`DomainError::InsufficientText`] instead of NaN or infinity.

use readability_shared_kernel::{DomainError, DomainResult};

use crate::model::TextStatistics;

fn per_word(stats: &TextStatistics, numerator: f64) -> DomainResult<f64> {
    if stats.words().is_zero() {
        return Err(DomainError::InsufficientText { missing: "words" });
    }
    Ok(numerator / stats.words().as_f64())
}

fn per_sentence(stats: &TextStatistics, numerator: f64) -> DomainResult<f64> {
    if stats.sentences().is_zero() {
        return Err(DomainError::InsufficientText { missing: "sentences" });
    }
    Ok(numerator / stats.sentences().as_f64())
}

/// `4.71·(chars/words) + 0.5·(words/sentences) − 21.43`
pub fn automated_readability_index(stats: &TextStatistics) -> DomainResult<f64> {
    let chars_per_word = per_word(stats, stats.characters().as_f64())?;
    let words_per_sentence = per_sentence(stats, stats.words().as_f64())?;
    Ok(4.71 * chars_per_word + 0.5 * words_per_sentence - 21.43)
}

/// `0.39·(words/sentences) + 11.8·(syllables/words) − 15.59`
pub fn flesch_kincaid(stats: &TextStatistics) -> DomainResult<f64> {
    let syllables_per_word = per_word(stats, stats.syllables().as_f64())?;
    let words_per_sentence = per_sentence(stats, stats.words().as_f64())?;
    Ok(0.39 * words_per_sentence + 11.8 * syllables_per_word - 15.59)
}

/// `1.043·√(polysyllables·30/sentences) + 3.1291`
pub fn smog_index(stats: &TextStatistics) -> DomainResult<f64> {
    let polysyllables_per_30 = per_sentence(stats, stats.polysyllables().as_f64() * 30.0)?;
    Ok(1.043 * polysyllables_per_30.sqrt() + 3.1291)
}

/// `0.0588·L − 0.296·S − 15.8`, with L and S per 100 words.
pub fn coleman_liau_index(stats: &TextStatistics) -> DomainResult<f64> {
    let letters = per_word(stats, stats.characters().as_f64() * 100.0)?;
    let sentences = per_word(stats, stats.sentences().as_f64() * 100.0)?;
    Ok(0.0588 * letters - 0.296 * sentences - 15.8)
}
