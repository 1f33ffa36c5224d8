use crate::model::ReadingAge;

/// Reader ages for rounded scores 1 through 13.
const AGE_TABLE: [u8; 13] = [6, 7, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 24];

/// Map a score to the age of a reader expected to understand the text.
///
/// The score is rounded half up. Rounded scores below 1 use the first
/// bracket and those above 13 use the last.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss, clippy::cast_sign_loss)]
pub fn reading_age(score: f64) -> ReadingAge {
    let rounded = (score + 0.5).floor().clamp(1.0, AGE_TABLE.len() as f64);
    // NaN casts to 0 and lands in the first bracket.
    let index = (rounded as usize).saturating_sub(1);
    ReadingAge::new(AGE_TABLE[index])
}
