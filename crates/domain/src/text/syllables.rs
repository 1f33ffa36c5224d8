// crates/domain/src/text/syllables.rs
use std::sync::OnceLock;

use regex::Regex;

/// Words above this many syllables are polysyllables.
pub const POLYSYLLABLE_THRESHOLD: usize = 2;

fn vowel_groups() -> &'static Regex {
    // A run of vowels counts once: only its last vowel is "not followed by a vowel".
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)[aeiouy]+").expect("vowel pattern is valid"))
}

/// Estimate the syllables in `word`.
///
/// Counts vowel groups (`a e i o u y`, case-insensitive), drops one for a
/// trailing silent `e`, and never returns less than 1.
pub fn count_syllables(word: &str) -> usize {
    let groups = vowel_groups().find_iter(word).count();
    let silent_e = usize::from(word.ends_with(['e', 'E']));
    groups.saturating_sub(silent_e).max(1)
}

/// True when `word` has more than two syllables.
pub fn is_polysyllable(word: &str) -> bool {
    count_syllables(word) > POLYSYLLABLE_THRESHOLD
}
