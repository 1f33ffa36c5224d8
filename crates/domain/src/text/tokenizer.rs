// crates/domain/src/text/tokenizer.rs
use std::sync::OnceLock;

use regex::Regex;

use crate::value_objects::CharCount;

fn sentence_terminators() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[.?!]").expect("terminator pattern is valid"))
}

/// Split `text` into trimmed sentences.
///
/// Sentences end at `.`, `?` or `!`. Fragments that are blank after
/// trimming (an ellipsis, the tail after the last terminator) are dropped.
pub fn split_sentences(text: &str) -> Vec<&str> {
    sentence_terminators()
        .split(text)
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .collect()
}

/// Whitespace-delimited words of a single sentence. Any Unicode
/// whitespace, U+00A0 included, separates words.
pub fn split_words(sentence: &str) -> impl Iterator<Item = &str> {
    sentence.split_whitespace()
}

/// Non-whitespace characters of the whole document, punctuation included.
pub fn count_characters(text: &str) -> CharCount {
    text.split_whitespace().map(|word| word.chars().count()).sum()
}
