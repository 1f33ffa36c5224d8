//! Naive tokenization of English prose: sentences, words, characters and syllables.

pub mod syllables;
pub mod tokenizer;

pub use syllables::{POLYSYLLABLE_THRESHOLD, count_syllables, is_polysyllable};
pub use tokenizer::{count_characters, split_sentences, split_words};
