use serde::{Deserialize, Serialize};

use crate::{
    text::{POLYSYLLABLE_THRESHOLD, count_characters, count_syllables, split_sentences, split_words},
    value_objects::{CharCount, PolysyllableCount, SentenceCount, SyllableCount, WordCount},
};

/// Aggregate counts of a document, the only input of every score formula.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStatistics {
    words: WordCount,
    sentences: SentenceCount,
    characters: CharCount,
    syllables: SyllableCount,
    polysyllables: PolysyllableCount,
}

impl TextStatistics {
    /// Tokenize `text` and collect all five counts in one pass over its words.
    pub fn measure(text: &str) -> Self {
        let sentences = split_sentences(text);

        let mut words = WordCount::zero();
        let mut syllables = SyllableCount::zero();
        let mut polysyllables = PolysyllableCount::zero();
        for word in sentences.iter().copied().flat_map(split_words) {
            let count = count_syllables(word);
            words += 1usize;
            syllables += count;
            if count > POLYSYLLABLE_THRESHOLD {
                polysyllables += 1usize;
            }
        }

        let stats = Self::builder()
            .sentences(SentenceCount::new(sentences.len()))
            .words(words)
            .characters(count_characters(text))
            .syllables(syllables)
            .polysyllables(polysyllables)
            .build();
        log::debug!("measured {stats:?}");
        stats
    }

    pub fn builder() -> TextStatisticsBuilder {
        TextStatisticsBuilder::default()
    }

    #[inline]
    pub fn words(&self) -> WordCount {
        self.words
    }

    #[inline]
    pub fn sentences(&self) -> SentenceCount {
        self.sentences
    }

    #[inline]
    pub fn characters(&self) -> CharCount {
        self.characters
    }

    #[inline]
    pub fn syllables(&self) -> SyllableCount {
        self.syllables
    }

    #[inline]
    pub fn polysyllables(&self) -> PolysyllableCount {
        self.polysyllables
    }
}

/// Builds statistics from counts that are already known.
#[derive(Debug, Default)]
pub struct TextStatisticsBuilder {
    stats: TextStatistics,
}

impl TextStatisticsBuilder {
    pub fn words(mut self, words: impl Into<WordCount>) -> Self {
        self.stats.words = words.into();
        self
    }

    pub fn sentences(mut self, sentences: impl Into<SentenceCount>) -> Self {
        self.stats.sentences = sentences.into();
        self
    }

    pub fn characters(mut self, characters: impl Into<CharCount>) -> Self {
        self.stats.characters = characters.into();
        self
    }

    pub fn syllables(mut self, syllables: impl Into<SyllableCount>) -> Self {
        self.stats.syllables = syllables.into();
        self
    }

    pub fn polysyllables(mut self, polysyllables: impl Into<PolysyllableCount>) -> Self {
        self.stats.polysyllables = polysyllables.into();
        self
    }

    pub fn build(self) -> TextStatistics {
        self.stats
    }
}
