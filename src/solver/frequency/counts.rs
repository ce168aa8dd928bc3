//! Letter occurrence tables over a candidate pool

use crate::core::{WORD_LENGTH, Word};
use rustc_hash::FxHashMap;

/// Overall and per-position letter occurrence counts
///
/// Every occurrence counts, so a word with two E's adds two to the overall
/// count for E.
#[derive(Debug, Clone, Default)]
pub struct LetterCounts {
    overall: FxHashMap<u8, i64>,
    positional: [FxHashMap<u8, i64>; WORD_LENGTH],
}

impl LetterCounts {
    /// Count letters across `words`
    #[must_use]
    pub fn from_words(words: &[&Word]) -> Self {
        let mut counts = Self::default();

        for word in words {
            for (position, &letter) in word.chars().iter().enumerate() {
                *counts.overall.entry(letter).or_insert(0) += 1;
                *counts.positional[position].entry(letter).or_insert(0) += 1;
            }
        }

        counts
    }

    /// Occurrences of `letter` at any position
    #[inline]
    #[must_use]
    pub fn overall(&self, letter: u8) -> i64 {
        self.overall.get(&letter).copied().unwrap_or(0)
    }

    /// Occurrences of `letter` at `position`
    #[inline]
    #[must_use]
    pub fn at(&self, position: usize, letter: u8) -> i64 {
        self.positional[position].get(&letter).copied().unwrap_or(0)
    }
}
