//! Letters known to be absent from the solution

use super::feedback::{Feedback, Hint};
use super::word::Word;
use rustc_hash::FxHashSet;
use std::fmt;

/// Set of letters confirmed (conservatively) absent from the solution
///
/// Letters are only ever added. A letter that was grey in one round stays
/// blacklisted even if a later round shows it green or yellow; the candidate
/// filter lets same-round yellows override the blacklist instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Blacklist(FxHashSet<u8>);

impl Blacklist {
    /// Create an empty blacklist
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a letter, returning `true` if it was not already present
    pub fn insert(&mut self, letter: u8) -> bool {
        self.0.insert(letter.to_ascii_uppercase())
    }

    /// Add every letter of `guess` that `feedback` marked grey
    pub fn extend_from_feedback(&mut self, guess: &Word, feedback: &Feedback) {
        for (&letter, &hint) in guess.chars().iter().zip(feedback.hints()) {
            if hint == Hint::Grey {
                self.0.insert(letter);
            }
        }
    }

    /// Check whether a letter is blacklisted
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: u8) -> bool {
        self.0.contains(&letter)
    }

    /// Number of blacklisted letters
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no letter is blacklisted
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Blacklisted letters in alphabetical order
    #[must_use]
    pub fn sorted_letters(&self) -> Vec<char> {
        let mut letters: Vec<char> = self.0.iter().map(|&b| char::from(b)).collect();
        letters.sort_unstable();
        letters
    }
}

impl FromIterator<u8> for Blacklist {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        Self(iter.into_iter().map(|b| b.to_ascii_uppercase()).collect())
    }
}

impl fmt::Display for Blacklist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letters: Vec<String> = self.sorted_letters().iter().map(char::to_string).collect();
        write!(f, "[{}]", letters.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blacklist_starts_empty() {
        let blacklist = Blacklist::new();
        assert!(blacklist.is_empty());
        assert_eq!(blacklist.len(), 0);
        assert_eq!(blacklist.to_string(), "[]");
    }

    #[test]
    fn blacklist_insert_normalizes_case() {
        let mut blacklist = Blacklist::new();
        assert!(blacklist.insert(b'q'));
        assert!(!blacklist.insert(b'Q'));
        assert!(blacklist.contains(b'Q'));
        assert_eq!(blacklist.len(), 1);
    }

    #[test]
    fn blacklist_extends_with_grey_letters_only() {
        let guess = Word::new("CRANE").unwrap();
        let feedback = Feedback::from_code("AAGYG").unwrap();

        let mut blacklist = Blacklist::new();
        blacklist.extend_from_feedback(&guess, &feedback);

        assert_eq!(blacklist.sorted_letters(), vec!['C', 'R']);
        assert!(!blacklist.contains(b'A'));
        assert!(!blacklist.contains(b'N'));
    }

    #[test]
    fn blacklist_only_grows() {
        let mut blacklist: Blacklist = b"CR".iter().copied().collect();
        let guess = Word::new("CRISP").unwrap();
        // C and R come back green, but stay blacklisted
        blacklist.extend_from_feedback(&guess, &Feedback::from_code("GGAAA").unwrap());

        assert_eq!(blacklist.to_string(), "[C, I, P, R, S]");
    }
}
