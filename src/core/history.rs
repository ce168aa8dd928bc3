//! Game history threaded between rounds
//!
//! Only the most recent guess and its feedback are kept. Older rounds reach
//! the filter through the accumulated blacklist.

use super::blacklist::Blacklist;
use super::feedback::Feedback;
use super::filter::is_word_valid;
use super::word::Word;

/// The state a strategy needs to pick the next guess
#[derive(Debug, Clone, Default)]
pub struct History {
    last_round: Option<(Word, Feedback)>,
    blacklist: Blacklist,
}

impl History {
    /// History of a game that has not started yet
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a history from its parts
    ///
    /// The last round is only kept when both the guess and its feedback are
    /// given; otherwise the history behaves like the opening move.
    #[must_use]
    pub fn from_parts(
        last_guess: Option<Word>,
        feedback: Option<Feedback>,
        blacklist: Blacklist,
    ) -> Self {
        Self {
            last_round: last_guess.zip(feedback),
            blacklist,
        }
    }

    /// Record a played guess and its feedback
    ///
    /// Replaces the last round and blacklists the guess's grey letters.
    pub fn record(&mut self, guess: Word, feedback: Feedback) {
        self.blacklist.extend_from_feedback(&guess, &feedback);
        self.last_round = Some((guess, feedback));
    }

    /// The most recent guess and its feedback, if any
    #[must_use]
    pub fn last_round(&self) -> Option<(&Word, &Feedback)> {
        self.last_round.as_ref().map(|(word, feedback)| (word, feedback))
    }

    /// Letters accumulated as absent
    #[must_use]
    pub const fn blacklist(&self) -> &Blacklist {
        &self.blacklist
    }

    /// Whether no guess has been recorded
    #[must_use]
    pub const fn is_opening(&self) -> bool {
        self.last_round.is_none()
    }

    /// Check whether `candidate` is still possible under this history
    ///
    /// Every word is admitted before the first round.
    #[must_use]
    pub fn admits(&self, candidate: &Word) -> bool {
        match &self.last_round {
            Some((guess, feedback)) => is_word_valid(candidate, guess, feedback, &self.blacklist),
            None => true,
        }
    }

    /// Filter `pool` down to the words this history admits, keeping pool order
    #[must_use]
    pub fn filter<'a>(&self, pool: &'a [Word]) -> Vec<&'a Word> {
        pool.iter().filter(|word| self.admits(word)).collect()
    }
}
