//! Letter-frequency guess selection
//!
//! Favors words whose letters occur often, and in the same positions, across
//! the remaining candidates.

use super::counts::LetterCounts;
use crate::core::Word;
use crate::solver::scoring::{ScoringWeights, first_max};

/// Score a guess against precomputed letter counts
///
/// Each position earns `exact` points per candidate sharing the letter there.
/// The first occurrence of each distinct letter also earns `anagram` points
/// per occurrence of that letter elsewhere.
#[must_use]
pub fn score_word(guess: &Word, counts: &LetterCounts, weights: ScoringWeights) -> i64 {
    let mut score = 0;

    for (position, &letter) in guess.chars().iter().enumerate() {
        let exact_count = counts.at(position, letter);
        score += weights.exact * exact_count;

        if !guess.repeats_earlier(position) {
            score += weights.anagram * (counts.overall(letter) - exact_count);
        }
    }

    score
}

/// Select the candidate with the highest frequency score
///
/// Returns the word and its score, or `None` if the pool is empty. Ties go to
/// the earliest word in the pool.
///
/// # Examples
/// ```
/// use wordle_scoring::core::Word;
/// use wordle_scoring::solver::ScoringWeights;
/// use wordle_scoring::solver::frequency::select_best_guess;
///
/// let words = vec![
///     Word::new("slate").unwrap(),
///     Word::new("crate").unwrap(),
///     Word::new("grate").unwrap(),
/// ];
/// let pool: Vec<&Word> = words.iter().collect();
///
/// let (best, score) = select_best_guess(&pool, ScoringWeights::default()).unwrap();
/// assert!(score > 0);
/// assert_ne!(best.text(), "SLATE");
/// ```
#[must_use]
pub fn select_best_guess<'a>(
    pool: &[&'a Word],
    weights: ScoringWeights,
) -> Option<(&'a Word, i64)> {
    let counts = LetterCounts::from_words(pool);

    first_max(
        pool.iter()
            .map(|&guess| (guess, score_word(guess, &counts, weights))),
    )
}
