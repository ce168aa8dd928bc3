//! Brute-force scoring guess selection

use super::calculator::total_score;
use crate::core::Word;
use crate::solver::scoring::{ScoringWeights, first_max};
use rayon::prelude::*;

/// Select the candidate whose hints score highest across the whole pool
///
/// Every pool word is tried as the guess against every pool word as the
/// solution. Returns the best guess and its total, or `None` if the pool is
/// empty. Ties go to the earliest word in the pool.
///
/// # Examples
/// ```
/// use wordle_scoring::core::Word;
/// use wordle_scoring::solver::ScoringWeights;
/// use wordle_scoring::solver::brute::select_best_guess;
///
/// let words = vec![
///     Word::new("slate").unwrap(),
///     Word::new("crate").unwrap(),
///     Word::new("grate").unwrap(),
/// ];
/// let pool: Vec<&Word> = words.iter().collect();
///
/// let (best, score) = select_best_guess(&pool, ScoringWeights::default()).unwrap();
/// assert_eq!(best.text(), "CRATE");
/// assert!(score > 0);
/// ```
#[must_use]
pub fn select_best_guess<'a>(
    pool: &[&'a Word],
    weights: ScoringWeights,
) -> Option<(&'a Word, i64)> {
    // Collecting keeps pool order, so the first maximum is the same as sequentially
    let scores: Vec<i64> = pool
        .par_iter()
        .map(|&guess| total_score(guess, pool, weights))
        .collect();

    first_max(pool.iter().copied().zip(scores))
}

/// Rank every word in `guesses` by its total score against `solutions`
///
/// Sorted from best to worst; equal scores keep the order of `guesses`.
#[must_use]
pub fn rank_guesses<'a>(
    guesses: &'a [Word],
    solutions: &[&Word],
    weights: ScoringWeights,
) -> Vec<(&'a Word, i64)> {
    let mut ranked: Vec<(&Word, i64)> = guesses
        .par_iter()
        .map(|guess| (guess, total_score(guess, solutions, weights)))
        .collect();

    ranked.sort_by(|(_, a), (_, b)| b.cmp(a));
    ranked
}
