//! Minimax-based guess selection strategy
//!
//! Selects the guess that minimizes the worst-case remaining candidates.

use super::calculator::worst_case_remaining;
use crate::core::{Blacklist, Word};
use crate::solver::scoring::first_min;
use rayon::prelude::*;

/// Select best guess by minimizing worst-case remaining candidates
///
/// Each pool word is tried as the guess with every pool word as the
/// hypothetical solution. Returns the word with the lowest worst case and
/// that value, or `None` if the pool is empty. Ties go to the earliest word.
///
/// # Examples
/// ```
/// use wordle_scoring::core::{Blacklist, Word};
/// use wordle_scoring::solver::minimax::select_best_guess;
///
/// let words = vec![
///     Word::new("aaaaa").unwrap(),
///     Word::new("bbbbb").unwrap(),
/// ];
/// let pool: Vec<&Word> = words.iter().collect();
///
/// let (best, worst) = select_best_guess(&pool, &Blacklist::new()).unwrap();
/// assert_eq!(best.text(), "AAAAA");
/// assert_eq!(worst, 2);
/// ```
#[must_use]
pub fn select_best_guess<'a>(
    pool: &[&'a Word],
    blacklist: &Blacklist,
) -> Option<(&'a Word, usize)> {
    let worst_cases: Vec<usize> = pool
        .par_iter()
        .map(|&guess| worst_case_remaining(guess, pool, blacklist))
        .collect();

    first_min(pool.iter().copied().zip(worst_cases))
}
