//! Worst-case remaining candidates for a guess
//!
//! Candidates are counted with the same filter the solver applies between
//! rounds, so the estimate matches what the next round would really see.

use crate::core::{Blacklist, Feedback, Word, is_word_valid, mark_guess};
use rustc_hash::FxHashSet;

/// Count the candidates left if `guess` were played and `solution` were the answer
#[must_use]
pub fn remaining_after(
    guess: &Word,
    solution: &Word,
    candidates: &[&Word],
    blacklist: &Blacklist,
) -> usize {
    let feedback = mark_guess(guess, solution);
    count_consistent(guess, &feedback, candidates, blacklist)
}

/// Calculate the maximum remaining candidates for a guess
///
/// Every candidate is tried as the hypothetical solution; the result is the
/// largest number of candidates still consistent with the feedback it gives.
///
/// # Examples
/// ```
/// use wordle_scoring::core::{Blacklist, Word};
/// use wordle_scoring::solver::minimax::worst_case_remaining;
///
/// let candidates = vec![
///     Word::new("slate").unwrap(),
///     Word::new("crate").unwrap(),
/// ];
/// let refs: Vec<&Word> = candidates.iter().collect();
///
/// // CRATE would answer AAGGG, which SLATE still fits
/// let worst = worst_case_remaining(&candidates[0], &refs, &Blacklist::new());
/// assert_eq!(worst, 2);
/// ```
#[must_use]
pub fn worst_case_remaining(guess: &Word, candidates: &[&Word], blacklist: &Blacklist) -> usize {
    // Solutions that give the same feedback leave the same candidates behind
    distinct_feedbacks(guess, candidates)
        .iter()
        .map(|feedback| count_consistent(guess, feedback, candidates, blacklist))
        .max()
        .unwrap_or(0)
}

/// Collect the distinct feedbacks the guess can receive from the candidates
fn distinct_feedbacks(guess: &Word, candidates: &[&Word]) -> FxHashSet<Feedback> {
    candidates
        .iter()
        .map(|&solution| mark_guess(guess, solution))
        .collect()
}

fn count_consistent(
    guess: &Word,
    feedback: &Feedback,
    candidates: &[&Word],
    blacklist: &Blacklist,
) -> usize {
    candidates
        .iter()
        .filter(|&&candidate| is_word_valid(candidate, guess, feedback, blacklist))
        .count()
}
