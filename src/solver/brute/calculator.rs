//! Hint scoring for a guess across a set of solutions

use crate::core::{Feedback, Hint, WORD_LENGTH, Word, mark_guess};
use crate::solver::scoring::ScoringWeights;

/// Score the feedback a guess receives against one solution
///
/// Greens earn `exact` points each. Yellows earn `anagram` points once per
/// distinct solution letter under a yellow hint. Greys earn nothing.
///
/// # Examples
/// ```
/// use wordle_scoring::core::{Feedback, Word};
/// use wordle_scoring::solver::ScoringWeights;
/// use wordle_scoring::solver::brute::feedback_score;
///
/// let solution = Word::new("snake").unwrap();
/// let feedback = Feedback::from_code("AAGYG").unwrap();
///
/// // Two greens and one yellow
/// assert_eq!(feedback_score(&feedback, &solution, ScoringWeights::default()), 28 * 2 + 10);
/// ```
#[must_use]
pub fn feedback_score(feedback: &Feedback, solution: &Word, weights: ScoringWeights) -> i64 {
    let mut seen_yellows = [0u8; WORD_LENGTH];
    let mut seen_count = 0;
    let mut score = 0;

    for (position, hint) in feedback.hints().iter().enumerate() {
        match hint {
            Hint::Green => score += weights.exact,
            Hint::Yellow => {
                let letter = solution.char_at(position);
                if !seen_yellows[..seen_count].contains(&letter) {
                    seen_yellows[seen_count] = letter;
                    seen_count += 1;
                    score += weights.anagram;
                }
            }
            Hint::Grey => {}
        }
    }

    score
}

/// Sum the feedback score of `guess` over every solution
///
/// The sum does not depend on the order of `solutions`.
#[must_use]
pub fn total_score(guess: &Word, solutions: &[&Word], weights: ScoringWeights) -> i64 {
    solutions
        .iter()
        .map(|&solution| feedback_score(&mark_guess(guess, solution), solution, weights))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn perfect_feedback_scores_all_greens() {
        let solution = word("CRANE");
        let score = feedback_score(&Feedback::PERFECT, &solution, ScoringWeights::default());
        assert_eq!(score, 28 * 5);
    }

    #[test]
    fn grey_feedback_scores_nothing() {
        let solution = word("CRANE");
        let feedback = Feedback::from_code("AAAAA").unwrap();
        assert_eq!(feedback_score(&feedback, &solution, ScoringWeights::default()), 0);
    }

    #[test]
    fn yellows_count_once_per_solution_letter() {
        // Yellows sit on solution letters E, E, E of EERIE -> one award
        let solution = word("EERIE");
        let feedback = Feedback::from_code("YYAAY").unwrap();
        assert_eq!(feedback_score(&feedback, &solution, ScoringWeights::new(0, 1)), 1);

        // Distinct solution letters under yellows each count
        let solution = word("LOYAL");
        let feedback = Feedback::from_code("YYYYY").unwrap();
        assert_eq!(feedback_score(&feedback, &solution, ScoringWeights::new(0, 1)), 4);
    }

    #[test]
    fn total_score_sums_over_solutions() {
        let guess = word("CRANE");
        let solutions = [word("SNAKE"), word("CRANE"), word("FJORD")];
        let refs: Vec<&Word> = solutions.iter().collect();

        // SNAKE: AAGYG -> 28*2 + 10; CRANE: 28*5; FJORD: R yellow -> 10
        assert_eq!(
            total_score(&guess, &refs, ScoringWeights::default()),
            28 * 2 + 10 + 28 * 5 + 10
        );
    }

    #[test]
    fn total_score_independent_of_order() {
        let guess = word("ALLOY");
        let solutions = [word("LOYAL"), word("SPEED"), word("ROBOT"), word("FLOOR")];
        let forward: Vec<&Word> = solutions.iter().collect();
        let backward: Vec<&Word> = solutions.iter().rev().collect();
        let weights = ScoringWeights::default();

        let first = total_score(&guess, &forward, weights);
        assert_eq!(first, total_score(&guess, &backward, weights));
        assert_eq!(first, total_score(&guess, &forward, weights));
    }

    #[test]
    fn empty_solutions_score_zero() {
        assert_eq!(total_score(&word("CRANE"), &[], ScoringWeights::default()), 0);
    }
}
