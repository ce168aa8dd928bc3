//! Main Wordle solver interface

use super::strategy::Strategy;
use crate::core::{History, Word};
use crate::wordlists::WordLists;

/// Main Wordle solver
///
/// Coordinates the solving process using a given strategy.
pub struct Solver<'a, S: Strategy> {
    strategy: S,
    lists: &'a WordLists,
}

impl<'a, S: Strategy> Solver<'a, S> {
    /// Create a new solver with the given strategy and word lists
    pub const fn new(strategy: S, lists: &'a WordLists) -> Self {
        Self { strategy, lists }
    }

    /// Get the next guess given the game history
    ///
    /// Returns None if no solution is consistent with the history.
    pub fn next_guess(&self, history: &History) -> Option<&'a Word> {
        self.strategy.select_guess(&self.lists.solutions, history)
    }

    /// Solutions still consistent with the history, in list order
    pub fn candidates(&self, history: &History) -> Vec<&'a Word> {
        history.filter(&self.lists.solutions)
    }

    /// Count how many candidates remain given the history
    pub fn count_candidates(&self, history: &History) -> usize {
        self.lists
            .solutions
            .iter()
            .filter(|word| history.admits(word))
            .count()
    }

    pub const fn strategy(&self) -> &S {
        &self.strategy
    }

    pub const fn lists(&self) -> &'a WordLists {
        self.lists
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Blacklist, Feedback, mark_guess};
    use crate::solver::strategy::{BruteScoringStrategy, FrequencyStrategy};

    fn setup_lists() -> WordLists {
        let solutions = ["IRATE", "CRATE", "GRATE", "SNAKE"];
        let guesses = ["CRANE", "SLATE", "IRATE", "CRATE", "GRATE", "SNAKE"];
        WordLists::new(
            solutions.iter().map(|&t| Word::new(t).unwrap()).collect(),
            guesses.iter().map(|&t| Word::new(t).unwrap()).collect(),
        )
    }

    #[test]
    fn next_guess_with_empty_history() {
        let lists = setup_lists();
        let solver = Solver::new(BruteScoringStrategy::default(), &lists);

        let guess = solver.next_guess(&History::new()).unwrap();
        assert!(lists.solutions.contains(guess));
    }

    #[test]
    fn next_guess_filters_candidates() {
        let lists = setup_lists();
        let solver = Solver::new(FrequencyStrategy::default(), &lists);

        let guess = Word::new("CRANE").unwrap();
        let answer = Word::new("IRATE").unwrap();
        let mut history = History::new();
        history.record(guess.clone(), mark_guess(&guess, &answer));

        let next = solver.next_guess(&history).unwrap();
        assert!(history.admits(next));
        assert_ne!(next.text(), "SNAKE");
    }

    #[test]
    fn next_guess_returns_none_when_no_candidates() {
        let lists = setup_lists();
        let solver = Solver::new(BruteScoringStrategy::default(), &lists);

        // Claim we got all greens for ZZZZZ
        let history = History::from_parts(
            Some(Word::new("ZZZZZ").unwrap()),
            Some(Feedback::PERFECT),
            Blacklist::new(),
        );

        assert!(solver.next_guess(&history).is_none());
        assert_eq!(solver.count_candidates(&history), 0);
    }

    #[test]
    fn count_candidates_matches_candidates() {
        let lists = setup_lists();
        let solver = Solver::new(BruteScoringStrategy::default(), &lists);

        assert_eq!(solver.count_candidates(&History::new()), lists.solutions.len());

        let guess = Word::new("SNAKE").unwrap();
        let answer = Word::new("GRATE").unwrap();
        let mut history = History::new();
        history.record(guess.clone(), mark_guess(&guess, &answer));

        let candidates = solver.candidates(&history);
        let texts: Vec<&str> = candidates.iter().map(|w| w.text()).collect();
        assert_eq!(texts, ["IRATE", "CRATE", "GRATE"]);
        assert_eq!(solver.count_candidates(&history), 3);
    }

    #[test]
    fn exact_match_leaves_one_candidate() {
        let lists = setup_lists();
        let solver = Solver::new(BruteScoringStrategy::default(), &lists);

        let mut history = History::new();
        history.record(Word::new("IRATE").unwrap(), Feedback::PERFECT);

        let candidates = solver.candidates(&history);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].text(), "IRATE");
    }
}
