//! Word solving command
//!
//! Plays a game against a known target and returns the solution path.

use crate::core::{Blacklist, Feedback, History, Word, mark_guess};
use crate::solver::{Solver, Strategy};

/// Rounds played before a game is reported as stuck
pub const DEFAULT_MAX_ROUNDS: usize = 15;

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub max_rounds: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_rounds: DEFAULT_MAX_ROUNDS,
        }
    }
}

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// The target was guessed
    Solved,
    /// The round cap was reached first
    Stuck,
    /// The strategy ran out of consistent words
    Exhausted,
}

/// Result of solving a word
pub struct SolveResult {
    pub target: String,
    pub outcome: GameOutcome,
    pub guesses: Vec<GuessStep>,
}

impl SolveResult {
    #[must_use]
    pub fn success(&self) -> bool {
        self.outcome == GameOutcome::Solved
    }

    /// Number of guesses played
    #[must_use]
    pub fn rounds(&self) -> usize {
        self.guesses.len()
    }
}

/// A single guess step in the solution
pub struct GuessStep {
    pub word: String,
    pub feedback: Feedback,
    /// Blacklist after this guess's greys were added
    pub blacklist: Blacklist,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Play one game against `target`
///
/// Stops when the target is guessed, when the strategy returns no guess, or
/// after `max_rounds` guesses.
pub fn play_game<S: Strategy>(solver: &Solver<S>, target: &Word, max_rounds: usize) -> SolveResult {
    let mut history = History::new();
    let mut guesses: Vec<GuessStep> = Vec::new();

    let outcome = loop {
        if guesses.len() == max_rounds {
            break GameOutcome::Stuck;
        }

        let candidates_before = solver.count_candidates(&history);

        let Some(guess) = solver.next_guess(&history) else {
            break GameOutcome::Exhausted;
        };

        let feedback = mark_guess(guess, target);
        history.record(guess.clone(), feedback);

        guesses.push(GuessStep {
            word: guess.text().to_string(),
            feedback,
            blacklist: history.blacklist().clone(),
            candidates_before,
            candidates_after: solver.count_candidates(&history),
        });

        if feedback.is_perfect() {
            break GameOutcome::Solved;
        }
    };

    SolveResult {
        target: target.text().to_string(),
        outcome,
        guesses,
    }
}

/// Solve a specific word using the given solver and strategy
///
/// # Errors
///
/// Returns an error if:
/// - The target word is invalid (not 5 letters or contains non-ASCII)
/// - The target is not in the solution list
pub fn solve_word<S: Strategy>(
    config: SolveConfig,
    solver: &Solver<S>,
) -> Result<SolveResult, String> {
    let target_word = Word::new(&config.target).map_err(|e| format!("Invalid target word: {e}"))?;

    if !solver.lists().solutions.contains(&target_word) {
        return Err(format!("{target_word} is not in the solution list"));
    }

    Ok(play_game(solver, &target_word, config.max_rounds))
}
