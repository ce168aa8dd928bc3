//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use super::scoring::ScoringWeights;
use super::{brute, frequency, minimax};
use crate::core::{History, Word};

/// Opening word played by the minimax strategy before any feedback
pub const DEFAULT_OPENING: &str = "ARISE";

/// A strategy for selecting the next guess from the solution list
pub trait Strategy {
    /// Select the best guess from the solutions consistent with `history`
    ///
    /// Returns the best guess, or `None` if no solution is consistent.
    fn select_guess<'a>(&self, solutions: &'a [Word], history: &History) -> Option<&'a Word>;
}

/// Settings shared by the strategies that need them
#[derive(Debug, Clone)]
pub struct StrategyConfig {
    pub weights: ScoringWeights,
    pub opening: Word,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            opening: default_opening(),
        }
    }
}

fn default_opening() -> Word {
    Word::new(DEFAULT_OPENING).expect("DEFAULT_OPENING is a valid 5-letter word")
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone)]
pub enum StrategyType {
    /// Letter frequency over the remaining candidates
    Frequency(FrequencyStrategy),
    /// Highest total hint score against every candidate (default)
    BruteScoring(BruteScoringStrategy),
    /// Lowest worst-case number of remaining candidates
    BruteMinMax(BruteMinMaxStrategy),
}

impl Strategy for StrategyType {
    fn select_guess<'a>(&self, solutions: &'a [Word], history: &History) -> Option<&'a Word> {
        match self {
            Self::Frequency(s) => s.select_guess(solutions, history),
            Self::BruteScoring(s) => s.select_guess(solutions, history),
            Self::BruteMinMax(s) => s.select_guess(solutions, history),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "frequency", "scoring", "brute-scoring", "minimax", "brute-minmax".
    /// Returns `None` if the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str, config: &StrategyConfig) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "frequency" => Some(Self::Frequency(FrequencyStrategy::new(config.weights))),
            "scoring" | "brute-scoring" => {
                Some(Self::BruteScoring(BruteScoringStrategy::new(config.weights)))
            }
            "minimax" | "brute-minmax" => {
                Some(Self::BruteMinMax(BruteMinMaxStrategy::new(config.opening.clone())))
            }
            _ => None,
        }
    }

    /// Every strategy, in the order they are reported
    #[must_use]
    pub fn all(config: &StrategyConfig) -> Vec<Self> {
        vec![
            Self::Frequency(FrequencyStrategy::new(config.weights)),
            Self::BruteScoring(BruteScoringStrategy::new(config.weights)),
            Self::BruteMinMax(BruteMinMaxStrategy::new(config.opening.clone())),
        ]
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Frequency(_) => "frequency",
            Self::BruteScoring(_) => "brute-scoring",
            Self::BruteMinMax(_) => "brute-minmax",
        }
    }
}

/// Letter frequency strategy
///
/// Selects the candidate whose letters are most common, position by position,
/// among the remaining candidates.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrequencyStrategy {
    pub weights: ScoringWeights,
}

impl FrequencyStrategy {
    #[must_use]
    pub const fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }
}

impl Strategy for FrequencyStrategy {
    fn select_guess<'a>(&self, solutions: &'a [Word], history: &History) -> Option<&'a Word> {
        let pool = history.filter(solutions);
        frequency::select_best_guess(&pool, self.weights).map(|(best, _)| best)
    }
}

/// Brute-force scoring strategy
///
/// Selects the candidate whose hints score highest summed over every
/// remaining candidate as the solution.
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteScoringStrategy {
    pub weights: ScoringWeights,
}

impl BruteScoringStrategy {
    #[must_use]
    pub const fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }
}

impl Strategy for BruteScoringStrategy {
    fn select_guess<'a>(&self, solutions: &'a [Word], history: &History) -> Option<&'a Word> {
        let pool = history.filter(solutions);
        brute::select_best_guess(&pool, self.weights).map(|(best, _)| best)
    }
}

/// Brute-force minimax strategy
///
/// Opens with a fixed word, then selects the candidate that minimizes the
/// worst-case number of remaining candidates.
#[derive(Debug, Clone)]
pub struct BruteMinMaxStrategy {
    pub opening: Word,
}

impl BruteMinMaxStrategy {
    #[must_use]
    pub const fn new(opening: Word) -> Self {
        Self { opening }
    }
}

impl Default for BruteMinMaxStrategy {
    fn default() -> Self {
        Self::new(default_opening())
    }
}

impl Strategy for BruteMinMaxStrategy {
    fn select_guess<'a>(&self, solutions: &'a [Word], history: &History) -> Option<&'a Word> {
        // The opening is only played when it can be the answer
        if history.is_opening()
            && let Some(opening) = solutions.iter().find(|&w| *w == self.opening)
        {
            return Some(opening);
        }

        let pool = history.filter(solutions);
        minimax::select_best_guess(&pool, history.blacklist()).map(|(best, _)| best)
    }
}
