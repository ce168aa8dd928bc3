//! Wordle solving algorithms
//!
//! This module contains the three guess-selection strategies, the scoring
//! weights they share, and the solver that binds a strategy to word lists.

pub mod brute;
mod engine;
pub mod frequency;
pub mod minimax;
pub mod scoring;
pub mod strategy;

pub use engine::Solver;
pub use scoring::{ANAGRAM_MATCH_POINTS, EXACT_MATCH_POINTS, ScoringWeights};
pub use strategy::{
    BruteMinMaxStrategy, BruteScoringStrategy, DEFAULT_OPENING, FrequencyStrategy, Strategy,
    StrategyConfig, StrategyType,
};
