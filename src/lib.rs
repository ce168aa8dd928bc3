//! Wordle Solver
//!
//! A heuristic Wordle solver with three guess-selection strategies: letter
//! frequency, brute-force hint scoring, and brute-force minimax.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_scoring::core::{History, Word, mark_guess};
//! use wordle_scoring::solver::{BruteScoringStrategy, Solver};
//! use wordle_scoring::wordlists::{WordLists, loader::words_from_slice};
//!
//! let words = words_from_slice(&["crane", "slate", "snake", "knave"]);
//! let lists = WordLists::new(words.clone(), words);
//! let solver = Solver::new(BruteScoringStrategy::default(), &lists);
//!
//! let answer = Word::new("snake").unwrap();
//! let mut history = History::new();
//! let guess = solver.next_guess(&history).unwrap().clone();
//! history.record(guess.clone(), mark_guess(&guess, &answer));
//!
//! println!("{guess} -> {} candidates left", solver.count_candidates(&history));
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
