//! Brute-force minimax strategy
//!
//! Picks the guess that minimizes the worst-case number of candidates left
//! after filtering with the feedback it would receive.

mod calculator;
mod selector;

pub use calculator::{remaining_after, worst_case_remaining};
pub use selector::select_best_guess;
