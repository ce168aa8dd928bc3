//! Brute-force scoring strategy
//!
//! Plays every candidate guess against every remaining solution and sums how
//! helpful the resulting hints are.

mod calculator;
mod selector;

pub use calculator::{feedback_score, total_score};
pub use selector::{rank_guesses, select_best_guess};
