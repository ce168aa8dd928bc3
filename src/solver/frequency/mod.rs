//! Letter-frequency strategy
//!
//! Scores candidates by how common their letters are across the remaining pool.

mod counts;
mod selector;

pub use counts::LetterCounts;
pub use selector::{score_word, select_best_guess};
