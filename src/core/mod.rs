//! Core domain types for Wordle
//!
//! This module contains the words, feedback, blacklist and candidate filter.
//! Everything here is pure and deterministic.

mod blacklist;
mod feedback;
mod filter;
mod history;
mod word;

pub use blacklist::Blacklist;
pub use feedback::{Feedback, Hint, mark_guess};
pub use filter::is_word_valid;
pub use history::History;
pub use word::{WORD_LENGTH, Word, WordError};
