//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_comparison, print_evaluation_statistics, print_opener_ranking, print_solve_result,
};
