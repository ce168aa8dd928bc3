//! Command implementations

pub mod evaluate;
pub mod interactive;
pub mod openers;
pub mod solve;

pub use evaluate::{EvaluateConfig, EvaluationStatistics, GameRecord, run_evaluation};
pub use interactive::{SessionEnd, run_interactive};
pub use openers::{OpenerRanking, OpenerScore, rank_openers};
pub use solve::{
    DEFAULT_MAX_ROUNDS, GameOutcome, GuessStep, SolveConfig, SolveResult, play_game, solve_word,
};
