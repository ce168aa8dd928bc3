//! Strategy evaluation over the solution list
//!
//! Plays a full game against every selected solution and reports how many
//! rounds each took.

use super::solve::{DEFAULT_MAX_ROUNDS, GameOutcome, play_game};
use crate::core::Word;
use crate::solver::{Solver, Strategy};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Which solutions to play and how long a game may run
#[derive(Debug, Clone)]
pub struct EvaluateConfig {
    /// Only the first N solutions
    pub limit: Option<usize>,
    /// N solutions drawn at random, applied after `limit`
    pub sample: Option<usize>,
    pub seed: Option<u64>,
    pub max_rounds: usize,
    pub show_progress: bool,
}

impl Default for EvaluateConfig {
    fn default() -> Self {
        Self {
            limit: None,
            sample: None,
            seed: None,
            max_rounds: DEFAULT_MAX_ROUNDS,
            show_progress: true,
        }
    }
}

/// Result from playing a single solution
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub word: String,
    pub rounds: usize,
    pub outcome: GameOutcome,
}

/// Statistics from one evaluation run
#[derive(Debug)]
pub struct EvaluationStatistics {
    pub strategy: String,
    pub total_words: usize,
    pub solved: usize,
    /// Rounds to completion -> number of solved games
    pub distribution: FxHashMap<usize, usize>,
    pub most_rounds: usize,
    pub least_rounds: usize,
    pub average_rounds: f64,
    pub hardest_words: Vec<(String, usize)>,
    pub stuck_words: Vec<String>,
    pub exhausted_words: Vec<String>,
    pub total_time: Duration,
}

impl EvaluationStatistics {
    /// Aggregate per-game records
    ///
    /// Round statistics only count solved games; stuck and exhausted games are
    /// listed separately.
    #[must_use]
    pub fn from_records(strategy: &str, records: &[GameRecord], total_time: Duration) -> Self {
        let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
        let mut stuck_words = Vec::new();
        let mut exhausted_words = Vec::new();

        for record in records {
            match record.outcome {
                GameOutcome::Solved => *distribution.entry(record.rounds).or_insert(0) += 1,
                GameOutcome::Stuck => stuck_words.push(record.word.clone()),
                GameOutcome::Exhausted => exhausted_words.push(record.word.clone()),
            }
        }

        let solved_rounds: Vec<usize> = records
            .iter()
            .filter(|r| r.outcome == GameOutcome::Solved)
            .map(|r| r.rounds)
            .collect();
        let solved = solved_rounds.len();

        let average_rounds = if solved > 0 {
            solved_rounds.iter().sum::<usize>() as f64 / solved as f64
        } else {
            0.0
        };

        let most_rounds = solved_rounds.iter().copied().max().unwrap_or(0);
        let least_rounds = solved_rounds.iter().copied().min().unwrap_or(0);

        let mut hardest_words: Vec<(String, usize)> = records
            .iter()
            .filter(|r| r.outcome == GameOutcome::Solved && r.rounds == most_rounds)
            .map(|r| (r.word.clone(), r.rounds))
            .collect();
        hardest_words.truncate(10);

        Self {
            strategy: strategy.to_string(),
            total_words: records.len(),
            solved,
            distribution,
            most_rounds,
            least_rounds,
            average_rounds,
            hardest_words,
            stuck_words,
            exhausted_words,
            total_time,
        }
    }

    /// Games that did not end with the solution guessed
    #[must_use]
    pub fn failed(&self) -> usize {
        self.total_words - self.solved
    }
}

/// Pick the solutions an evaluation plays, in list order unless sampled
#[must_use]
pub fn select_words<'a>(solutions: &'a [Word], config: &EvaluateConfig) -> Vec<&'a Word> {
    let limited: Vec<&Word> = solutions
        .iter()
        .take(config.limit.unwrap_or(solutions.len()))
        .collect();

    match config.sample {
        Some(amount) => {
            let mut rng = match config.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_rng(&mut rand::rng()),
            };
            limited
                .choose_multiple(&mut rng, amount)
                .copied()
                .collect()
        }
        None => limited,
    }
}

/// Run the solver on every selected solution
pub fn run_evaluation<S: Strategy>(
    solver: &Solver<S>,
    strategy_name: &str,
    config: &EvaluateConfig,
) -> EvaluationStatistics {
    let words = select_words(&solver.lists().solutions, config);

    let pb = if config.show_progress {
        let pb = ProgressBar::new(words.len() as u64);
        // Template is a compile-time constant
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb.set_message(strategy_name.to_string());
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let mut records: Vec<GameRecord> = Vec::with_capacity(words.len());
    let mut solved_rounds = 0usize;
    let mut solved_count = 0usize;

    for (idx, &target) in words.iter().enumerate() {
        let result = play_game(solver, target, config.max_rounds);

        match result.outcome {
            GameOutcome::Solved => {
                solved_rounds += result.rounds();
                solved_count += 1;
            }
            GameOutcome::Stuck => pb.println(format!(
                "Got stuck on {} after {} rounds",
                result.target,
                result.rounds()
            )),
            GameOutcome::Exhausted => pb.println(format!(
                "Ran out of words on {} after {} rounds",
                result.target,
                result.rounds()
            )),
        }

        records.push(GameRecord {
            word: result.target.clone(),
            rounds: result.rounds(),
            outcome: result.outcome,
        });

        if idx % 10 == 0 && solved_count > 0 {
            let avg = solved_rounds as f64 / solved_count as f64;
            pb.set_message(format!("{strategy_name} | Avg: {avg:.3}"));
        }
        pb.inc(1);
    }

    pb.finish_with_message(format!("{strategy_name} | Complete!"));

    EvaluationStatistics::from_records(strategy_name, &records, start.elapsed())
}
