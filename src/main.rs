//! Wordle Solver - CLI
//!
//! Suggests guesses interactively, solves known words, evaluates strategies
//! over the whole solution list and ranks opening words.

use anyhow::{Context, Result, anyhow, bail};
use clap::{Parser, Subcommand};
use colored::Colorize;
use wordle_scoring::{
    commands::{
        DEFAULT_MAX_ROUNDS, EvaluateConfig, SessionEnd, SolveConfig, rank_openers,
        run_evaluation, run_interactive, solve_word,
    },
    core::Word,
    output::{
        print_comparison, print_evaluation_statistics, print_opener_ranking, print_solve_result,
    },
    solver::{
        ANAGRAM_MATCH_POINTS, DEFAULT_OPENING, EXACT_MATCH_POINTS, ScoringWeights, Solver,
        StrategyConfig, StrategyType,
    },
    wordlists::{DEFAULT_GUESSES_PATH, DEFAULT_SOLUTIONS_PATH, WordLists},
};

#[derive(Parser)]
#[command(
    name = "wordle_scoring",
    about = "Wordle solver using letter-frequency, brute-force scoring and minimax strategies",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: scoring (default), frequency, minimax
    #[arg(short, long, global = true, default_value = "scoring")]
    strategy: String,

    /// Newline-delimited list of possible solutions
    #[arg(long, global = true, default_value = DEFAULT_SOLUTIONS_PATH)]
    solutions: String,

    /// Newline-delimited list of legal guesses
    #[arg(long, global = true, default_value = DEFAULT_GUESSES_PATH)]
    guesses: String,

    /// Points for a letter in its exact position
    #[arg(long, global = true, default_value_t = EXACT_MATCH_POINTS)]
    exact_points: i64,

    /// Points for a letter present elsewhere in the word
    #[arg(long, global = true, default_value_t = ANAGRAM_MATCH_POINTS)]
    anagram_points: i64,

    /// Opening word of the minimax strategy
    #[arg(long, global = true, default_value = DEFAULT_OPENING)]
    opening: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Suggest guesses from the feedback you enter (default)
    Interactive,

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Rounds before the game counts as stuck
        #[arg(long, default_value_t = DEFAULT_MAX_ROUNDS)]
        max_rounds: usize,

        /// Show candidate counts for each round
        #[arg(short, long)]
        verbose: bool,
    },

    /// Play every solution and report rounds to completion
    Evaluate {
        /// Only play the first N solutions
        #[arg(short, long)]
        limit: Option<usize>,

        /// Play N randomly chosen solutions
        #[arg(short = 'n', long)]
        sample: Option<usize>,

        /// Seed for --sample
        #[arg(long)]
        seed: Option<u64>,

        /// Rounds before a game counts as stuck
        #[arg(long, default_value_t = DEFAULT_MAX_ROUNDS)]
        max_rounds: usize,

        /// Evaluate every strategy instead of --strategy
        #[arg(short, long)]
        all: bool,
    },

    /// Rank opening words by brute-force score against all solutions
    Openers {
        /// Number of openers to show
        #[arg(short, long, default_value = "20")]
        top: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = strategy_config(&cli)?;
    let lists = WordLists::load(&cli.solutions, &cli.guesses)?;

    // Default to interactive mode if no command given
    let command = cli.command.unwrap_or(Commands::Interactive);

    match command {
        Commands::Interactive => run_interactive_command(&cli.strategy, &config, &lists),
        Commands::Solve {
            word,
            max_rounds,
            verbose,
        } => run_solve_command(&cli.strategy, &config, &lists, word, max_rounds, verbose),
        Commands::Evaluate {
            limit,
            sample,
            seed,
            max_rounds,
            all,
        } => {
            let eval_config = EvaluateConfig {
                limit,
                sample,
                seed,
                max_rounds,
                show_progress: true,
            };
            run_evaluate_command(&cli.strategy, &config, &lists, &eval_config, all)
        }
        Commands::Openers { top } => run_openers_command(&config, &lists, top),
    }
}

fn strategy_config(cli: &Cli) -> Result<StrategyConfig> {
    let opening = Word::new(cli.opening.as_str())
        .with_context(|| format!("invalid opening word {:?}", cli.opening))?;

    Ok(StrategyConfig {
        weights: ScoringWeights::new(cli.exact_points, cli.anagram_points),
        opening,
    })
}

fn build_strategy(name: &str, config: &StrategyConfig) -> Result<StrategyType> {
    match StrategyType::from_name(name, config) {
        Some(strategy) => Ok(strategy),
        None => bail!("unknown strategy {name:?}; expected frequency, scoring or minimax"),
    }
}

fn run_interactive_command(
    strategy_name: &str,
    config: &StrategyConfig,
    lists: &WordLists,
) -> Result<()> {
    let strategy = build_strategy(strategy_name, config)?;
    let solver = Solver::new(strategy, lists);

    match run_interactive(&solver).map_err(|e| anyhow!(e))? {
        SessionEnd::Solved { rounds } => {
            println!("\n👋 Solved in {rounds} rounds. Thanks for playing!");
        }
        SessionEnd::Exhausted | SessionEnd::Quit => println!("\n👋 Thanks for playing!"),
    }
    Ok(())
}

fn run_solve_command(
    strategy_name: &str,
    config: &StrategyConfig,
    lists: &WordLists,
    word: String,
    max_rounds: usize,
    verbose: bool,
) -> Result<()> {
    let strategy = build_strategy(strategy_name, config)?;
    let name = strategy.name();
    let solver = Solver::new(strategy, lists);

    let mut solve_config = SolveConfig::new(word);
    solve_config.max_rounds = max_rounds;

    let result = solve_word(solve_config, &solver).map_err(|e| anyhow!(e))?;
    print_solve_result(&result, name, verbose);
    Ok(())
}

fn run_evaluate_command(
    strategy_name: &str,
    config: &StrategyConfig,
    lists: &WordLists,
    eval_config: &EvaluateConfig,
    all: bool,
) -> Result<()> {
    let strategies = if all {
        StrategyType::all(config)
    } else {
        vec![build_strategy(strategy_name, config)?]
    };

    println!("\n{}", "═".repeat(70));
    println!(" Wordle Strategy Evaluation ");
    println!("{}", "═".repeat(70));
    println!("\nSolutions: {}", lists.solutions.len());
    println!(
        "Weights:   exact {} / anagram {}",
        config.weights.exact, config.weights.anagram
    );
    println!("Round cap: {}\n", eval_config.max_rounds);

    let mut all_stats = Vec::with_capacity(strategies.len());
    for strategy in strategies {
        let name = strategy.name();
        println!("{} strategy...", name.bright_cyan().bold());

        let solver = Solver::new(strategy, lists);
        let stats = run_evaluation(&solver, name, eval_config);
        print_evaluation_statistics(&stats);
        println!("{}", "-".repeat(50));

        all_stats.push(stats);
    }

    if all_stats.len() > 1 {
        print_comparison(&all_stats);
    }
    Ok(())
}

fn run_openers_command(config: &StrategyConfig, lists: &WordLists, top: usize) -> Result<()> {
    let ranking = rank_openers(lists, config.weights, top).map_err(|e| anyhow!(e))?;
    print_opener_ranking(&ranking);
    Ok(())
}
