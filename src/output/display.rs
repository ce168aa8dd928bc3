//! Display functions for command results

use super::formatters::{colored_feedback, create_progress_bar, feedback_summary};
use crate::commands::{EvaluationStatistics, GameOutcome, OpenerRanking, SolveResult};
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, strategy: &str, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {} with {}",
        result.target.bright_yellow().bold(),
        strategy.bright_cyan()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        let turn = i + 1;
        println!(
            "\nTurn {turn}: {}",
            colored_feedback(&step.word, &step.feedback)
        );
        println!("  Guess:     {}", step.word);
        println!("  Hint:      {}", feedback_summary(&step.feedback));
        println!("  Blacklist: {}", step.blacklist);

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
        }
    }

    println!();
    match result.outcome {
        GameOutcome::Solved => println!(
            "{}",
            format!(
                "✅ Solved in {} round{}!",
                result.rounds(),
                if result.rounds() == 1 { "" } else { "s" }
            )
            .green()
            .bold()
        ),
        GameOutcome::Stuck => println!(
            "{}",
            format!("❌ Got stuck after {} rounds", result.rounds())
                .red()
                .bold()
        ),
        GameOutcome::Exhausted => println!(
            "{}",
            "❌ No words left in the word list satisfy the constraints"
                .red()
                .bold()
        ),
    }
}

/// Print evaluation statistics for one strategy
pub fn print_evaluation_statistics(stats: &EvaluationStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" {} ", format!("{} strategy", stats.strategy).bright_cyan().bold());
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total words tested:  {}", stats.total_words);
    if stats.total_words > 0 {
        println!(
            "  Successfully solved: {} {}",
            stats.solved,
            format!(
                "({:.1}%)",
                stats.solved as f64 / stats.total_words as f64 * 100.0
            )
            .green()
        );
    }
    if stats.failed() > 0 {
        println!(
            "  Failed to solve:     {}",
            stats.failed().to_string().red()
        );
    }
    println!("  Most rounds to completion:    {}", stats.most_rounds);
    println!("  Least rounds to completion:   {}", stats.least_rounds);
    println!(
        "  Average rounds to completion: {}",
        format!("{:.3}", stats.average_rounds).bright_yellow().bold()
    );
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );

    if stats.solved > 0 {
        println!("\n📈 {}", "Round Distribution".bright_cyan().bold());
        let max_count = stats.distribution.values().copied().max().unwrap_or(1);
        for rounds in stats.least_rounds..=stats.most_rounds {
            let count = stats.distribution.get(&rounds).copied().unwrap_or(0);
            let percentage = count as f64 / stats.solved as f64 * 100.0;
            let bar = create_progress_bar(count as f64, max_count as f64, 40);
            println!("  {rounds:2} rounds: {} {count:5} ({percentage:5.1}%)", bar.green());
        }
    }

    if !stats.hardest_words.is_empty() {
        println!("\n😰 {}", "Hardest Words".yellow().bold());
        let words: Vec<&str> = stats.hardest_words.iter().map(|(w, _)| w.as_str()).collect();
        println!("  {} ({} rounds)", words.join(" ").yellow(), stats.most_rounds);
    }

    if !stats.stuck_words.is_empty() {
        println!("\n🧱 {}", "Stuck".red().bold());
        println!("  {}", stats.stuck_words.join(" "));
    }

    if !stats.exhausted_words.is_empty() {
        println!("\n🚫 {}", "Ran Out Of Words".red().bold());
        println!("  {}", stats.exhausted_words.join(" "));
    }
}

/// Print a side-by-side summary of several evaluations
pub fn print_comparison(all_stats: &[EvaluationStatistics]) {
    println!("\n{}", "═".repeat(70));
    println!(" {} ", "Strategy Comparison".bright_cyan().bold());
    println!("{}", "═".repeat(70));
    println!(
        "  {:<16} {:>8} {:>8} {:>8} {:>10} {:>8}",
        "Strategy", "Solved", "Most", "Least", "Average", "Failed"
    );

    let best = all_stats
        .iter()
        .filter(|s| s.solved > 0)
        .map(|s| s.average_rounds)
        .fold(f64::INFINITY, f64::min);

    for stats in all_stats {
        let average = format!("{:.3}", stats.average_rounds);
        let average = if stats.solved > 0 && (stats.average_rounds - best).abs() < f64::EPSILON {
            average.bright_green().bold()
        } else {
            average.normal()
        };

        println!(
            "  {:<16} {:>8} {:>8} {:>8} {:>10} {:>8}",
            stats.strategy,
            stats.solved,
            stats.most_rounds,
            stats.least_rounds,
            average,
            stats.failed()
        );
    }
}

/// Print the ranked opening words
pub fn print_opener_ranking(ranking: &OpenerRanking) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "OPENING WORDS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!(
        "  Scored {} guesses against {} solutions\n",
        ranking.total_guesses, ranking.total_solutions
    );

    let top_score = ranking.top.first().map_or(0, |o| o.score);
    for (i, opener) in ranking.top.iter().enumerate() {
        let bar = create_progress_bar(opener.score as f64, top_score as f64, 30);
        println!(
            "  {:>3}. {} {} {}",
            i + 1,
            opener.word.bright_yellow().bold(),
            bar.green(),
            opener.score
        );
    }
}
