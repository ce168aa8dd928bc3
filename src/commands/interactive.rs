//! Interactive console mode
//!
//! Suggests a word, reads the feedback the game gave for it, and suggests the
//! next word until the puzzle is solved or no word fits.

use crate::core::{Feedback, History};
use crate::output::formatters::colored_feedback;
use crate::solver::{Solver, Strategy};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// How an interactive session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Solved { rounds: usize },
    Exhausted,
    Quit,
}

/// Run the interactive mode on stdin and stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_interactive<S: Strategy>(solver: &Solver<S>) -> Result<SessionEnd, String> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    run_session(solver, &mut input, &mut output)
}

/// Run an interactive session over arbitrary input and output
///
/// End of input counts as quitting.
///
/// # Errors
///
/// Returns an error if reading or writing fails.
pub fn run_session<S: Strategy, R: BufRead, W: Write>(
    solver: &Solver<S>,
    input: &mut R,
    output: &mut W,
) -> Result<SessionEnd, String> {
    let io_err = |e: io::Error| e.to_string();

    writeln!(output, "Computing first move...").map_err(io_err)?;
    let mut history = History::new();
    let Some(mut current) = solver.next_guess(&history) else {
        writeln!(output, "{}", "The solution list is empty.".red()).map_err(io_err)?;
        return Ok(SessionEnd::Exhausted);
    };

    writeln!(
        output,
        "Okay, to start, play the word {}.",
        current.text().bright_yellow().bold()
    )
    .map_err(io_err)?;

    let mut rounds = 1;
    loop {
        writeln!(
            output,
            "Please enter the feedback that you got from the game for {current}."
        )
        .map_err(io_err)?;
        writeln!(
            output,
            "Use G (Green), Y (Yellow), and A (grAy) in their correct positions."
        )
        .map_err(io_err)?;
        writeln!(
            output,
            "For example, GGYGA would indicate green, green, yellow, green, gray."
        )
        .map_err(io_err)?;

        let Some(line) = read_line(input, output, "Input")? else {
            return Ok(SessionEnd::Quit);
        };

        match line.to_ascii_lowercase().as_str() {
            "quit" | "q" | "exit" => return Ok(SessionEnd::Quit),
            "list" | "l" => {
                let candidates = solver.candidates(&history);
                writeln!(output, "{} candidates remaining", candidates.len()).map_err(io_err)?;
                for candidate in candidates.iter().take(20) {
                    writeln!(output, "  • {candidate}").map_err(io_err)?;
                }
                continue;
            }
            _ => {}
        }

        let Some(feedback) = Feedback::from_code(&line) else {
            writeln!(output, "{}", "Invalid feedback, try again.".red()).map_err(io_err)?;
            continue;
        };

        writeln!(
            output,
            "  {current} {}",
            colored_feedback(current.text(), &feedback)
        )
        .map_err(io_err)?;

        if feedback.is_perfect() {
            writeln!(output, "{}", "Yay!".bright_green().bold()).map_err(io_err)?;
            return Ok(SessionEnd::Solved { rounds });
        }

        history.record(current.clone(), feedback);

        writeln!(output, "Computing next move...").map_err(io_err)?;
        let Some(next) = solver.next_guess(&history) else {
            writeln!(
                output,
                "{}",
                "Sorry, there are no words left in the word list which satisfy the constraints."
                    .red()
            )
            .map_err(io_err)?;
            return Ok(SessionEnd::Exhausted);
        };

        writeln!(
            output,
            "Your next word is {}. Play it now.",
            next.text().bright_yellow().bold()
        )
        .map_err(io_err)?;
        writeln!(output, "{}", "─".repeat(60).cyan()).map_err(io_err)?;

        current = next;
        rounds += 1;
    }
}

/// Read one trimmed line, or `None` at end of input
fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<Option<String>, String> {
    write!(output, "{prompt}: ").map_err(|e| e.to_string())?;
    output.flush().map_err(|e| e.to_string())?;

    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(|e| e.to_string())?;

    Ok((read > 0).then(|| line.trim().to_string()))
}
