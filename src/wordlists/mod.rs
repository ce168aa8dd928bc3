//! Word lists for Wordle solving
//!
//! The solution list is what strategies choose from and evaluate against.
//! The guess list is the wider set of legal words, used to rank openers.

pub mod loader;

use crate::core::Word;
use anyhow::{Context, Result, bail};
use std::path::Path;

/// Default solution list file
pub const DEFAULT_SOLUTIONS_PATH: &str = "wordlist_solutions.txt";

/// Default guess list file
pub const DEFAULT_GUESSES_PATH: &str = "wordlist_guesses.txt";

/// The immutable word lists of a session
#[derive(Debug, Clone, Default)]
pub struct WordLists {
    pub solutions: Vec<Word>,
    pub guesses: Vec<Word>,
}

impl WordLists {
    #[must_use]
    pub const fn new(solutions: Vec<Word>, guesses: Vec<Word>) -> Self {
        Self { solutions, guesses }
    }

    /// Load both lists from disk
    ///
    /// # Errors
    ///
    /// Fails if either file cannot be read, or if the solution list holds no
    /// valid word.
    pub fn load(solutions: impl AsRef<Path>, guesses: impl AsRef<Path>) -> Result<Self> {
        let solutions_path = solutions.as_ref();
        let guesses_path = guesses.as_ref();

        let solutions = loader::load_from_file(solutions_path).with_context(|| {
            format!("failed to read solution list {}", solutions_path.display())
        })?;
        if solutions.is_empty() {
            bail!("solution list {} has no valid words", solutions_path.display());
        }

        let guesses = loader::load_from_file(guesses_path)
            .with_context(|| format!("failed to read guess list {}", guesses_path.display()))?;

        Ok(Self::new(solutions, guesses))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("wordle_scoring_{}_{name}", std::process::id()))
    }

    #[test]
    fn load_reads_both_lists() {
        let solutions = temp_path("solutions_ok.txt");
        let guesses = temp_path("guesses_ok.txt");
        fs::write(&solutions, "arise\ncrate\n").unwrap();
        fs::write(&guesses, "arise\ncrate\nsalet\n").unwrap();

        let lists = WordLists::load(&solutions, &guesses).unwrap();
        fs::remove_file(&solutions).unwrap();
        fs::remove_file(&guesses).unwrap();

        assert_eq!(lists.solutions.len(), 2);
        assert_eq!(lists.guesses.len(), 3);
    }

    #[test]
    fn load_rejects_empty_solutions() {
        let solutions = temp_path("solutions_empty.txt");
        let guesses = temp_path("guesses_empty.txt");
        fs::write(&solutions, "\nnot-a-word\n").unwrap();
        fs::write(&guesses, "arise\n").unwrap();

        let result = WordLists::load(&solutions, &guesses);
        fs::remove_file(&solutions).unwrap();
        fs::remove_file(&guesses).unwrap();

        let message = result.unwrap_err().to_string();
        assert!(message.contains("no valid words"));
    }

    #[test]
    fn load_reports_missing_file() {
        let missing = temp_path("does_not_exist.txt");

        let error = WordLists::load(&missing, &missing).unwrap_err();
        assert!(error.to_string().contains("failed to read solution list"));
    }
}
