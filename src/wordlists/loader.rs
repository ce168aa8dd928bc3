//! Word list loading utilities
//!
//! Word lists are newline-delimited. Lines are trimmed, blanks are skipped,
//! and entries that are not five ASCII letters are dropped.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// Returns a vector of valid Word instances, skipping any invalid entries.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_scoring::wordlists::loader::load_from_file;
///
/// let words = load_from_file("wordlist_solutions.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_words(&content))
}

/// Parse newline-delimited words, keeping file order
///
/// # Examples
/// ```
/// use wordle_scoring::wordlists::loader::parse_words;
///
/// let words = parse_words("crane\n\n  slate \nnope\n");
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[1].text(), "SLATE");
/// ```
#[must_use]
pub fn parse_words(content: &str) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect()
}

/// Convert a string slice to a Word vector, skipping invalid entries
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
