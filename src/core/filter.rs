//! Candidate filtering against the previous round

use super::blacklist::Blacklist;
use super::feedback::{Feedback, Hint};
use super::word::{WORD_LENGTH, Word};

/// Check whether `candidate` is consistent with the last guess and its feedback
///
/// - Green: the candidate must have the guessed letter at that position.
/// - Yellow: the candidate must not have the letter there, and must have it at
///   some position that is not green.
/// - Afterwards, every non-green position of the candidate must hold a letter
///   outside the blacklist, unless that letter was yellow in this feedback.
///
/// Letter counts are not reconciled; duplicates are approximated exactly as
/// [`Feedback::calculate`] approximates them.
///
/// # Examples
/// ```
/// use wordle_scoring::core::{Blacklist, Feedback, Word, is_word_valid};
///
/// let guess = Word::new("crane").unwrap();
/// let feedback = Feedback::from_code("AAGYG").unwrap();
/// let blacklist: Blacklist = b"CR".iter().copied().collect();
///
/// assert!(is_word_valid(&Word::new("snake").unwrap(), &guess, &feedback, &blacklist));
/// assert!(!is_word_valid(&Word::new("crane").unwrap(), &guess, &feedback, &blacklist));
/// ```
#[must_use]
pub fn is_word_valid(
    candidate: &Word,
    last_guess: &Word,
    feedback: &Feedback,
    blacklist: &Blacklist,
) -> bool {
    let word = candidate.chars();
    let last = last_guess.chars();
    let hints = feedback.hints();

    let mut yellows = [0u8; WORD_LENGTH];
    let mut yellow_count = 0;

    // Allow: Index needed to compare word[i] and last[i] under hints[i]
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LENGTH {
        match hints[i] {
            Hint::Green => {
                if word[i] != last[i] {
                    return false;
                }
            }
            Hint::Yellow => {
                if word[i] == last[i] {
                    return false;
                }
                yellows[yellow_count] = last[i];
                yellow_count += 1;

                let elsewhere =
                    (0..WORD_LENGTH).any(|j| hints[j] != Hint::Green && word[j] == last[i]);
                if !elsewhere {
                    return false;
                }
            }
            Hint::Grey => {}
        }
    }

    let yellows = &yellows[..yellow_count];
    (0..WORD_LENGTH).all(|i| {
        hints[i] == Hint::Green || !blacklist.contains(word[i]) || yellows.contains(&word[i])
    })
}
