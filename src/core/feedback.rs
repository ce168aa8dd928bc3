//! Wordle feedback calculation and representation
//!
//! A feedback is one hint per letter of the guess:
//! - Green: letter in the correct position
//! - Yellow: letter elsewhere in the solution
//! - Grey: letter not in the solution
//!
//! The text protocol uses one symbol per position: `G`, `Y` and `A` (grAy).

use super::word::{WORD_LENGTH, Word};
use std::fmt;

/// Hint for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hint {
    Green,
    Yellow,
    Grey,
}

impl Hint {
    /// Protocol symbol for this hint
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Green => 'G',
            Self::Yellow => 'Y',
            Self::Grey => 'A',
        }
    }

    /// Parse a protocol symbol (case-insensitive) or an emoji square
    #[must_use]
    pub const fn from_code(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Green),
            'Y' | 'y' | '🟨' => Some(Self::Yellow),
            'A' | 'a' | '⬜' | '⬛' => Some(Self::Grey),
            _ => None,
        }
    }

    /// Emoji square for this hint
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Green => '🟩',
            Self::Yellow => '🟨',
            Self::Grey => '⬜',
        }
    }
}

/// Feedback for a whole guess, index-aligned with the guessed word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Hint; WORD_LENGTH]);

impl Feedback {
    /// All greens (solved)
    pub const PERFECT: Self = Self([Hint::Green; WORD_LENGTH]);

    /// Create feedback from explicit hints
    #[inline]
    #[must_use]
    pub const fn new(hints: [Hint; WORD_LENGTH]) -> Self {
        Self(hints)
    }

    /// Calculate the feedback the game shows when `guess` is played against `solution`
    ///
    /// Greens are marked first. Every other position turns yellow if its letter
    /// appears at any position of the solution that is not itself green; the
    /// first such match wins and yellows do not consume letters, so a repeated
    /// guess letter can be yellow more often than the solution contains it.
    ///
    /// # Examples
    /// ```
    /// use wordle_scoring::core::{Feedback, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let solution = Word::new("snake").unwrap();
    ///
    /// let feedback = Feedback::calculate(&guess, &solution);
    /// assert_eq!(feedback.to_string(), "AAGYG");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, solution: &Word) -> Self {
        let guess = guess.chars();
        let solution = solution.chars();
        let mut hints = [Hint::Grey; WORD_LENGTH];

        // Allow: Index needed to compare guess[i] with solution[i] and set hints[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess[i] == solution[i] {
                hints[i] = Hint::Green;
            }
        }

        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if hints[i] == Hint::Green {
                continue;
            }
            let present =
                (0..WORD_LENGTH).any(|j| solution[j] == guess[i] && hints[j] != Hint::Green);
            hints[i] = if present { Hint::Yellow } else { Hint::Grey };
        }

        Self(hints)
    }

    /// Get the hints
    #[inline]
    #[must_use]
    pub const fn hints(&self) -> &[Hint; WORD_LENGTH] {
        &self.0
    }

    /// Get the hint at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn hint_at(&self, position: usize) -> Hint {
        self.0[position]
    }

    /// Check if this is a perfect match (all greens)
    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Count the number of green hints
    #[must_use]
    pub fn count_greens(&self) -> usize {
        self.0.iter().filter(|&&h| h == Hint::Green).count()
    }

    /// Count the number of yellow hints
    #[must_use]
    pub fn count_yellows(&self) -> usize {
        self.0.iter().filter(|&&h| h == Hint::Yellow).count()
    }

    /// Parse feedback from a protocol string like "GYAAG"
    ///
    /// Accepts `G`/`Y`/`A` in either case, or the emoji squares 🟩🟨⬜.
    ///
    /// # Examples
    /// ```
    /// use wordle_scoring::core::Feedback;
    ///
    /// let f1 = Feedback::from_code("GYAAG").unwrap();
    /// let f2 = Feedback::from_code("🟩🟨⬜⬜🟩").unwrap();
    /// assert_eq!(f1, f2);
    /// assert!(Feedback::from_code("GYAX").is_none());
    /// ```
    #[must_use]
    pub fn from_code(s: &str) -> Option<Self> {
        let mut hints = [Hint::Grey; WORD_LENGTH];
        let mut chars = s.chars();

        for hint in &mut hints {
            *hint = Hint::from_code(chars.next()?)?;
        }

        if chars.next().is_some() {
            return None;
        }

        Some(Self(hints))
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜⬜🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().copied().map(Hint::emoji).collect()
    }
}

/// Mark `guess` against `solution`, exactly as [`Feedback::calculate`]
#[inline]
#[must_use]
pub fn mark_guess(guess: &Word, solution: &Word) -> Feedback {
    Feedback::calculate(guess, solution)
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for hint in &self.0 {
            write!(f, "{}", hint.code())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Hint::{Green, Grey, Yellow};

    fn mark(guess: &str, solution: &str) -> Feedback {
        mark_guess(&Word::new(guess).unwrap(), &Word::new(solution).unwrap())
    }

    #[test]
    fn feedback_perfect_constant() {
        assert!(Feedback::PERFECT.is_perfect());
        assert_eq!(Feedback::PERFECT.count_greens(), 5);
        assert_eq!(Feedback::PERFECT.count_yellows(), 0);
        assert_eq!(Feedback::PERFECT.to_string(), "GGGGG");
    }

    #[test]
    fn feedback_all_grey() {
        let feedback = mark("ABCDE", "FGHIJ");
        assert_eq!(feedback, Feedback::new([Grey; 5]));
        assert_eq!(feedback.count_greens(), 0);
        assert_eq!(feedback.count_yellows(), 0);
    }

    #[test]
    fn feedback_self_is_perfect() {
        for word in ["CRANE", "SLATE", "ALLOY", "ZZZZZ", "AAAAA"] {
            assert!(mark(word, word).is_perfect());
        }
    }

    #[test]
    fn feedback_crane_against_snake() {
        assert_eq!(
            mark("CRANE", "SNAKE"),
            Feedback::new([Grey, Grey, Green, Yellow, Green])
        );
    }

    #[test]
    fn feedback_alloy_against_loyal() {
        // No greens, and every guess letter occurs somewhere in LOYAL
        assert_eq!(mark("ALLOY", "LOYAL"), Feedback::new([Yellow; 5]));
    }

    #[test]
    fn feedback_green_consumes_its_position() {
        // The second O is green, so the first O may only match the O ahead of it
        assert_eq!(
            mark("ROBOT", "FLOOR"),
            Feedback::new([Yellow, Yellow, Grey, Green, Grey])
        );
        // The only A is taken by the green, so the repeated A is grey
        assert_eq!(
            mark("AABBB", "ACCCC"),
            Feedback::new([Green, Grey, Grey, Grey, Grey])
        );
    }

    #[test]
    fn feedback_yellows_do_not_consume_letters() {
        // ABIDE has a single E, yet both E's of SPEED are yellow
        assert_eq!(
            mark("SPEED", "ABIDE"),
            Feedback::new([Grey, Grey, Yellow, Yellow, Yellow])
        );
    }

    #[test]
    fn feedback_green_count_matches_positions() {
        let pairs = [("CRANE", "CRATE"), ("SPEED", "CREEP"), ("ROBOT", "FLOOR")];
        for (guess, solution) in pairs {
            let exact = guess
                .bytes()
                .zip(solution.bytes())
                .filter(|(g, s)| g == s)
                .count();
            assert_eq!(mark(guess, solution).count_greens(), exact);
        }
    }

    #[test]
    fn feedback_from_code_valid() {
        let f1 = Feedback::from_code("GYAAG").unwrap();
        let f2 = Feedback::from_code("gyaag").unwrap();
        let f3 = Feedback::from_code("🟩🟨⬜⬜🟩").unwrap();

        assert_eq!(f1, f2);
        assert_eq!(f1, f3);
        assert_eq!(f1, Feedback::new([Green, Yellow, Grey, Grey, Green]));
    }

    #[test]
    fn feedback_from_code_invalid() {
        assert!(Feedback::from_code("GYAAGG").is_none());
        assert!(Feedback::from_code("GYA").is_none());
        assert!(Feedback::from_code("GXAAG").is_none());
        assert!(Feedback::from_code("").is_none());
        assert!("GY-AG".parse::<Feedback>().is_err());
    }

    #[test]
    fn feedback_code_round_trip() {
        let feedback = mark("CRANE", "SNAKE");
        let code = feedback.to_string();
        assert_eq!(code, "AAGYG");
        assert_eq!(code.parse::<Feedback>().unwrap(), feedback);
    }

    #[test]
    fn feedback_to_emoji() {
        let feedback = Feedback::new([Green, Yellow, Grey, Grey, Green]);
        assert_eq!(feedback.to_emoji(), "🟩🟨⬜⬜🟩");
    }
}
