//! Scoring weights and deterministic winner selection
//!
//! The weights control how heavily a confirmed position is valued against a
//! letter known to be present somewhere else.

/// Points for a letter matched in its exact position
pub const EXACT_MATCH_POINTS: i64 = 28;

/// Points for a letter known present but in an unconfirmed position
pub const ANAGRAM_MATCH_POINTS: i64 = 10;

/// Tunable weights shared by the frequency and brute scoring strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringWeights {
    /// Weight of positional information
    pub exact: i64,
    /// Weight of existential information
    pub anagram: i64,
}

impl ScoringWeights {
    #[must_use]
    pub const fn new(exact: i64, anagram: i64) -> Self {
        Self { exact, anagram }
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self::new(EXACT_MATCH_POINTS, ANAGRAM_MATCH_POINTS)
    }
}

/// Pick the first item with the highest score
///
/// Later items only win with a strictly greater score, so ties resolve to
/// iteration order.
pub fn first_max<T, S: PartialOrd>(scored: impl IntoIterator<Item = (T, S)>) -> Option<(T, S)> {
    let mut best: Option<(T, S)> = None;
    for (item, score) in scored {
        if best.as_ref().is_none_or(|(_, top)| score > *top) {
            best = Some((item, score));
        }
    }
    best
}

/// Pick the first item with the lowest score
pub fn first_min<T, S: PartialOrd>(scored: impl IntoIterator<Item = (T, S)>) -> Option<(T, S)> {
    let mut best: Option<(T, S)> = None;
    for (item, score) in scored {
        if best.as_ref().is_none_or(|(_, low)| score < *low) {
            best = Some((item, score));
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights() {
        let weights = ScoringWeights::default();
        assert_eq!(weights.exact, 28);
        assert_eq!(weights.anagram, 10);
    }

    #[test]
    fn first_max_prefers_earliest_tie() {
        let scored = vec![("a", 1), ("b", 3), ("c", 3), ("d", 2)];
        assert_eq!(first_max(scored), Some(("b", 3)));
    }

    #[test]
    fn first_min_prefers_earliest_tie() {
        let scored = vec![("a", 4), ("b", 1), ("c", 1), ("d", 2)];
        assert_eq!(first_min(scored), Some(("b", 1)));
    }

    #[test]
    fn empty_input_has_no_winner() {
        let empty: Vec<(&str, i64)> = Vec::new();
        assert_eq!(first_max(empty.clone()), None);
        assert_eq!(first_min(empty), None);
    }
}
