//! Opening word ranking
//!
//! Scores every legal guess against the whole solution list with the brute
//! scoring formula.

use crate::core::Word;
use crate::solver::ScoringWeights;
use crate::solver::brute::rank_guesses;
use crate::wordlists::WordLists;

/// A ranked opening word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenerScore {
    pub word: String,
    pub score: i64,
}

/// Result of ranking opening words
pub struct OpenerRanking {
    pub total_guesses: usize,
    pub total_solutions: usize,
    pub top: Vec<OpenerScore>,
}

/// Rank opening words, best first
///
/// Guesses come from the guess list, or from the solution list when the
/// guess list is empty.
///
/// # Errors
///
/// Returns an error if the solution list is empty.
pub fn rank_openers(
    lists: &WordLists,
    weights: ScoringWeights,
    top: usize,
) -> Result<OpenerRanking, String> {
    if lists.solutions.is_empty() {
        return Err("No solutions to score openers against".to_string());
    }

    let guesses: &[Word] = if lists.guesses.is_empty() {
        &lists.solutions
    } else {
        &lists.guesses
    };
    let solutions: Vec<&Word> = lists.solutions.iter().collect();

    let ranked = rank_guesses(guesses, &solutions, weights);

    Ok(OpenerRanking {
        total_guesses: guesses.len(),
        total_solutions: solutions.len(),
        top: ranked
            .into_iter()
            .take(top)
            .map(|(word, score)| OpenerScore {
                word: word.text().to_string(),
                score,
            })
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn setup_lists(guesses: &[&str]) -> WordLists {
        WordLists::new(
            words_from_slice(&["CRATE", "GRATE", "IRATE"]),
            words_from_slice(guesses),
        )
    }

    #[test]
    fn ranks_best_opener_first() {
        let lists = setup_lists(&["ZZZZZ", "SLATE", "CRATE"]);

        let ranking = rank_openers(&lists, ScoringWeights::default(), 10).unwrap();

        assert_eq!(ranking.total_guesses, 3);
        assert_eq!(ranking.total_solutions, 3);
        assert_eq!(ranking.top[0].word, "CRATE");
        assert_eq!(ranking.top[0].score, 364);
        assert_eq!(ranking.top[1].word, "SLATE");
        assert_eq!(ranking.top[2].score, 0);
    }

    #[test]
    fn top_truncates() {
        let lists = setup_lists(&["ZZZZZ", "SLATE", "CRATE"]);
        let ranking = rank_openers(&lists, ScoringWeights::default(), 1).unwrap();
        assert_eq!(ranking.top.len(), 1);
    }

    #[test]
    fn falls_back_to_solutions_without_guess_list() {
        let lists = setup_lists(&[]);
        let ranking = rank_openers(&lists, ScoringWeights::default(), 5).unwrap();

        assert_eq!(ranking.total_guesses, 3);
        assert_eq!(ranking.top.len(), 3);
    }

    #[test]
    fn empty_solutions_is_an_error() {
        let lists = WordLists::default();
        assert!(rank_openers(&lists, ScoringWeights::default(), 5).is_err());
    }
}
