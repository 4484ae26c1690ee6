//! Computer player move selection
//!
//! Fetches a shuffled candidate pool for the required letter, drops
//! words already played, then picks per difficulty: easy takes a short
//! word, hard chases the highest score, medium picks at random.

use super::dictionary::Dictionary;
use super::{judge, Difficulty};
use rand::seq::IndexedRandom;
use rand::Rng;
use std::collections::HashSet;

/// Candidates fetched per selection attempt
pub const CANDIDATE_POOL: usize = 100;

/// Easy mode prefers words at most this long
const EASY_TARGET_LEN: usize = 5;

/// Pick a word starting with `letter` that has not been used yet.
/// Returns `None` when every candidate is exhausted, which the session
/// controller treats as a forced skip.
pub fn choose_move(
    dict: &Dictionary,
    letter: char,
    difficulty: Difficulty,
    used: &HashSet<String>,
) -> Option<String> {
    choose_move_with_rng(dict, letter, difficulty, used, &mut rand::rng())
}

/// [`choose_move`] with a caller-supplied RNG (for testing/seeding)
pub fn choose_move_with_rng<R: Rng + ?Sized>(
    dict: &Dictionary,
    letter: char,
    difficulty: Difficulty,
    used: &HashSet<String>,
    rng: &mut R,
) -> Option<String> {
    let pool = dict.words_starting_with_rng(letter, difficulty, CANDIDATE_POOL, rng);
    let candidates: Vec<String> = pool.into_iter().filter(|w| !used.contains(w)).collect();

    if candidates.is_empty() {
        return None;
    }

    let pick = match difficulty {
        Difficulty::Easy => candidates
            .iter()
            .find(|w| w.chars().count() <= EASY_TARGET_LEN)
            .unwrap_or(&candidates[0]),
        Difficulty::Hard => {
            // highest score wins, earlier post-shuffle position breaks ties
            let mut best = &candidates[0];
            let mut best_score = judge::word_score(best);
            for word in &candidates[1..] {
                let score = judge::word_score(word);
                if score > best_score {
                    best = word;
                    best_score = score;
                }
            }
            best
        }
        Difficulty::Medium => match candidates.choose(rng) {
            Some(word) => word,
            None => return None,
        },
    };

    Some(pick.clone())
}

/// Suggest an unused word for a human player: a uniformly random pick
/// from the candidate pool, whatever the difficulty
pub fn hint(
    dict: &Dictionary,
    letter: char,
    difficulty: Difficulty,
    used: &HashSet<String>,
) -> Option<String> {
    hint_with_rng(dict, letter, difficulty, used, &mut rand::rng())
}

/// [`hint`] with a caller-supplied RNG (for testing/seeding)
pub fn hint_with_rng<R: Rng + ?Sized>(
    dict: &Dictionary,
    letter: char,
    difficulty: Difficulty,
    used: &HashSet<String>,
    rng: &mut R,
) -> Option<String> {
    let pool = dict.words_starting_with_rng(letter, difficulty, CANDIDATE_POOL, rng);
    let unused: Vec<String> = pool.into_iter().filter(|w| !used.contains(w)).collect();
    unused.choose(rng).cloned()
}

/// Random opening letter for a computer player moving first
pub fn opening_letter<R: Rng + ?Sized>(rng: &mut R) -> char {
    rng.random_range(b'a'..=b'z') as char
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn used(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_easy_prefers_short_words() {
        let dict = Dictionary::from_text("cathedral\ncinema\ncat\n");
        let mut rng = StdRng::seed_from_u64(7);
        // "cathedral" is filtered by the easy policy; of the rest only
        // "cat" is within the easy target length
        for _ in 0..10 {
            let word =
                choose_move_with_rng(&dict, 'c', Difficulty::Easy, &used(&[]), &mut rng).unwrap();
            assert_eq!(word, "cat");
        }
    }

    #[test]
    fn test_easy_falls_back_to_first_candidate() {
        // nothing within the target length, so the first candidate wins
        let dict = Dictionary::from_text("cinemas\ncoastal\n");
        let mut rng = StdRng::seed_from_u64(7);
        let word = choose_move_with_rng(&dict, 'c', Difficulty::Easy, &used(&[]), &mut rng).unwrap();
        assert!(word == "cinemas" || word == "coastal");
    }

    #[test]
    fn test_hard_picks_highest_score() {
        // quartz scores far above the others and survives the hard filter
        let dict = Dictionary::from_text("quota\nquest\nquartz\n");
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10 {
            let word =
                choose_move_with_rng(&dict, 'q', Difficulty::Hard, &used(&[]), &mut rng).unwrap();
            assert_eq!(word, "quartz");
        }
    }

    #[test]
    fn test_medium_picks_any_candidate() {
        let dict = Dictionary::from_text("cat\ncab\ncar\n");
        let mut rng = StdRng::seed_from_u64(7);
        let word = choose_move_with_rng(&dict, 'c', Difficulty::Medium, &used(&[]), &mut rng).unwrap();
        assert!(["cat", "cab", "car"].contains(&word.as_str()));
    }

    #[test]
    fn test_used_words_are_excluded() {
        let dict = Dictionary::from_text("cat\ncab\n");
        let mut rng = StdRng::seed_from_u64(7);
        let word = choose_move_with_rng(&dict, 'c', Difficulty::Medium, &used(&["cat"]), &mut rng)
            .unwrap();
        assert_eq!(word, "cab");
    }

    #[test]
    fn test_exhausted_pool_returns_none() {
        let dict = Dictionary::from_text("cat\ncab\n");
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(
            choose_move_with_rng(&dict, 'c', Difficulty::Medium, &used(&["cat", "cab"]), &mut rng),
            None
        );
        // a letter with no bucket at all
        assert_eq!(
            choose_move_with_rng(&dict, 'z', Difficulty::Medium, &used(&[]), &mut rng),
            None
        );
    }

    #[test]
    fn test_hard_filter_can_exhaust_short_buckets() {
        // every word for 'c' is shorter than the hard policy allows
        let dict = Dictionary::from_text("cat\ncab\n");
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(
            choose_move_with_rng(&dict, 'c', Difficulty::Hard, &used(&[]), &mut rng),
            None
        );
    }

    #[test]
    fn test_hint_suggests_unused_word() {
        let dict = Dictionary::from_text("cat\ncab\n");
        let mut rng = StdRng::seed_from_u64(7);
        let word =
            hint_with_rng(&dict, 'c', Difficulty::Medium, &used(&["cat"]), &mut rng).unwrap();
        assert_eq!(word, "cab");
        assert_eq!(
            hint_with_rng(&dict, 'c', Difficulty::Medium, &used(&["cat", "cab"]), &mut rng),
            None
        );
    }

    #[test]
    fn test_hint_ignores_selection_strategy() {
        // unlike choose_move, a hard hint is any unused long word, not
        // necessarily the best-scoring one
        let dict = Dictionary::from_text("quota\nquartz\n");
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = HashSet::new();
        for _ in 0..50 {
            if let Some(word) = hint_with_rng(&dict, 'q', Difficulty::Hard, &used(&[]), &mut rng) {
                seen.insert(word);
            }
        }
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn test_opening_letter_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let letter = opening_letter(&mut rng);
            assert!(letter.is_ascii_lowercase());
        }
    }

    #[test]
    fn test_seeded_selection_is_deterministic() {
        let dict = Dictionary::from_text("cat\ncab\ncar\ncan\ncap\n");
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);
        let a = choose_move_with_rng(&dict, 'c', Difficulty::Medium, &used(&[]), &mut rng1);
        let b = choose_move_with_rng(&dict, 'c', Difficulty::Medium, &used(&[]), &mut rng2);
        assert_eq!(a, b);
    }
}
