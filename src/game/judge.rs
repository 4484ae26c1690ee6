#![allow(dead_code)]
//! Word adjudication for a chain turn
//!
//! Scores words and validates a candidate against:
//! - Dictionary membership
//! - Repetition within the game
//! - The head-to-tail linking rule

use super::dictionary::Dictionary;
use std::collections::HashSet;

/// Letters that earn a +2 scoring bonus per occurrence
const UNCOMMON_LETTERS: &str = "qxzjkwvyfbghmpuc";

/// Score for a word, independent of game context.
/// Base score is the length, plus 2 per uncommon letter occurrence,
/// plus 3 for length >= 7 or 1 for length >= 5.
pub fn word_score(word: &str) -> u32 {
    let clean = word.trim().to_lowercase();
    let len = clean.chars().count() as u32;

    let mut score = len;
    for c in clean.chars() {
        if UNCOMMON_LETTERS.contains(c) {
            score += 2;
        }
    }

    if len >= 7 {
        score += 3;
    } else if len >= 5 {
        score += 1;
    }

    score
}

/// Whether `current` may follow `previous` in the chain.
/// Always true when there is no previous word (first move).
pub fn links(previous: &str, current: &str) -> bool {
    let prev = previous.trim().to_lowercase();
    let curr = current.trim().to_lowercase();

    if prev.is_empty() || curr.is_empty() {
        return true;
    }

    prev.chars().last() == curr.chars().next()
}

/// Outcome of judging one candidate word, with a reason when rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Word accepted, worth this many points
    Accepted { score: u32 },
    /// Nothing was entered
    EmptyInput,
    /// Word not found in dictionary
    NotInDictionary,
    /// Word already appeared in this game
    AlreadyUsed,
    /// Word does not start with the previous word's last letter
    WrongStart { required: char },
}

impl Verdict {
    /// Returns true if the word was accepted
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted { .. })
    }

    /// Returns a user-friendly message
    pub fn message(&self) -> String {
        match self {
            Verdict::Accepted { .. } => "Valid word!".to_string(),
            Verdict::EmptyInput => "Please enter a word".to_string(),
            Verdict::NotInDictionary => "Not a valid word in the dictionary".to_string(),
            Verdict::AlreadyUsed => "Word already used in this game".to_string(),
            Verdict::WrongStart { required } => {
                format!("Word must start with '{}'", required)
            }
        }
    }
}

/// Judge a candidate word against the chain so far.
///
/// Checks short-circuit in order:
/// 1. Non-empty input
/// 2. Dictionary membership
/// 3. Not already used
/// 4. Links to the previous word
///
/// Only the first failing check is reported.
pub fn judge(dict: &Dictionary, word: &str, previous: &str, used: &HashSet<String>) -> Verdict {
    let clean = word.trim().to_lowercase();

    if clean.is_empty() {
        return Verdict::EmptyInput;
    }

    if !dict.contains(&clean) {
        return Verdict::NotInDictionary;
    }

    if used.contains(&clean) {
        return Verdict::AlreadyUsed;
    }

    if !links(previous, &clean) {
        let required = previous
            .trim()
            .to_lowercase()
            .chars()
            .last()
            .unwrap_or('?')
            .to_ascii_uppercase();
        return Verdict::WrongStart { required };
    }

    Verdict::Accepted {
        score: word_score(&clean),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_dict() -> Dictionary {
        Dictionary::from_text("cat\ndog\ntiger\nelephant\nzoo\ngame\nquiz\noak\n")
    }

    fn used(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_score_literals() {
        // length + 2 per uncommon letter + length tier
        assert_eq!(word_score("cat"), 5); // 3 + 2(c)
        assert_eq!(word_score("zoo"), 5); // 3 + 2(z)
        assert_eq!(word_score("dog"), 5); // 3 + 2(g)
        assert_eq!(word_score("tiger"), 8); // 5 + 2(g) + 1
        assert_eq!(word_score("elephant"), 15); // 8 + 2(p) + 2(h) + 3
        assert_eq!(word_score("quiz"), 10); // 4 + 2(q) + 2(u) + 2(z)
        assert_eq!(word_score("at"), 2); // no bonuses at all
    }

    #[test]
    fn test_score_counts_every_occurrence() {
        // both g's count, not just presence
        assert_eq!(word_score("gag"), 7); // 3 + 2 + 2
        assert_eq!(word_score("buzz"), 12); // 4 + 2(b) + 2(u) + 2(z) + 2(z)
    }

    #[test]
    fn test_score_is_at_least_length() {
        for word in ["at", "iron", "tiger", "elephant", "osteon"] {
            assert!(word_score(word) >= word.len() as u32);
        }
    }

    #[test]
    fn test_score_normalizes_input() {
        assert_eq!(word_score(" CAT "), word_score("cat"));
        assert_eq!(word_score(""), 0);
    }

    #[test]
    fn test_links() {
        assert!(links("", "anything"));
        assert!(links("cat", "tiger"));
        assert!(!links("cat", "dog"));
        assert!(links("CAT", "Tiger"));
        assert!(links("  cat  ", "tiger"));
    }

    #[test]
    fn test_judge_accepts_first_word() {
        let dict = test_dict();
        let verdict = judge(&dict, "cat", "", &used(&[]));
        assert_eq!(verdict, Verdict::Accepted { score: 5 });
        assert!(verdict.is_accepted());
    }

    #[test]
    fn test_judge_empty_input() {
        let dict = test_dict();
        assert_eq!(judge(&dict, "", "cat", &used(&[])), Verdict::EmptyInput);
        assert_eq!(judge(&dict, "   ", "cat", &used(&[])), Verdict::EmptyInput);
    }

    #[test]
    fn test_judge_not_in_dictionary() {
        let dict = test_dict();
        assert_eq!(
            judge(&dict, "xylophone", "", &used(&[])),
            Verdict::NotInDictionary
        );
    }

    #[test]
    fn test_judge_wrong_start_names_required_letter() {
        let dict = test_dict();
        let verdict = judge(&dict, "cat", "dog", &used(&[]));
        assert_eq!(verdict, Verdict::WrongStart { required: 'G' });
        assert_eq!(verdict.message(), "Word must start with 'G'");
    }

    #[test]
    fn test_judge_accepts_valid_connection() {
        let dict = test_dict();
        assert!(judge(&dict, "tiger", "cat", &used(&[])).is_accepted());
    }

    #[test]
    fn test_judge_already_used() {
        let dict = test_dict();
        assert_eq!(
            judge(&dict, "dog", "", &used(&["dog"])),
            Verdict::AlreadyUsed
        );
    }

    #[test]
    fn test_used_check_runs_before_connection_check() {
        // "dog" after "cat" fails both the repetition and the linking
        // rule; repetition must win
        let dict = test_dict();
        assert_eq!(
            judge(&dict, "dog", "cat", &used(&["dog"])),
            Verdict::AlreadyUsed
        );
    }

    #[test]
    fn test_dictionary_check_runs_before_used_check() {
        let dict = test_dict();
        assert_eq!(
            judge(&dict, "qqq", "cat", &used(&["qqq"])),
            Verdict::NotInDictionary
        );
    }

    #[test]
    fn test_judge_is_case_insensitive() {
        let dict = test_dict();
        assert!(judge(&dict, "TIGER", "caT", &used(&[])).is_accepted());
        assert_eq!(
            judge(&dict, "Dog", "", &used(&["dog"])),
            Verdict::AlreadyUsed
        );
    }

    #[test]
    fn test_verdict_messages() {
        assert_eq!(Verdict::EmptyInput.message(), "Please enter a word");
        assert_eq!(
            Verdict::NotInDictionary.message(),
            "Not a valid word in the dictionary"
        );
        assert_eq!(
            Verdict::AlreadyUsed.message(),
            "Word already used in this game"
        );
        assert_eq!(Verdict::Accepted { score: 5 }.message(), "Valid word!");
    }
}
