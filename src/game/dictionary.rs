#![allow(dead_code)]
//! Dictionary: the word corpus behind validation and the computer player
//!
//! Built once from a word source (one candidate word per line, optional
//! surrounding quotes). Keeps a membership set plus a first-letter index,
//! both filled in a single pass so the index is always a complete
//! partition of the set. A hardcoded fallback list takes over when the
//! source is unreachable or empty, so a playable dictionary always exists.

use super::Difficulty;
use once_cell::sync::OnceCell;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Embedded wordlist, one lowercase word per line
static WORDS_DATA: &str = include_str!("../../data/words.txt");

/// Environment variable naming an external wordlist file to load instead
/// of the bundled one
pub const WORDLIST_ENV: &str = "WORDCHAIN_WORDLIST";

/// Built-in list used when the word source cannot be loaded.
/// Small but spans varied lengths and first letters so a game stays playable.
const FALLBACK_WORDS: &[&str] = &[
    "apple", "elephant", "tiger", "rabbit", "turtle", "eagle", "lion", "notebook",
    "keyboard", "door", "river", "mountain", "ocean", "nature", "energy", "yellow",
    "window", "world", "dance", "earth", "house", "engine", "education", "network",
    "kind", "dream", "music", "crown", "night", "table", "young", "great",
    "tree", "example", "train", "novel", "light", "today", "year", "rainbow",
    "wonderful", "love", "evening", "game", "exciting", "garden", "nice", "tomorrow",
    "language", "never", "ready", "winter", "reading", "grape", "tennis", "sister",
    "rock", "knowledge", "excited", "dog", "gentle", "excellent", "trust", "time",
    "explore",
];

/// Errors from loading a word source. Never fatal: load substitutes the
/// fallback list and keeps the error as a warning.
#[derive(Debug)]
pub enum LoadError {
    /// The source could not be read
    Io(std::io::Error),
    /// The source was read but produced no usable words
    Empty,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "could not read word source: {}", e),
            LoadError::Empty => write!(f, "word source contained no usable words"),
        }
    }
}

impl std::error::Error for LoadError {}

impl From<std::io::Error> for LoadError {
    fn from(e: std::io::Error) -> Self {
        LoadError::Io(e)
    }
}

/// A provider of newline-delimited candidate words
pub trait WordSource {
    fn fetch(&self) -> Result<String, LoadError>;
}

/// The wordlist compiled into the binary
pub struct BundledSource;

impl WordSource for BundledSource {
    fn fetch(&self) -> Result<String, LoadError> {
        Ok(WORDS_DATA.to_string())
    }
}

/// A wordlist file on disk
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl WordSource for FileSource {
    fn fetch(&self) -> Result<String, LoadError> {
        Ok(fs::read_to_string(&self.path)?)
    }
}

/// The source the binary loads from: an external file when the
/// environment names one, otherwise the bundled list
pub fn default_source() -> Box<dyn WordSource> {
    match std::env::var_os(WORDLIST_ENV) {
        Some(path) => Box::new(FileSource::new(PathBuf::from(path))),
        None => Box::new(BundledSource),
    }
}

/// Immutable word corpus: membership set plus first-letter index
pub struct Dictionary {
    words: HashSet<String>,
    by_letter: HashMap<char, Vec<String>>,
    load_error: Option<LoadError>,
}

static GLOBAL: OnceCell<Dictionary> = OnceCell::new();

/// The process-wide dictionary, loaded once from the default source.
/// Repeated calls return the same completed value.
pub fn global() -> &'static Dictionary {
    GLOBAL.get_or_init(|| Dictionary::load(default_source().as_ref()))
}

impl Dictionary {
    /// Load a dictionary from a word source. Each line is trimmed, one
    /// pair of surrounding double quotes is stripped, the token is
    /// lowercased, and anything shorter than two characters is dropped.
    /// Load does not filter interior characters; strictness lives in
    /// [`Dictionary::contains`]. On fetch failure or an empty result the
    /// fallback list is substituted and the error kept as a warning.
    pub fn load(source: &dyn WordSource) -> Self {
        match source.fetch() {
            Ok(text) => {
                let dict = Self::from_text(&text);
                if dict.words.is_empty() {
                    let mut fallback = Self::fallback();
                    fallback.load_error = Some(LoadError::Empty);
                    fallback
                } else {
                    dict
                }
            }
            Err(e) => {
                let mut fallback = Self::fallback();
                fallback.load_error = Some(e);
                fallback
            }
        }
    }

    /// Parse newline-delimited words into a dictionary
    pub fn from_text(text: &str) -> Self {
        let mut dict = Self::empty();
        for line in text.lines() {
            let token = line.trim();
            let token = token.strip_prefix('"').unwrap_or(token);
            let token = token.strip_suffix('"').unwrap_or(token);
            let word = token.to_lowercase();
            if word.chars().count() >= 2 {
                dict.insert(word);
            }
        }
        dict
    }

    /// The hardcoded fallback dictionary
    pub fn fallback() -> Self {
        let mut dict = Self::empty();
        for word in FALLBACK_WORDS {
            dict.insert(word.to_lowercase());
        }
        dict
    }

    fn empty() -> Self {
        Self {
            words: HashSet::new(),
            by_letter: HashMap::new(),
            load_error: None,
        }
    }

    /// Insert into the set and the index together, so both stay in sync
    fn insert(&mut self, word: String) {
        if let Some(first) = word.chars().next() {
            if self.words.insert(word.clone()) {
                self.by_letter.entry(first).or_default().push(word);
            }
        }
    }

    /// The warning from load, if the fallback list was substituted
    pub fn load_error(&self) -> Option<&LoadError> {
        self.load_error.as_ref()
    }

    /// Strict membership check. The input is trimmed and lowercased;
    /// anything shorter than two characters or containing a character
    /// outside a-z is rejected outright. No partial matches.
    pub fn contains(&self, word: &str) -> bool {
        let clean = word.trim().to_lowercase();
        if clean.chars().count() < 2 {
            return false;
        }
        if !clean.chars().all(|c| c.is_ascii_lowercase()) {
            return false;
        }
        self.words.contains(&clean)
    }

    /// Words beginning with `letter`, filtered by difficulty, shuffled,
    /// capped at `limit`. Empty when no words exist for that letter.
    pub fn words_starting_with(&self, letter: char, difficulty: Difficulty, limit: usize) -> Vec<String> {
        self.words_starting_with_rng(letter, difficulty, limit, &mut rand::rng())
    }

    /// [`Dictionary::words_starting_with`] with a caller-supplied RNG
    /// (for testing/seeding)
    pub fn words_starting_with_rng<R: Rng + ?Sized>(
        &self,
        letter: char,
        difficulty: Difficulty,
        limit: usize,
        rng: &mut R,
    ) -> Vec<String> {
        let letter = letter.to_ascii_lowercase();
        let bucket = match self.by_letter.get(&letter) {
            Some(bucket) => bucket,
            None => return Vec::new(),
        };

        let mut filtered: Vec<String> = bucket
            .iter()
            .filter(|word| difficulty.admits(word))
            .cloned()
            .collect();

        filtered.shuffle(rng);
        filtered.truncate(limit);
        filtered
    }

    /// Whether any word starts with the given letter
    pub fn has_words_starting_with(&self, letter: char) -> bool {
        self.by_letter
            .get(&letter.to_ascii_lowercase())
            .is_some_and(|bucket| !bucket.is_empty())
    }

    /// Returns the total number of words in the dictionary
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    #[cfg(test)]
    fn words(&self) -> &HashSet<String> {
        &self.words
    }

    #[cfg(test)]
    fn by_letter(&self) -> &HashMap<char, Vec<String>> {
        &self.by_letter
    }
}
