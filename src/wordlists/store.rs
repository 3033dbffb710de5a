//! Word store: the loaded dictionary of valid and selectable words
//!
//! Words are kept exactly as they appear in the source. Membership is an
//! exact, case-sensitive match.

use log::{debug, warn};
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use std::fs;
use std::path::Path;

use super::WORDS;

/// Immutable dictionary loaded once at startup
#[derive(Debug, Clone, Default)]
pub struct WordStore {
    words: Vec<String>,
    index: FxHashSet<String>,
}

impl WordStore {
    /// Load a whitespace-delimited word list from a file
    ///
    /// An unreadable source yields an empty store; the failure is logged but
    /// not returned to the caller.
    ///
    /// # Examples
    /// ```no_run
    /// use wordle_game::wordlists::WordStore;
    ///
    /// let store = WordStore::load("data/words.txt");
    /// println!("Loaded {} words", store.len());
    /// ```
    #[must_use]
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(content) => {
                let store = Self::from_text(&content);
                debug!("loaded {} words from {}", store.len(), path.display());
                store
            }
            Err(e) => {
                warn!("could not read word list {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Build a store from in-memory text, splitting on any whitespace
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self::from_words(text.split_whitespace())
    }

    /// Build a store from individual words, preserving their order
    ///
    /// # Examples
    /// ```
    /// use wordle_game::wordlists::WordStore;
    ///
    /// let store = WordStore::from_words(["crane", "slate"]);
    /// assert!(store.contains("crane"));
    /// assert!(!store.contains("CRANE"));
    /// ```
    #[must_use]
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        let index = words.iter().cloned().collect();
        Self { words, index }
    }

    /// The dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(WORDS.iter().copied())
    }

    /// Exact, case-sensitive membership test
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(word)
    }

    /// Pick a word uniformly at random
    ///
    /// Returns `None` if the store is empty.
    pub fn pick_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        self.words.choose(rng).map(String::as_str)
    }

    /// All words in source order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
