//! Runtime configuration
//!
//! Built from the command line in `main.rs`; holds everything needed to
//! construct a word store, the session rules and the random source.

use crate::game::Rules;
use crate::wordlists::WordStore;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

/// Where the dictionary comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordlistSource {
    /// Word list compiled into the binary
    Embedded,
    /// Whitespace-delimited text file
    File(PathBuf),
}

impl WordlistSource {
    /// Parse the `--wordlist` argument: `embedded` or a file path
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        match arg {
            "embedded" | "default" => Self::Embedded,
            path => Self::File(PathBuf::from(path)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GameConfig {
    pub wordlist: WordlistSource,
    pub rules: Rules,
    /// Fixed seed for a reproducible secret; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            wordlist: WordlistSource::Embedded,
            rules: Rules::default(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Load the configured word store
    ///
    /// A file that cannot be read produces an empty store.
    #[must_use]
    pub fn load_store(&self) -> WordStore {
        let store = match &self.wordlist {
            WordlistSource::Embedded => WordStore::embedded(),
            WordlistSource::File(path) => WordStore::load(path),
        };
        info!("word list ready: {} words", store.len());
        store
    }

    /// Random source for secret selection
    #[must_use]
    pub fn rng(&self) -> StdRng {
        self.seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
    }
}
