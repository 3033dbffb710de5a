//! Word lists for the game
//!
//! The default dictionary is embedded in the binary; custom lists are loaded
//! through [`WordStore::load`].

mod embedded;
pub mod store;

pub use embedded::{WORDS, WORDS_COUNT};
pub use store::WordStore;
