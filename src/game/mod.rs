//! Game state
//!
//! An explicit [`Session`] replaces any process-wide game object; front ends
//! own one and pass it by reference.

pub mod input;
pub mod session;

pub use input::GuessBuffer;
pub use session::{
    DEFAULT_MAX_ATTEMPTS, GameError, GuessEntry, GuessError, Rules, Session, SessionState,
};
