//! Core domain types for the game
//!
//! Pure feedback evaluation with no I/O and no external dependencies.

mod feedback;

pub use feedback::{Evaluation, Feedback};
