//! Terminal output formatting
//!
//! Display utilities for the line-oriented mode.

pub mod display;
pub mod formatters;

pub use display::{print_game_summary, print_last_guess, print_rejection};
