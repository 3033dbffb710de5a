//! Wordle Game
//!
//! A single-player word-guessing game for the terminal, with a ratatui TUI and
//! a plain line-oriented mode.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{Evaluation, Feedback};
//! use wordle_game::game::{Rules, Session};
//! use wordle_game::wordlists::WordStore;
//!
//! let store = WordStore::from_text("crane trace slate");
//! let mut session = Session::with_secret(&store, Rules::default(), "crane");
//!
//! let entry = session.submit("trace").unwrap();
//! assert_eq!(entry.evaluation.symbols()[1], Feedback::Exact);
//! println!("{}", entry.evaluation.to_emoji());
//!
//! // Evaluation on its own
//! assert!(Evaluation::calculate("crane", "crane").unwrap().is_solved());
//! ```

// Core domain types
pub mod core;

// Session state and input buffering
pub mod game;

// Word lists
pub mod wordlists;

// Runtime configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
