//! Interactive TUI front end

mod app;
mod rendering;

pub use app::{App, InputMode, Message, MessageStyle, Statistics, run_tui};
pub use rendering::{board_lines, ui};
