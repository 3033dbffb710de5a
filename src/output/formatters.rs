//! Formatting utilities for terminal output

use crate::core::{Evaluation, Feedback};
use crate::game::GuessEntry;
use colored::{ColoredString, Colorize};

/// Render one guessed letter as a colored cell
#[must_use]
pub fn letter_cell(letter: char, feedback: Feedback) -> ColoredString {
    let cell = format!(" {} ", letter.to_uppercase());
    match feedback {
        Feedback::Exact => cell.black().on_green().bold(),
        Feedback::Present => cell.black().on_yellow().bold(),
        Feedback::Absent => cell.white().on_bright_black(),
    }
}

/// Render a whole guess as a row of colored cells
#[must_use]
pub fn colored_row(entry: &GuessEntry) -> String {
    entry
        .word
        .chars()
        .zip(entry.evaluation.symbols())
        .map(|(letter, &feedback)| letter_cell(letter, feedback).to_string())
        .collect()
}

/// Format an evaluation as emoji string
#[must_use]
pub fn evaluation_to_emoji(evaluation: &Evaluation) -> String {
    evaluation.to_emoji()
}

/// Plain-text feedback code: G for exact, Y for present, - for absent
#[must_use]
pub fn evaluation_to_code(evaluation: &Evaluation) -> String {
    evaluation
        .symbols()
        .iter()
        .map(|f| match f {
            Feedback::Exact => 'G',
            Feedback::Present => 'Y',
            Feedback::Absent => '-',
        })
        .collect()
}
