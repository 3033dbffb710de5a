//! Display functions for game results

use super::formatters::{colored_row, evaluation_to_code, evaluation_to_emoji};
use crate::game::{GuessError, Session, SessionState};
use colored::Colorize;
use std::io::{self, Write};

/// Print the latest accepted guess
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_last_guess<W: Write>(out: &mut W, session: &Session) -> io::Result<()> {
    if let Some(entry) = session.record().last() {
        let evaluation = &entry.evaluation;
        writeln!(
            out,
            "  {}  {}  {}  ({} exact, {} present)",
            colored_row(entry),
            evaluation_to_emoji(evaluation),
            evaluation_to_code(evaluation),
            evaluation.count_exact(),
            evaluation.count_present()
        )?;
    }
    Ok(())
}

/// Print a rejected guess
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_rejection<W: Write>(out: &mut W, error: &GuessError) -> io::Result<()> {
    writeln!(out, "{}", format!("✗ {error}").red())
}

/// Print the end-of-game banner and guess history
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_game_summary<W: Write>(out: &mut W, session: &Session) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(50).bright_cyan())?;
    match session.state() {
        SessionState::Won => {
            let attempts = session.attempts();
            writeln!(
                out,
                "{}",
                format!(
                    "🎉 Solved in {attempts} {}!",
                    if attempts == 1 { "guess" } else { "guesses" }
                )
                .green()
                .bold()
            )?;
        }
        SessionState::Lost => {
            writeln!(
                out,
                "{} The word was {}",
                "❌ Out of attempts.".red().bold(),
                session.secret().to_uppercase().bright_yellow().bold()
            )?;
        }
        SessionState::InProgress => {
            writeln!(out, "Game abandoned after {} guesses", session.attempts())?;
        }
    }

    for (i, entry) in session.record().iter().enumerate() {
        writeln!(
            out,
            "  {}. {} {}",
            (i + 1).to_string().bright_black(),
            entry.word.to_uppercase(),
            evaluation_to_emoji(&entry.evaluation)
        )?;
    }
    writeln!(out, "{}", "═".repeat(50).bright_cyan())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Rules;
    use crate::wordlists::WordStore;

    fn render<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn summary_lists_every_guess() {
        let store = WordStore::from_words(["crane", "trace"]);
        let mut session = Session::with_secret(&store, Rules::default(), "crane");
        session.submit("trace").unwrap();
        session.submit("crane").unwrap();

        let text = render(|out| print_game_summary(out, &session));

        assert!(text.contains("Solved in 2 guesses"));
        assert!(text.contains("TRACE ⬜🟩🟩🟨🟩"));
        assert!(text.contains("CRANE 🟩🟩🟩🟩🟩"));
    }

    #[test]
    fn lost_summary_reveals_secret() {
        let store = WordStore::from_words(["crane", "trace"]);
        let mut session = Session::with_secret(&store, Rules::with_max_attempts(1), "crane");
        session.submit("trace").unwrap();

        let text = render(|out| print_game_summary(out, &session));

        assert!(text.contains("Out of attempts"));
        assert!(text.contains("CRANE"));
    }

    #[test]
    fn rejection_names_the_word() {
        let text = render(|out| {
            print_rejection(out, &GuessError::NotInWordList("zzzzz".to_string()))
        });
        assert!(text.contains("'zzzzz' is not in the word list"));
    }
}
