//! Simple line-oriented mode
//!
//! Text-based game loop without the TUI. Reads one guess or command per line.

use crate::game::{Session, SessionState};
use crate::output::{print_game_summary, print_last_guess, print_rejection};
use anyhow::{Context, Result};
use log::debug;
use rand::Rng;
use std::io::{BufRead, Write};

/// Run the simple interactive mode until the player quits or input ends
///
/// # Errors
///
/// Returns an error on I/O failure or if a new game cannot be started.
pub fn run_simple<R, W, G>(
    session: &mut Session,
    rng: &mut G,
    mut input: R,
    mut out: W,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    writeln!(out, "\n╔════════════════════════════════════════════╗")?;
    writeln!(out, "║            Wordle - Simple Mode            ║")?;
    writeln!(out, "╚════════════════════════════════════════════╝\n")?;
    writeln!(
        out,
        "Guess the {}-letter word. Commands: 'answer', 'new', 'quit'\n",
        session.word_len()
    )?;

    loop {
        write!(out, "{}> ", turn_label(session))?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line).context("failed to read input")? == 0 {
            writeln!(out)?;
            return Ok(());
        }
        let line = line.trim();

        match line {
            "" => {}
            "quit" | "q" | "exit" => {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            "answer" | "?" => {
                writeln!(out, "The answer is {}", session.secret().to_uppercase())?;
            }
            "new" | "n" => {
                session.restart(rng).context("cannot start a new game")?;
                writeln!(out, "\n🔄 New game started!\n")?;
            }
            _ if session.is_over() => {
                writeln!(out, "Type 'new' to play again or 'quit' to exit.")?;
            }
            guess => {
                debug!("guess submitted: {guess}");
                match session.submit(guess).map(|_| ()) {
                    Ok(()) => print_last_guess(&mut out, session)?,
                    Err(e) => print_rejection(&mut out, &e)?,
                }

                if session.is_over() {
                    print_game_summary(&mut out, session)?;
                    writeln!(out, "Type 'new' to play again or 'quit' to exit.\n")?;
                }
            }
        }
    }
}

fn turn_label(session: &Session) -> String {
    match session.state() {
        SessionState::InProgress => match session.remaining_attempts() {
            Some(left) => format!("Turn {} ({left} left) ", session.attempts() + 1),
            None => format!("Turn {} ", session.attempts() + 1),
        },
        SessionState::Won | SessionState::Lost => "Game over ".to_string(),
    }
}
