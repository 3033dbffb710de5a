//! TUI application state and logic

use crate::game::{GuessBuffer, Session, SessionState};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{debug, info, warn};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use rustc_hash::FxHashMap;
use std::io;

/// Maximum number of messages kept in the log panel
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<'a> {
    pub session: Session<'a>,
    pub rng: StdRng,
    pub buffer: GuessBuffer,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Typing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Winning attempt count -> number of games
    pub guess_distribution: FxHashMap<usize, usize>,
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(session: Session<'a>, rng: StdRng) -> Self {
        let buffer = GuessBuffer::new(session.word_len());
        let mut app = Self {
            session,
            rng,
            buffer,
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Typing,
        };
        app.add_message(
            &format!(
                "Welcome! Guess the {}-letter word.",
                app.session.word_len()
            ),
            MessageStyle::Info,
        );
        app.add_message(
            "Type letters, Enter to submit, Tab to show the answer.",
            MessageStyle::Info,
        );
        app
    }

    /// Dispatch a single key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match (key.code, self.input_mode) {
            (KeyCode::Char('c'), _) if ctrl => self.should_quit = true,
            (KeyCode::Esc, _) => self.should_quit = true,
            (KeyCode::Char('n'), _) if ctrl => self.new_game(),
            (KeyCode::Tab, _) => self.show_answer(),
            (KeyCode::Char('q'), InputMode::GameOver) => self.should_quit = true,
            (KeyCode::Char('n'), InputMode::GameOver) => self.new_game(),
            (KeyCode::Char(c), InputMode::Typing) if !ctrl => {
                self.buffer.push(c);
            }
            (KeyCode::Backspace, InputMode::Typing) => {
                self.buffer.backspace();
            }
            (KeyCode::Enter, InputMode::Typing) => self.submit_guess(),
            _ => {}
        }
    }

    /// Submit the buffered guess
    ///
    /// A rejected guess stays in the buffer so it can be corrected.
    pub fn submit_guess(&mut self) {
        let guess = self.buffer.as_str().to_string();
        let result = self.session.submit(&guess).map(|_| ());

        match result {
            Ok(()) => {
                self.buffer.clear();
                match self.session.state() {
                    SessionState::Won => self.finish_game(true),
                    SessionState::Lost => self.finish_game(false),
                    SessionState::InProgress => {}
                }
            }
            Err(e) => {
                debug!("rejected guess '{guess}': {e}");
                self.add_message(&format!("Invalid word! {e}"), MessageStyle::Error);
            }
        }
    }

    fn finish_game(&mut self, won: bool) {
        let attempts = self.session.attempts();
        self.stats.total_games += 1;
        self.input_mode = InputMode::GameOver;

        if won {
            self.stats.games_won += 1;
            *self.stats.guess_distribution.entry(attempts).or_insert(0) += 1;

            let celebration = match attempts {
                1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                3 => "✨ SPLENDID! Three guesses! ✨",
                4 => "👏 GREAT JOB! Four guesses! 👏",
                5 => "🎉 NICE WORK! Five guesses! 🎉",
                6 => "😅 PHEW! Got it in six! 😅",
                _ => "🎊 SOLVED! 🎊",
            };
            self.add_message(celebration, MessageStyle::Success);
        } else {
            self.add_message(
                &format!(
                    "Out of attempts! The word was {}",
                    self.session.secret().to_uppercase()
                ),
                MessageStyle::Error,
            );
        }
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    pub fn show_answer(&mut self) {
        let answer = format!("Answer: {}", self.session.secret().to_uppercase());
        self.add_message(&answer, MessageStyle::Info);
    }

    pub fn new_game(&mut self) {
        // An abandoned game with guesses still counts as played
        let abandoned = self.input_mode == InputMode::Typing && self.session.attempts() > 0;

        if let Err(e) = self.session.restart(&mut self.rng) {
            warn!("new game failed: {e}");
            self.add_message(&e.to_string(), MessageStyle::Error);
            return;
        }

        if abandoned {
            self.stats.total_games += 1;
        }

        info!("new game started");
        self.buffer.clear();
        self.buffer.set_limit(self.session.word_len());
        self.input_mode = InputMode::Typing;
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Rules;
    use crate::wordlists::WordStore;
    use rand::SeedableRng;

    fn app(store: &WordStore, rules: Rules) -> App<'_> {
        let session = Session::with_secret(store, rules, "crane");
        App::new(session, StdRng::seed_from_u64(11))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    fn store() -> WordStore {
        WordStore::from_words(["crane", "trace", "slate", "irate"])
    }

    #[test]
    fn typing_fills_buffer_up_to_word_length() {
        let store = store();
        let mut app = app(&store, Rules::default());

        for c in "TRACES".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.buffer.as_str(), "trace");

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.buffer.as_str(), "trac");
    }

    #[test]
    fn valid_guess_is_recorded_and_buffer_cleared() {
        let store = store();
        let mut app = app(&store, Rules::default());

        type_word(&mut app, "trace");

        assert_eq!(app.session.attempts(), 1);
        assert!(app.buffer.is_empty());
        assert_eq!(app.input_mode, InputMode::Typing);
    }

    #[test]
    fn invalid_guess_keeps_buffer_and_reports_error() {
        let store = store();
        let mut app = app(&store, Rules::default());

        type_word(&mut app, "zzzzz");

        assert_eq!(app.session.attempts(), 0);
        assert_eq!(app.buffer.as_str(), "zzzzz");
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert!(last.text.starts_with("Invalid word!"));
    }

    #[test]
    fn short_guess_is_rejected() {
        let store = store();
        let mut app = app(&store, Rules::default());

        type_word(&mut app, "cra");
        assert_eq!(app.session.attempts(), 0);
    }

    #[test]
    fn win_switches_to_game_over_and_updates_stats() {
        let store = store();
        let mut app = app(&store, Rules::default());

        type_word(&mut app, "slate");
        type_word(&mut app, "crane");

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution.get(&2), Some(&1));

        // Letters no longer reach the buffer
        press(&mut app, KeyCode::Char('a'));
        assert!(app.buffer.is_empty());
    }

    #[test]
    fn loss_counts_game_without_win() {
        let store = store();
        let mut app = app(&store, Rules::with_max_attempts(1));

        type_word(&mut app, "slate");

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
        assert!(app.messages.iter().any(|m| m.text.contains("CRANE")));
    }

    #[test]
    fn n_after_game_over_starts_new_game() {
        let store = store();
        let mut app = app(&store, Rules::default());
        type_word(&mut app, "crane");

        press(&mut app, KeyCode::Char('n'));

        assert_eq!(app.input_mode, InputMode::Typing);
        assert_eq!(app.session.attempts(), 0);
        assert!(store.contains(app.session.secret()));
    }

    #[test]
    fn ctrl_n_abandons_game_in_progress() {
        let store = store();
        let mut app = app(&store, Rules::default());
        type_word(&mut app, "slate");

        app.handle_key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL));

        assert_eq!(app.session.attempts(), 0);
        assert_eq!(app.stats.total_games, 1);
        assert!(app.buffer.is_empty());
    }

    #[test]
    fn tab_reveals_answer() {
        let store = store();
        let mut app = app(&store, Rules::default());

        press(&mut app, KeyCode::Tab);

        assert_eq!(app.messages.last().unwrap().text, "Answer: CRANE");
        assert_eq!(app.session.attempts(), 0);
    }

    #[test]
    fn quit_keys() {
        let store = store();
        let mut app = app(&store, Rules::default());
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit, "'q' is a letter while typing");

        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn ctrl_c_quits_while_typing() {
        let store = store();
        let mut app = app(&store, Rules::default());

        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));

        assert!(app.should_quit);
        assert!(app.buffer.is_empty(), "Ctrl-C must not type a letter");
    }

    #[test]
    fn q_quits_after_game_over() {
        let store = store();
        let mut app = app(&store, Rules::default());
        type_word(&mut app, "crane");
        assert_eq!(app.input_mode, InputMode::GameOver);

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn new_game_buffer_follows_secret_length() {
        let store = WordStore::from_words(["crane", "cat"]);
        let session = Session::with_secret(&store, Rules::default(), "crane");
        let mut app = App::new(session, StdRng::seed_from_u64(11));
        "cra".chars().for_each(|c| press(&mut app, KeyCode::Char(c)));

        app.new_game();

        assert!(app.buffer.is_empty());
        assert_eq!(app.buffer.limit(), app.session.word_len());
    }

    #[test]
    fn message_log_is_bounded() {
        let store = store();
        let mut app = app(&store, Rules::default());
        for i in 0..20 {
            app.add_message(&format!("msg {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), MAX_MESSAGES);
        assert_eq!(app.messages.last().unwrap().text, "msg 19");
    }
}
