//! Game session: secret word, guess record and terminal state
//!
//! A session borrows the word store it was started from. Rejected guesses
//! never touch the session; only accepted guesses append to the record.

use crate::core::Evaluation;
use crate::wordlists::WordStore;
use log::{debug, info};
use rand::Rng;
use thiserror::Error;

/// Number of attempts allowed by default
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// Limits applied to a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    /// `None` allows unlimited attempts
    pub max_attempts: Option<usize>,
}

impl Rules {
    #[must_use]
    pub const fn unlimited() -> Self {
        Self { max_attempts: None }
    }

    /// Rules with an attempt cap; `0` means unlimited
    #[must_use]
    pub const fn with_max_attempts(max_attempts: usize) -> Self {
        if max_attempts == 0 {
            Self::unlimited()
        } else {
            Self {
                max_attempts: Some(max_attempts),
            }
        }
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::with_max_attempts(DEFAULT_MAX_ATTEMPTS)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    InProgress,
    Won,
    Lost,
}

/// One accepted attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessEntry {
    pub word: String,
    pub evaluation: Evaluation,
}

/// Why a guess was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("the game is over")]
    GameOver,
    #[error("guess must be {expected} letters, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("'{0}' is not in the word list")]
    NotInWordList(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("the word list is empty; cannot choose a secret word")]
    EmptyWordList,
}

/// A single game against one secret word
#[derive(Debug, Clone)]
pub struct Session<'a> {
    store: &'a WordStore,
    rules: Rules,
    secret: String,
    secret_len: usize,
    record: Vec<GuessEntry>,
    state: SessionState,
}

impl<'a> Session<'a> {
    /// Start a session with a secret chosen uniformly from `store`
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyWordList` if the store has no words.
    pub fn start<R: Rng + ?Sized>(
        store: &'a WordStore,
        rules: Rules,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let secret = store.pick_random(rng).ok_or(GameError::EmptyWordList)?;
        Ok(Self::with_secret(store, rules, secret))
    }

    /// Start a session with a known secret
    ///
    /// The secret does not have to be in `store`.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::game::{Rules, Session, SessionState};
    /// use wordle_game::wordlists::WordStore;
    ///
    /// let store = WordStore::from_words(["crane", "trace"]);
    /// let mut session = Session::with_secret(&store, Rules::default(), "crane");
    ///
    /// session.submit("trace").unwrap();
    /// assert!(session.submit("tracy").is_err());
    /// assert_eq!(session.attempts(), 1);
    ///
    /// session.submit("crane").unwrap();
    /// assert_eq!(session.state(), SessionState::Won);
    /// ```
    #[must_use]
    pub fn with_secret(store: &'a WordStore, rules: Rules, secret: impl Into<String>) -> Self {
        let secret = secret.into();
        debug!("new session, secret has {} letters", secret.chars().count());
        Self {
            store,
            rules,
            secret_len: secret.chars().count(),
            secret,
            record: Vec::new(),
            state: SessionState::InProgress,
        }
    }

    /// Submit a guess
    ///
    /// # Errors
    ///
    /// Returns a `GuessError` if the game is over, the guess length differs
    /// from the secret, or the guess is not in the word list. The session is
    /// left untouched in every error case.
    pub fn submit(&mut self, guess: &str) -> Result<&GuessEntry, GuessError> {
        if self.state != SessionState::InProgress {
            return Err(GuessError::GameOver);
        }

        let actual = guess.chars().count();
        if actual != self.secret_len {
            return Err(GuessError::LengthMismatch {
                expected: self.secret_len,
                actual,
            });
        }

        if !self.store.contains(guess) {
            return Err(GuessError::NotInWordList(guess.to_string()));
        }

        let evaluation = Evaluation::calculate_aligned(&self.secret, guess);

        let solved = evaluation.is_solved();
        self.record.push(GuessEntry {
            word: guess.to_string(),
            evaluation,
        });

        if solved {
            self.state = SessionState::Won;
            info!("solved in {} attempts", self.record.len());
        } else if self
            .rules
            .max_attempts
            .is_some_and(|max| self.record.len() >= max)
        {
            self.state = SessionState::Lost;
            info!("out of attempts after {}", self.record.len());
        }

        Ok(&self.record[self.record.len() - 1])
    }

    /// Abandon the current game and start over with a fresh secret
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyWordList` if the store has no words; the
    /// current game is kept in that case.
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        let store = self.store;
        let secret = store.pick_random(rng).ok_or(GameError::EmptyWordList)?;
        *self = Self::with_secret(store, self.rules, secret);
        Ok(())
    }

    /// The secret word
    #[inline]
    #[must_use]
    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// Length of the secret in letters
    #[inline]
    #[must_use]
    pub const fn word_len(&self) -> usize {
        self.secret_len
    }

    /// Accepted guesses in submission order
    #[inline]
    #[must_use]
    pub fn record(&self) -> &[GuessEntry] {
        &self.record
    }

    /// Number of accepted guesses
    #[inline]
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.record.len()
    }

    /// Attempts left before the game is lost, or `None` when unlimited
    #[must_use]
    pub fn remaining_attempts(&self) -> Option<usize> {
        self.rules
            .max_attempts
            .map(|max| max.saturating_sub(self.record.len()))
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[inline]
    #[must_use]
    pub const fn rules(&self) -> Rules {
        self.rules
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state != SessionState::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Feedback;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn store() -> WordStore {
        WordStore::from_words(["crane", "trace", "slate", "geese", "irate", "toolong"])
    }

    #[test]
    fn start_picks_secret_from_store() {
        let store = store();
        let mut rng = StdRng::seed_from_u64(1);
        let session = Session::start(&store, Rules::default(), &mut rng).unwrap();

        assert!(store.contains(session.secret()));
        assert_eq!(session.state(), SessionState::InProgress);
        assert_eq!(session.attempts(), 0);
    }

    #[test]
    fn start_on_empty_store_fails() {
        let store = WordStore::default();
        let mut rng = StdRng::seed_from_u64(1);

        let err = Session::start(&store, Rules::default(), &mut rng).unwrap_err();
        assert_eq!(err, GameError::EmptyWordList);
    }

    #[test]
    fn accepted_guess_is_recorded() {
        let store = store();
        let mut session = Session::with_secret(&store, Rules::default(), "crane");

        let entry = session.submit("trace").unwrap();
        assert_eq!(entry.word, "trace");
        assert_eq!(entry.evaluation.symbols()[0], Feedback::Absent);

        assert_eq!(session.attempts(), 1);
        assert_eq!(session.record()[0].evaluation.len(), session.word_len());
    }

    #[test]
    fn unknown_word_is_rejected_without_counting() {
        let store = store();
        let mut session = Session::with_secret(&store, Rules::default(), "crane");

        let err = session.submit("zzzzz").unwrap_err();
        assert_eq!(err, GuessError::NotInWordList("zzzzz".to_string()));
        assert_eq!(session.attempts(), 0);
        assert!(session.record().is_empty());
    }

    #[test]
    fn wrong_length_is_rejected_even_if_listed() {
        let store = store();
        let mut session = Session::with_secret(&store, Rules::default(), "crane");

        let err = session.submit("toolong").unwrap_err();
        assert_eq!(
            err,
            GuessError::LengthMismatch {
                expected: 5,
                actual: 7
            }
        );
        assert_eq!(session.attempts(), 0);
    }

    #[test]
    fn membership_is_case_sensitive() {
        let store = store();
        let mut session = Session::with_secret(&store, Rules::default(), "crane");

        assert!(matches!(
            session.submit("CRANE"),
            Err(GuessError::NotInWordList(_))
        ));
        assert_eq!(session.state(), SessionState::InProgress);
    }

    #[test]
    fn exact_guess_wins_and_ends_the_game() {
        let store = store();
        let mut session = Session::with_secret(&store, Rules::default(), "crane");

        session.submit("slate").unwrap();
        session.submit("crane").unwrap();

        assert_eq!(session.state(), SessionState::Won);
        assert!(session.is_over());
        assert_eq!(session.submit("trace").unwrap_err(), GuessError::GameOver);
        assert_eq!(session.attempts(), 2);
    }

    #[test]
    fn running_out_of_attempts_loses() {
        let store = store();
        let mut session = Session::with_secret(&store, Rules::with_max_attempts(2), "crane");

        session.submit("slate").unwrap();
        assert_eq!(session.remaining_attempts(), Some(1));
        session.submit("irate").unwrap();

        assert_eq!(session.state(), SessionState::Lost);
        assert_eq!(session.remaining_attempts(), Some(0));
        assert_eq!(session.submit("crane").unwrap_err(), GuessError::GameOver);
    }

    #[test]
    fn winning_on_last_attempt_is_a_win() {
        let store = store();
        let mut session = Session::with_secret(&store, Rules::with_max_attempts(1), "crane");

        session.submit("crane").unwrap();
        assert_eq!(session.state(), SessionState::Won);
    }

    #[test]
    fn unlimited_rules_never_lose() {
        let store = store();
        let mut session = Session::with_secret(&store, Rules::with_max_attempts(0), "crane");

        for _ in 0..20 {
            session.submit("slate").unwrap();
        }

        assert_eq!(session.state(), SessionState::InProgress);
        assert_eq!(session.remaining_attempts(), None);
        assert_eq!(session.attempts(), 20);
    }

    #[test]
    fn restart_clears_record() {
        let store = store();
        let mut rng = StdRng::seed_from_u64(3);
        let mut session = Session::with_secret(&store, Rules::default(), "crane");
        session.submit("crane").unwrap();

        session.restart(&mut rng).unwrap();

        assert_eq!(session.state(), SessionState::InProgress);
        assert!(session.record().is_empty());
        assert!(store.contains(session.secret()));
    }

    #[test]
    fn restart_on_empty_store_keeps_game() {
        let store = WordStore::default();
        let mut rng = StdRng::seed_from_u64(3);
        let mut session = Session::with_secret(&store, Rules::default(), "crane");

        assert_eq!(
            session.restart(&mut rng).unwrap_err(),
            GameError::EmptyWordList
        );
        assert_eq!(session.secret(), "crane");
    }
}
