//! Per-letter guess feedback
//!
//! Each position of a guess is classified against the secret word:
//! - Exact (letter in the correct position)
//! - Present (letter appears somewhere else in the secret)
//! - Absent (letter not in the secret)
//!
//! Duplicate letters are not budgeted: every guessed letter that occurs
//! anywhere in the secret is reported as present, however many times the
//! secret contains it.

use std::fmt;

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    Exact,
    Present,
    Absent,
}

impl Feedback {
    /// Single-cell emoji for the symbol
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Exact => "exact",
            Self::Present => "present",
            Self::Absent => "absent",
        };
        f.write_str(name)
    }
}

/// Feedback for a whole guess, one symbol per letter position
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Evaluation(Vec<Feedback>);

impl Evaluation {
    /// Evaluate `guess` against `secret`
    ///
    /// Returns `None` when the two words differ in length.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Evaluation, Feedback};
    ///
    /// let evaluation = Evaluation::calculate("crane", "trace").unwrap();
    /// assert_eq!(
    ///     evaluation.symbols(),
    ///     &[
    ///         Feedback::Absent,
    ///         Feedback::Exact,
    ///         Feedback::Exact,
    ///         Feedback::Present,
    ///         Feedback::Exact,
    ///     ]
    /// );
    ///
    /// assert!(Evaluation::calculate("crane", "cranes").is_none());
    /// ```
    #[must_use]
    pub fn calculate(secret: &str, guess: &str) -> Option<Self> {
        if secret.chars().count() != guess.chars().count() {
            return None;
        }
        Some(Self::calculate_aligned(secret, guess))
    }

    /// Evaluate two words the caller has already checked for equal length
    pub(crate) fn calculate_aligned(secret: &str, guess: &str) -> Self {
        let secret: Vec<char> = secret.chars().collect();

        let symbols = guess
            .chars()
            .zip(&secret)
            .map(|(g, &s)| {
                if g == s {
                    Feedback::Exact
                } else if secret.contains(&g) {
                    Feedback::Present
                } else {
                    Feedback::Absent
                }
            })
            .collect();

        Self(symbols)
    }

    /// The per-position symbols
    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[Feedback] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every position is an exact match
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&f| f == Feedback::Exact)
    }

    #[must_use]
    pub fn count_exact(&self) -> usize {
        self.count(Feedback::Exact)
    }

    #[must_use]
    pub fn count_present(&self) -> usize {
        self.count(Feedback::Present)
    }

    fn count(&self, wanted: Feedback) -> usize {
        self.0.iter().filter(|&&f| f == wanted).count()
    }

    /// Convert to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|f| f.emoji()).collect()
    }
}
