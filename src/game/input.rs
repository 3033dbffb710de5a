//! Keystroke buffer for the guess being typed

/// Letters typed so far for the next guess
///
/// Accepts alphabetic characters only, lowercased, up to `limit` letters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessBuffer {
    text: String,
    limit: usize,
}

impl GuessBuffer {
    #[must_use]
    pub const fn new(limit: usize) -> Self {
        Self {
            text: String::new(),
            limit,
        }
    }

    /// Append a typed character
    ///
    /// Returns `false` if the character was ignored (not alphabetic, or its
    /// lowercase form does not fit in the buffer).
    pub fn push(&mut self, c: char) -> bool {
        if !c.is_alphabetic() {
            return false;
        }
        // Some letters lowercase to more than one char
        let lower: Vec<char> = c.to_lowercase().collect();
        if self.len() + lower.len() > self.limit {
            return false;
        }
        self.text.extend(lower);
        true
    }

    /// Remove the last character, if any
    pub fn backspace(&mut self) -> Option<char> {
        self.text.pop()
    }

    /// Take the buffered guess, leaving the buffer empty
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.text)
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Change the letter limit to match a newly chosen secret
    pub fn set_limit(&mut self, limit: usize) {
        self.limit = limit;
        if let Some((idx, _)) = self.text.char_indices().nth(limit) {
            self.text.truncate(idx);
        }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.len() >= self.limit
    }

    #[inline]
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }
}
