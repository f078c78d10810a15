//! The in-progress guess.

#[cfg(test)]
#[path = "guess_test.rs"]
mod guess_test;

use crate::consts::GUESS_LEN;

/// Letters typed for the current attempt, at most [`GUESS_LEN`] of them.
///
/// Letters are stored uppercase; the length never exceeds [`GUESS_LEN`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessBuffer {
    letters: String,
}

impl GuessBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a letter. Returns `false` (and leaves the buffer alone) when
    /// the buffer is full or `ch` is not an ASCII letter.
    pub fn push(&mut self, ch: char) -> bool {
        if self.is_full() || !ch.is_ascii_alphabetic() {
            return false;
        }
        self.letters.push(ch.to_ascii_uppercase());
        true
    }

    /// Remove and return the last letter, if any.
    pub fn pop(&mut self) -> Option<char> {
        self.letters.pop()
    }

    pub fn clear(&mut self) {
        self.letters.clear();
    }

    /// Letter at `index`, or `None` past the end.
    #[must_use]
    pub fn char_at(&self, index: usize) -> Option<char> {
        // ASCII only, so byte and char positions agree.
        self.letters.as_bytes().get(index).map(|b| char::from(*b))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.letters
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.letters.len() >= GUESS_LEN
    }
}
