//! Wordle word representation
//!
//! A Word is a validated, uppercase five-letter word. All case normalization
//! in the crate happens here, so every stored secret and attempt compares
//! byte-for-byte.

use super::WORD_LENGTH;
use crate::error::GameError;
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;
use std::str::FromStr;

/// A five-letter word with fast letter membership
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    letters: [u8; WORD_LENGTH],
    distinct: FxHashSet<u8>,
}

impl Word {
    /// Create a new Word, normalizing to uppercase
    ///
    /// # Errors
    /// Returns `GameError` if:
    /// - Length is not exactly five characters
    /// - Any character is not an ASCII letter
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, GameError> {
        let text = text.as_ref();

        let actual = text.chars().count();
        if actual != WORD_LENGTH {
            return Err(GameError::InvalidLength {
                expected: WORD_LENGTH,
                actual,
            });
        }

        if !text.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(GameError::InvalidCharacters(text.to_string()));
        }

        let text = text.to_ascii_uppercase();

        // ASCII only, so one byte per letter
        let mut letters = [0u8; WORD_LENGTH];
        for (slot, byte) in letters.iter_mut().zip(text.bytes()) {
            *slot = byte;
        }

        let distinct = letters.iter().copied().collect();

        Ok(Self {
            text,
            letters,
            distinct,
        })
    }

    /// Get the word as an uppercase string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as an uppercase byte array
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.letters
    }

    /// Check if the word contains a specific uppercase letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.distinct.contains(&letter)
    }

    /// Get the count of each letter in the word
    ///
    /// Used by frequency-aware scoring.
    #[inline]
    pub(crate) fn letter_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &letter in &self.letters {
            *counts.entry(letter).or_insert(0) += 1;
        }
        counts
    }
}

impl FromStr for Word {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
