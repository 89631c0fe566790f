//! Per-letter feedback for a scored guess

use std::fmt;

/// Feedback class of a single guessed letter
///
/// Ordered from least to most informative so the best known state of a
/// letter across several guesses is simply the maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterState {
    /// Letter does not occur in the secret
    Absent,
    /// Letter occurs in the secret at another position
    Present,
    /// Letter matches the secret at this position
    Correct,
}

impl LetterState {
    /// Emoji square used in summaries
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// One evaluated character of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LetterResult {
    character: char,
    is_in_word: bool,
    is_in_position: bool,
}

impl LetterResult {
    /// A positional match always counts as a word match.
    #[must_use]
    pub(crate) const fn new(character: char, is_in_word: bool, is_in_position: bool) -> Self {
        Self {
            character,
            is_in_word: is_in_word || is_in_position,
            is_in_position,
        }
    }

    /// The guessed letter, uppercase
    #[inline]
    #[must_use]
    pub const fn character(self) -> char {
        self.character
    }

    /// Whether the secret contains this letter
    #[inline]
    #[must_use]
    pub const fn is_in_word(self) -> bool {
        self.is_in_word
    }

    /// Whether the secret has this letter at the same index
    #[inline]
    #[must_use]
    pub const fn is_in_position(self) -> bool {
        self.is_in_position
    }

    #[must_use]
    pub const fn state(self) -> LetterState {
        if self.is_in_position {
            LetterState::Correct
        } else if self.is_in_word {
            LetterState::Present
        } else {
            LetterState::Absent
        }
    }
}

impl fmt::Display for LetterResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{} in_word: {} in_position: {}]",
            self.character, self.is_in_word, self.is_in_position
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_match_implies_word_match() {
        let result = LetterResult::new('A', false, true);
        assert!(result.is_in_word());
        assert!(result.is_in_position());
        assert_eq!(result.state(), LetterState::Correct);
    }

    #[test]
    fn state_classification() {
        assert_eq!(LetterResult::new('B', true, false).state(), LetterState::Present);
        assert_eq!(LetterResult::new('C', false, false).state(), LetterState::Absent);
    }

    #[test]
    fn states_order_by_information() {
        assert!(LetterState::Correct > LetterState::Present);
        assert!(LetterState::Present > LetterState::Absent);
        assert_eq!(
            [LetterState::Present, LetterState::Absent, LetterState::Correct]
                .into_iter()
                .max(),
            Some(LetterState::Correct)
        );
    }

    #[test]
    fn display_shows_both_flags() {
        let result = LetterResult::new('L', true, false);
        assert_eq!(result.to_string(), "[L in_word: true in_position: false]");
    }
}
