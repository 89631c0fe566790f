//! Attempt state machine for one puzzle
//!
//! A session starts `InProgress` with no attempts. Each submission is
//! appended to the history; a submission equal to the secret moves the
//! session to `Solved`, and using the last of the `MAX_ATTEMPTS` without a
//! match moves it to `Exhausted`. Both are terminal and reject further
//! submissions.

use crate::core::{LetterEvaluator, LetterResult, ScoringRule, Word};
use crate::error::GameError;
use std::fmt;

/// Number of guesses a player gets per puzzle
pub const MAX_ATTEMPTS: usize = 6;

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    InProgress,
    Solved,
    Exhausted,
}

impl SessionState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InProgress => "in progress",
            Self::Solved => "solved",
            Self::Exhausted => "exhausted",
        })
    }
}

/// One game: a fixed secret plus the ordered attempts made against it
#[derive(Debug, Clone)]
pub struct GuessSession {
    secret: Word,
    attempts: Vec<Word>,
    evaluator: LetterEvaluator,
}

impl GuessSession {
    /// Start a session with the default scoring rule
    ///
    /// # Errors
    /// Returns `GameError` if `secret` is not a five-letter word.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::game::GuessSession;
    ///
    /// let mut session = GuessSession::new("apple").unwrap();
    /// assert!(session.can_attempt());
    ///
    /// session.submit_attempt("alloy").unwrap();
    /// session.submit_attempt("APPLE").unwrap();
    /// assert!(session.is_solved());
    /// assert_eq!(session.remaining_attempts(), 4);
    /// ```
    pub fn new(secret: impl AsRef<str>) -> Result<Self, GameError> {
        Self::with_rule(secret, ScoringRule::default())
    }

    /// Start a session scored with `rule`
    ///
    /// # Errors
    /// Returns `GameError` if `secret` is not a five-letter word.
    pub fn with_rule(secret: impl AsRef<str>, rule: ScoringRule) -> Result<Self, GameError> {
        Ok(Self::from_word(Word::new(secret)?, rule))
    }

    /// Start a session from an already validated secret
    #[must_use]
    pub const fn from_word(secret: Word, rule: ScoringRule) -> Self {
        Self {
            secret,
            attempts: Vec::new(),
            evaluator: LetterEvaluator::new(rule),
        }
    }

    /// Record a guess
    ///
    /// The session checks shape and state only; whether the word is in the
    /// dictionary is the caller's concern.
    ///
    /// # Errors
    /// - `GameError::InvalidState` if the session is already solved or exhausted
    /// - `GameError::InvalidLength` / `GameError::InvalidCharacters` if `word`
    ///   is not a five-letter word
    ///
    /// A failed submission leaves the session untouched.
    pub fn submit_attempt(&mut self, word: impl AsRef<str>) -> Result<(), GameError> {
        self.ensure_in_progress()?;
        let word = Word::new(word)?;
        self.attempts.push(word);
        Ok(())
    }

    /// Record an already validated guess
    ///
    /// # Errors
    /// Returns `GameError::InvalidState` if the session has ended.
    pub fn submit_word(&mut self, word: Word) -> Result<(), GameError> {
        self.ensure_in_progress()?;
        self.attempts.push(word);
        Ok(())
    }

    fn ensure_in_progress(&self) -> Result<(), GameError> {
        match self.state() {
            SessionState::InProgress => Ok(()),
            state => Err(GameError::InvalidState(state)),
        }
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        if self.is_solved() {
            SessionState::Solved
        } else if self.remaining_attempts() == 0 {
            SessionState::Exhausted
        } else {
            SessionState::InProgress
        }
    }

    /// True iff the most recent attempt equals the secret
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.attempts.last().is_some_and(|last| *last == self.secret)
    }

    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        MAX_ATTEMPTS.saturating_sub(self.attempts.len())
    }

    /// Whether another attempt may be submitted
    #[must_use]
    pub fn can_attempt(&self) -> bool {
        self.remaining_attempts() > 0 && !self.is_solved()
    }

    /// Score any word (submitted or hypothetical) against the secret
    ///
    /// # Errors
    /// Returns `GameError` if `word` is not a five-letter word.
    pub fn evaluate_attempt(&self, word: impl AsRef<str>) -> Result<Vec<LetterResult>, GameError> {
        let word = Word::new(word)?;
        Ok(self.evaluator.evaluate_words(&self.secret, &word))
    }

    /// Every attempt so far paired with its feedback, oldest first
    pub fn history(&self) -> impl Iterator<Item = (&Word, Vec<LetterResult>)> + '_ {
        self.attempts
            .iter()
            .map(|attempt| (attempt, self.evaluator.evaluate_words(&self.secret, attempt)))
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub fn attempts(&self) -> &[Word] {
        &self.attempts
    }

    #[must_use]
    pub const fn rule(&self) -> ScoringRule {
        self.evaluator.rule()
    }
}
