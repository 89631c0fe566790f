//! Error types shared by the game core

use crate::game::SessionState;
use thiserror::Error;

/// Errors raised at the core boundary (word construction, scoring, sessions)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// A secret or guess does not have the required number of letters
    #[error("word must be exactly {expected} letters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// A secret or guess contains something other than ASCII letters
    #[error("word must contain only ASCII letters, got {0:?}")]
    InvalidCharacters(String),

    /// An attempt was submitted to a session that has already ended
    #[error("no further attempts allowed, session is {0}")]
    InvalidState(SessionState),
}
