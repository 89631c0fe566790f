//! Core domain types for Wordle
//!
//! Words, per-letter feedback and the scoring function. Everything here is
//! pure: no I/O, no logging, no global state.

mod evaluator;
mod letter;
mod word;

pub use evaluator::{LetterEvaluator, ScoringRule, evaluate};
pub use letter::{LetterResult, LetterState};
pub use word::Word;

/// Number of letters in every secret and guess
pub const WORD_LENGTH: usize = 5;
