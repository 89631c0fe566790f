//! Wordle Game
//!
//! Guess a secret five-letter word in six attempts. Every guess is scored
//! letter by letter: in the right position, elsewhere in the word, or absent.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::game::{GuessSession, SessionState};
//!
//! let mut session = GuessSession::new("apple").unwrap();
//!
//! session.submit_attempt("alloy").unwrap();
//! let feedback = session.evaluate_attempt("alloy").unwrap();
//! assert!(feedback[0].is_in_position()); // A
//! assert!(feedback[1].is_in_word()); // L
//!
//! session.submit_attempt("apple").unwrap();
//! assert_eq!(session.state(), SessionState::Solved);
//! ```

// Core domain types and scoring
pub mod core;

// Attempt state machine
pub mod game;

// Error types
pub mod error;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
