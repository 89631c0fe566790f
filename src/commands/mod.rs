//! Command implementations

pub mod convert;
pub mod play;
pub mod score;

pub use convert::convert_word_source;
pub use play::{GuessRejection, PlayConfig, choose_secret, play_game, run_play, validate_guess};
pub use score::{ScoreResult, score_word};
