//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::{WORD_LENGTH, Word};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from reading a word list
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("failed to read word list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("word list {0} contains no five-letter words")]
    Empty(PathBuf),
}

/// Load words from a file
///
/// Returns the valid Word instances in file order, skipping blank lines and
/// anything that is not a five-letter word.
///
/// # Errors
///
/// Returns `WordListError::Io` if the file cannot be read and
/// `WordListError::Empty` if no line holds a usable word.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let total = content.lines().filter(|line| !line.trim().is_empty()).count();
    let words: Vec<Word> = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect();

    if words.is_empty() {
        return Err(WordListError::Empty(path.to_path_buf()));
    }

    let skipped = total - words.len();
    if skipped > 0 {
        log::debug!("Skipped {skipped} unusable lines in {}", path.display());
    }
    log::info!("Loaded {} words from {}", words.len(), path.display());

    Ok(words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::words_from_slice;
/// use wordle_game::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Whether a trimmed line is a usable five-letter word
#[must_use]
pub fn is_five_letter_word(line: &str) -> bool {
    line.len() == WORD_LENGTH && line.chars().all(|c| c.is_ascii_alphabetic())
}
