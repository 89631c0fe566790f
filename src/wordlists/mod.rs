//! Word lists for the game
//!
//! Provides the embedded word list compiled into the binary, file loading
//! for custom lists, and the dictionary used to validate guesses.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::Dictionary;
pub use embedded::{WORDS, WORDS_COUNT};

/// Dictionary built from the embedded list
#[must_use]
pub fn embedded_dictionary() -> Dictionary {
    Dictionary::new(loader::words_from_slice(WORDS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_valid() {
        for &word in WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn embedded_dictionary_keeps_every_word() {
        let dictionary = embedded_dictionary();
        assert_eq!(dictionary.len(), WORDS_COUNT);
        assert!(dictionary.contains("apple"));
        assert!(dictionary.contains("alloy"));
    }
}
