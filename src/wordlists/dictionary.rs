//! Allowed-word set
//!
//! Answers "is this a real word?" before a guess reaches the session, and
//! picks the secret for a new game.

use crate::core::Word;
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;

/// The words a player may guess and the pool secrets are drawn from
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    lookup: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary, dropping duplicate entries but keeping order
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        let mut lookup = FxHashSet::default();
        let words: Vec<Word> = words
            .into_iter()
            .filter(|word| lookup.insert(word.text().to_string()))
            .collect();

        Self { words, lookup }
    }

    /// Case-insensitive membership check
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.lookup.contains(&word.trim().to_ascii_uppercase())
    }

    #[must_use]
    pub fn contains_word(&self, word: &Word) -> bool {
        self.lookup.contains(word.text())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Pick a secret uniformly at random
    ///
    /// Returns `None` only for an empty dictionary.
    pub fn random_secret<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Word> {
        self.words.choose(rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sample() -> Dictionary {
        Dictionary::new(words_from_slice(&["apple", "crane", "slate", "APPLE"]))
    }

    #[test]
    fn duplicates_are_dropped() {
        let dictionary = sample();
        assert_eq!(dictionary.len(), 3);
        assert!(!dictionary.is_empty());
    }

    #[test]
    fn membership_ignores_case_and_whitespace() {
        let dictionary = sample();
        assert!(dictionary.contains("apple"));
        assert!(dictionary.contains(" Crane "));
        assert!(!dictionary.contains("zzzzz"));
        assert!(dictionary.contains_word(&Word::new("slate").unwrap()));
    }

    #[test]
    fn random_secret_comes_from_the_list() {
        let dictionary = sample();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let secret = dictionary.random_secret(&mut rng).unwrap();
            assert!(dictionary.contains_word(secret));
        }
    }

    #[test]
    fn empty_dictionary_has_no_secret() {
        let dictionary = Dictionary::new(Vec::new());
        assert!(dictionary.is_empty());
        assert!(dictionary.random_secret(&mut rand::rng()).is_none());
    }
}
