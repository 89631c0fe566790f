//! Guess scoring
//!
//! Compares a guess against the secret position by position. Every letter
//! gets two flags: whether it sits at the secret's letter for that index
//! (position match) and whether the secret contains it at all (word match).
//!
//! Two rules decide the word-match flag:
//! - `Naive` checks plain containment, so a repeated guess letter is marked
//!   as in the word for every occurrence, even if the secret holds it once.
//! - `Classic` follows Wordle's duplicate handling: exact matches consume
//!   their secret letter first, then remaining guess letters claim the
//!   leftover copies from left to right.

use super::{LetterResult, WORD_LENGTH, Word};
use crate::error::GameError;
use std::fmt;
use std::str::FromStr;

/// How duplicate letters are counted toward a word match
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ScoringRule {
    /// Plain containment check
    #[default]
    Naive,
    /// Frequency-aware Wordle rules
    Classic,
}

impl ScoringRule {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Naive => "naive",
            Self::Classic => "classic",
        }
    }
}

impl FromStr for ScoringRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "naive" => Ok(Self::Naive),
            "classic" | "wordle" => Ok(Self::Classic),
            _ => Err(format!("Unknown scoring rule: {s} (expected naive or classic)")),
        }
    }
}

impl fmt::Display for ScoringRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Stateless scorer from (secret, guess) to per-letter feedback
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LetterEvaluator {
    rule: ScoringRule,
}

impl LetterEvaluator {
    #[must_use]
    pub const fn new(rule: ScoringRule) -> Self {
        Self { rule }
    }

    #[must_use]
    pub const fn rule(self) -> ScoringRule {
        self.rule
    }

    /// Score `guess` against `secret`, validating both first
    ///
    /// # Errors
    /// Returns `GameError::InvalidLength` or `GameError::InvalidCharacters`
    /// if either input is not a five-letter word.
    pub fn evaluate(self, secret: &str, guess: &str) -> Result<Vec<LetterResult>, GameError> {
        let secret = Word::new(secret)?;
        let guess = Word::new(guess)?;
        Ok(self.evaluate_words(&secret, &guess))
    }

    /// Score two already validated words
    ///
    /// Always returns exactly `WORD_LENGTH` results, in guess order.
    #[must_use]
    pub fn evaluate_words(self, secret: &Word, guess: &Word) -> Vec<LetterResult> {
        match self.rule {
            ScoringRule::Naive => score_naive(secret, guess),
            ScoringRule::Classic => score_classic(secret, guess),
        }
    }
}

/// Score `guess` against `secret` with the default (naive) rule
///
/// # Errors
/// Returns `GameError` if either input is not a five-letter word.
///
/// # Examples
/// ```
/// use wordle_game::core::evaluate;
///
/// let results = evaluate("apple", "alloy").unwrap();
/// assert!(results[0].is_in_position());
/// assert!(results[1].is_in_word() && !results[1].is_in_position());
/// assert!(!results[3].is_in_word());
/// ```
pub fn evaluate(secret: &str, guess: &str) -> Result<Vec<LetterResult>, GameError> {
    LetterEvaluator::default().evaluate(secret, guess)
}

fn score_naive(secret: &Word, guess: &Word) -> Vec<LetterResult> {
    guess
        .letters()
        .iter()
        .zip(secret.letters())
        .map(|(&letter, &target)| {
            LetterResult::new(char::from(letter), secret.has_letter(letter), letter == target)
        })
        .collect()
}

fn score_classic(secret: &Word, guess: &Word) -> Vec<LetterResult> {
    let mut in_position = [false; WORD_LENGTH];
    let mut in_word = [false; WORD_LENGTH];
    let mut available = secret.letter_counts();

    // First pass: exact matches consume their secret letter
    for (i, (&letter, &target)) in guess.letters().iter().zip(secret.letters()).enumerate() {
        if letter == target {
            in_position[i] = true;
            if let Some(count) = available.get_mut(&letter) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: misplaced letters claim whatever copies are left
    for (i, &letter) in guess.letters().iter().enumerate() {
        if in_position[i] {
            continue;
        }
        if let Some(count) = available.get_mut(&letter)
            && *count > 0
        {
            in_word[i] = true;
            *count -= 1;
        }
    }

    guess
        .letters()
        .iter()
        .enumerate()
        .map(|(i, &letter)| LetterResult::new(char::from(letter), in_word[i], in_position[i]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(results: &[LetterResult]) -> Vec<(char, bool, bool)> {
        results
            .iter()
            .map(|r| (r.character(), r.is_in_word(), r.is_in_position()))
            .collect()
    }

    #[test]
    fn exact_guess_is_all_positional() {
        let results = evaluate("APPLE", "APPLE").unwrap();
        assert_eq!(results.len(), WORD_LENGTH);
        assert!(results.iter().all(|r| r.is_in_position() && r.is_in_word()));
    }

    #[test]
    fn naive_scoring_marks_every_repeat() {
        let results = evaluate("APPLE", "ALLOY").unwrap();
        assert_eq!(
            flags(&results),
            vec![
                ('A', true, true),
                ('L', true, false),
                ('L', true, false),
                ('O', false, false),
                ('Y', false, false),
            ]
        );
    }

    #[test]
    fn classic_scoring_caps_repeats() {
        let evaluator = LetterEvaluator::new(ScoringRule::Classic);
        let results = evaluator.evaluate("APPLE", "ALLOY").unwrap();
        assert_eq!(
            flags(&results),
            vec![
                ('A', true, true),
                ('L', true, false),
                ('L', false, false),
                ('O', false, false),
                ('Y', false, false),
            ]
        );
    }

    #[test]
    fn classic_exact_match_takes_priority() {
        // ROBOT vs FLOOR: first O misplaced, second O exact
        let evaluator = LetterEvaluator::new(ScoringRule::Classic);
        let results = evaluator.evaluate("floor", "robot").unwrap();
        assert_eq!(
            flags(&results),
            vec![
                ('R', true, false),
                ('O', true, false),
                ('B', false, false),
                ('O', true, true),
                ('T', false, false),
            ]
        );
    }

    #[test]
    fn classic_duplicates_beyond_secret_count() {
        // SPEED vs ERASE: ERASE holds two Es, both guess Es are misplaced
        let evaluator = LetterEvaluator::new(ScoringRule::Classic);
        let states: Vec<_> = evaluator
            .evaluate("erase", "speed")
            .unwrap()
            .iter()
            .map(|r| r.state())
            .collect();
        assert_eq!(
            states,
            vec![
                crate::core::LetterState::Present,
                crate::core::LetterState::Absent,
                crate::core::LetterState::Present,
                crate::core::LetterState::Present,
                crate::core::LetterState::Absent,
            ]
        );
    }

    #[test]
    fn inputs_are_case_normalized() {
        assert_eq!(
            evaluate("apple", "AlLoY").unwrap(),
            evaluate("APPLE", "ALLOY").unwrap()
        );
        assert_eq!(evaluate("apple", "alloy").unwrap()[0].character(), 'A');
    }

    #[test]
    fn evaluation_is_deterministic() {
        for rule in [ScoringRule::Naive, ScoringRule::Classic] {
            let evaluator = LetterEvaluator::new(rule);
            let first = evaluator.evaluate("CRANE", "NACRE").unwrap();
            let second = evaluator.evaluate("CRANE", "NACRE").unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn positional_flag_matches_index_equality() {
        let pairs = [
            ("CRANE", "SLATE"),
            ("APPLE", "PAPER"),
            ("EERIE", "GEESE"),
            ("LLAMA", "ALLOY"),
        ];
        for rule in [ScoringRule::Naive, ScoringRule::Classic] {
            let evaluator = LetterEvaluator::new(rule);
            for (secret, guess) in pairs {
                let results = evaluator.evaluate(secret, guess).unwrap();
                assert_eq!(results.len(), guess.len());
                for (i, result) in results.iter().enumerate() {
                    assert_eq!(
                        result.is_in_position(),
                        secret.as_bytes()[i] == guess.as_bytes()[i],
                        "{rule} {secret}/{guess} index {i}"
                    );
                    assert!(!result.is_in_position() || result.is_in_word());
                }
            }
        }
    }

    #[test]
    fn wrong_length_is_rejected() {
        assert_eq!(
            evaluate("APPLE", "APPLES"),
            Err(GameError::InvalidLength {
                expected: 5,
                actual: 6
            })
        );
        assert!(matches!(
            evaluate("APP", "APPLE"),
            Err(GameError::InvalidLength { actual: 3, .. })
        ));
    }

    #[test]
    fn scoring_rule_parses_names() {
        assert_eq!("naive".parse::<ScoringRule>(), Ok(ScoringRule::Naive));
        assert_eq!("Classic".parse::<ScoringRule>(), Ok(ScoringRule::Classic));
        assert_eq!("wordle".parse::<ScoringRule>(), Ok(ScoringRule::Classic));
        assert!("fuzzy".parse::<ScoringRule>().is_err());
        assert_eq!(ScoringRule::default(), ScoringRule::Naive);
    }
}
