//! Score a single guess against a known secret

use crate::core::{LetterEvaluator, LetterResult, ScoringRule, Word};
use crate::error::GameError;

/// Result of scoring one guess
pub struct ScoreResult {
    pub secret: Word,
    pub guess: Word,
    pub rule: ScoringRule,
    pub feedback: Vec<LetterResult>,
}

impl ScoreResult {
    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.feedback.iter().all(|result| result.is_in_position())
    }
}

/// Score `guess` against `secret` under `rule`
///
/// # Errors
///
/// Returns `GameError` if either word is not a five-letter word.
pub fn score_word(secret: &str, guess: &str, rule: ScoringRule) -> Result<ScoreResult, GameError> {
    let secret = Word::new(secret)?;
    let guess = Word::new(guess)?;
    let feedback = LetterEvaluator::new(rule).evaluate_words(&secret, &guess);

    Ok(ScoreResult {
        secret,
        guess,
        rule,
        feedback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_exact_match() {
        let result = score_word("apple", "APPLE", ScoringRule::Naive).unwrap();
        assert!(result.is_exact());
        assert_eq!(result.secret.text(), "APPLE");
    }

    #[test]
    fn score_respects_rule() {
        let naive = score_word("apple", "alloy", ScoringRule::Naive).unwrap();
        let classic = score_word("apple", "alloy", ScoringRule::Classic).unwrap();
        assert!(!naive.is_exact());
        assert!(naive.feedback[2].is_in_word());
        assert!(!classic.feedback[2].is_in_word());
        assert_eq!(classic.rule, ScoringRule::Classic);
    }

    #[test]
    fn score_rejects_malformed_words() {
        assert!(matches!(
            score_word("apple", "pear", ScoringRule::Naive),
            Err(GameError::InvalidLength { actual: 4, .. })
        ));
    }
}
