//! Formatting utilities for terminal output

use crate::core::{LetterResult, LetterState};
use rustc_hash::FxHashMap;

/// Keyboard rows in QWERTY order
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Format feedback as an emoji string
#[must_use]
pub fn feedback_to_emoji(feedback: &[LetterResult]) -> String {
    feedback.iter().map(|result| result.state().emoji()).collect()
}

/// Best known state of every letter guessed so far
///
/// A letter seen as `Correct` anywhere stays `Correct` even if a later row
/// shows it elsewhere as `Present`.
#[must_use]
pub fn best_letter_states<'a, I>(rows: I) -> FxHashMap<char, LetterState>
where
    I: IntoIterator<Item = &'a [LetterResult]>,
{
    let mut states: FxHashMap<char, LetterState> = FxHashMap::default();
    for row in rows {
        for result in row {
            states
                .entry(result.character())
                .and_modify(|state| *state = (*state).max(result.state()))
                .or_insert(result.state());
        }
    }
    states
}

/// Summary line for a finished game
#[must_use]
pub fn outcome_message(solved: bool, attempts: usize) -> String {
    if solved {
        let praise = match attempts {
            1 => "Hole in one!",
            2 => "Magnificent!",
            3 => "Splendid!",
            4 => "Great job!",
            5 => "Nice work!",
            _ => "Phew!",
        };
        format!(
            "{praise} Solved in {attempts} {}.",
            if attempts == 1 { "guess" } else { "guesses" }
        )
    } else {
        "Out of attempts.".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluate;

    #[test]
    fn emoji_all_green() {
        let feedback = evaluate("APPLE", "APPLE").unwrap();
        assert_eq!(feedback_to_emoji(&feedback), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn emoji_mixed() {
        let feedback = evaluate("APPLE", "ALLOY").unwrap();
        assert_eq!(feedback_to_emoji(&feedback), "🟩🟨🟨⬜⬜");
    }

    #[test]
    fn best_states_keep_strongest() {
        let first = evaluate("APPLE", "PLATE").unwrap();
        let second = evaluate("APPLE", "PAPER").unwrap();
        let states = best_letter_states([first.as_slice(), second.as_slice()]);

        // P misplaced in PLATE, exact at index 2 in PAPER
        assert_eq!(states.get(&'P'), Some(&LetterState::Correct));
        assert_eq!(states.get(&'E'), Some(&LetterState::Correct));
        assert_eq!(states.get(&'T'), Some(&LetterState::Absent));
        assert_eq!(states.get(&'R'), Some(&LetterState::Absent));
        assert_eq!(states.get(&'Z'), None);
    }

    #[test]
    fn outcome_messages() {
        assert_eq!(outcome_message(true, 1), "Hole in one! Solved in 1 guess.");
        assert_eq!(outcome_message(true, 4), "Great job! Solved in 4 guesses.");
        assert_eq!(outcome_message(false, 6), "Out of attempts.");
    }
}
