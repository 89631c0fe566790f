//! Colored rendering of guesses and the game board

use super::formatters::{KEYBOARD_ROWS, best_letter_states, feedback_to_emoji, outcome_message};
use crate::commands::ScoreResult;
use crate::core::{LetterResult, LetterState, WORD_LENGTH};
use crate::game::{GuessSession, MAX_ATTEMPTS};
use colored::{ColoredString, Colorize};

/// Inner width of the board: three columns per letter
const BOARD_WIDTH: usize = WORD_LENGTH * 3;

fn paint(text: &str, state: Option<LetterState>) -> ColoredString {
    match state {
        Some(LetterState::Correct) => text.black().on_green().bold(),
        Some(LetterState::Present) => text.black().on_yellow().bold(),
        Some(LetterState::Absent) => text.white().on_bright_black(),
        None => text.normal(),
    }
}

/// One guess as a row of colored tiles, no border
#[must_use]
pub fn render_feedback(feedback: &[LetterResult]) -> String {
    feedback
        .iter()
        .map(|result| paint(&format!(" {} ", result.character()), Some(result.state())).to_string())
        .collect()
}

/// Boxed board with one row per attempt, unused rows shown blank
#[must_use]
pub fn render_board(session: &GuessSession) -> String {
    let mut lines = Vec::with_capacity(MAX_ATTEMPTS + 2);
    lines.push(format!("┌{}┐", "─".repeat(BOARD_WIDTH)));

    let mut rows = 0;
    for (_, feedback) in session.history() {
        lines.push(format!("│{}│", render_feedback(&feedback)));
        rows += 1;
    }
    for _ in rows..MAX_ATTEMPTS {
        lines.push(format!("│{}│", " _ ".repeat(WORD_LENGTH)));
    }

    lines.push(format!("└{}┘", "─".repeat(BOARD_WIDTH)));
    lines.join("\n")
}

/// QWERTY keyboard with every guessed letter colored by its best state
#[must_use]
pub fn render_keyboard(session: &GuessSession) -> String {
    let feedback: Vec<Vec<LetterResult>> = session.history().map(|(_, f)| f).collect();
    let states = best_letter_states(feedback.iter().map(Vec::as_slice));

    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: String = row
                .chars()
                .map(|key| paint(&format!(" {key} "), states.get(&key).copied()).to_string())
                .collect();
            format!("{}{keys}", " ".repeat(indent))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// End-of-game banner, revealing the secret on a loss
#[must_use]
pub fn render_outcome(session: &GuessSession) -> String {
    let message = outcome_message(session.is_solved(), session.attempts().len());
    let rule = "═".repeat(40).cyan().to_string();

    let mut lines = vec![rule.clone()];
    if session.is_solved() {
        lines.push(message.green().bold().to_string());
    } else {
        lines.push(message.red().bold().to_string());
        lines.push(format!("The word was {}", session.secret().text().bright_yellow().bold()));
    }
    lines.push(rule);
    lines.join("\n")
}

/// A scored guess: header, tiles, emoji strip and per-letter detail
#[must_use]
pub fn render_score_result(result: &ScoreResult) -> String {
    let mut lines = vec![
        format!(
            "{} vs {} ({} scoring)",
            result.guess.text().bright_white().bold(),
            result.secret.text().bright_yellow().bold(),
            result.rule
        ),
        render_feedback(&result.feedback),
        feedback_to_emoji(&result.feedback),
    ];
    lines.extend(result.feedback.iter().map(|letter| format!("  {letter}")));
    if result.is_exact() {
        lines.push("Exact match!".green().bold().to_string());
    }
    lines.join("\n")
}

/// Print a single scored guess
pub fn print_score_result(result: &ScoreResult) {
    println!("{}", render_score_result(result));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::score_word;
    use crate::core::{ScoringRule, evaluate};

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn feedback_row_shows_letters() {
        plain();
        let feedback = evaluate("APPLE", "ALLOY").unwrap();
        assert_eq!(render_feedback(&feedback), " A  L  L  O  Y ");
    }

    #[test]
    fn board_has_a_row_per_attempt() {
        plain();
        let mut session = GuessSession::new("APPLE").unwrap();
        session.submit_attempt("ALLOY").unwrap();

        let board = render_board(&session);
        let lines: Vec<&str> = board.lines().collect();

        assert_eq!(lines.len(), MAX_ATTEMPTS + 2);
        assert_eq!(lines[0], "┌───────────────┐");
        assert_eq!(lines[1], "│ A  L  L  O  Y │");
        assert_eq!(lines[2], "│ _  _  _  _  _ │");
        assert_eq!(lines[MAX_ATTEMPTS + 1], "└───────────────┘");
    }

    #[test]
    fn keyboard_lists_every_letter() {
        plain();
        let session = GuessSession::new("APPLE").unwrap();
        let keyboard = render_keyboard(&session);
        let lines: Vec<&str> = keyboard.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with(" Q  W  E "));
        assert!(lines[1].starts_with("  A "));
        assert!(lines[2].starts_with("   Z "));
    }

    #[test]
    fn outcome_reveals_secret_on_loss() {
        plain();
        let mut session = GuessSession::new("APPLE").unwrap();
        for word in ["CRANE", "SLATE", "ALLOY", "BREAD", "MOUSE", "TIGHT"] {
            session.submit_attempt(word).unwrap();
        }
        let banner = render_outcome(&session);
        assert!(banner.contains("Out of attempts."));
        assert!(banner.contains("The word was APPLE"));
    }

    #[test]
    fn score_result_flags_exact_match() {
        plain();
        let exact = score_word("apple", "apple", ScoringRule::Naive).unwrap();
        let text = render_score_result(&exact);
        assert!(text.starts_with("APPLE vs APPLE (naive scoring)"));
        assert!(text.contains("[A in_word: true in_position: true]"));
        assert!(text.ends_with("Exact match!"));

        let partial = score_word("apple", "alloy", ScoringRule::Naive).unwrap();
        assert!(!render_score_result(&partial).contains("Exact match!"));
    }

    #[test]
    fn outcome_on_win() {
        plain();
        let mut session = GuessSession::new("APPLE").unwrap();
        session.submit_attempt("APPLE").unwrap();
        let banner = render_outcome(&session);
        assert!(banner.contains("Solved in 1 guess."));
        assert!(!banner.contains("The word was"));
    }
}
