//! Line-mode game loop
//!
//! Prompts for guesses on stdin, checks them against the dictionary and
//! prints the colored board after every accepted attempt.

use crate::core::{ScoringRule, WORD_LENGTH, Word};
use crate::error::GameError;
use crate::game::{GuessSession, MAX_ATTEMPTS};
use crate::output::{render_board, render_keyboard, render_outcome};
use crate::wordlists::Dictionary;
use anyhow::{Context, Result, anyhow};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Configuration for a line-mode game
#[derive(Debug, Clone, Default)]
pub struct PlayConfig {
    /// Fixed secret instead of a random pick from the dictionary
    pub secret: Option<String>,
    pub rule: ScoringRule,
}

impl PlayConfig {
    #[must_use]
    pub const fn new(rule: ScoringRule) -> Self {
        Self { secret: None, rule }
    }

    #[must_use]
    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = Some(secret.into());
        self
    }
}

/// Why a typed guess was turned away before reaching the session
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GuessRejection {
    #[error("Not a valid word: {0}")]
    Malformed(#[from] GameError),

    #[error("Not in word list: {0}")]
    Unknown(String),
}

/// Check a raw guess for shape and dictionary membership
///
/// The secret itself is always accepted, so a configured secret outside the
/// dictionary can still be solved.
///
/// # Errors
/// Returns `GuessRejection` describing why the guess cannot be submitted.
pub fn validate_guess(
    dictionary: &Dictionary,
    secret: &Word,
    raw: &str,
) -> Result<Word, GuessRejection> {
    let word = Word::new(raw.trim())?;
    if word == *secret || dictionary.contains_word(&word) {
        Ok(word)
    } else {
        Err(GuessRejection::Unknown(word.text().to_string()))
    }
}

/// Pick the secret for a new game
///
/// A configured secret must be a valid word but need not be in the
/// dictionary.
///
/// # Errors
/// Returns an error if the configured secret is malformed or the dictionary
/// is empty.
pub fn choose_secret(config: &PlayConfig, dictionary: &Dictionary) -> Result<Word> {
    if let Some(secret) = &config.secret {
        return Word::new(secret).with_context(|| format!("Invalid secret {secret:?}"));
    }

    let secret = dictionary
        .random_secret(&mut rand::rng())
        .cloned()
        .ok_or_else(|| anyhow!("Word list is empty, cannot pick a secret"))?;
    log::debug!("Picked secret from {} words", dictionary.len());
    Ok(secret)
}

/// Run line-mode games on stdin/stdout until the player stops
///
/// # Errors
///
/// Returns an error on I/O failure or if no secret can be chosen.
pub fn run_play(config: &PlayConfig, dictionary: &Dictionary) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    writeln!(out, "Hello Wordle!")?;
    writeln!(
        out,
        "Guess the {WORD_LENGTH}-letter word in {MAX_ATTEMPTS} attempts. Type 'quit' to stop.\n"
    )?;

    loop {
        let secret = choose_secret(config, dictionary)?;
        let session = GuessSession::from_word(secret, config.rule);
        let session = play_game(session, dictionary, &mut input, &mut out)?;

        if !session.state().is_terminal() {
            break;
        }
        // A fixed secret makes a rematch pointless
        if config.secret.is_some() || !ask_again(&mut input, &mut out)? {
            break;
        }
    }

    writeln!(out, "\nThanks for playing!")?;
    Ok(())
}

/// Drive one session to the end using the given input and output
///
/// Returns the session as it stood when the loop stopped: terminal, or
/// still in progress if the player quit or input ran out.
///
/// # Errors
///
/// Returns an error on I/O failure.
pub fn play_game<R: BufRead, W: Write>(
    mut session: GuessSession,
    dictionary: &Dictionary,
    input: &mut R,
    out: &mut W,
) -> Result<GuessSession> {
    log::info!("New game ({} scoring)", session.rule());

    while session.can_attempt() {
        write!(out, "Guess {}/{MAX_ATTEMPTS}: ", session.attempts().len() + 1)?;
        out.flush()?;

        let Some(line) = read_trimmed(input)? else {
            log::info!("Input closed, ending game");
            return Ok(session);
        };
        if matches!(line.to_ascii_lowercase().as_str(), "quit" | "q" | "exit") {
            return Ok(session);
        }

        match validate_guess(dictionary, session.secret(), &line) {
            Ok(word) => {
                log::debug!("Attempt {}: {word}", session.attempts().len() + 1);
                session.submit_word(word)?;
                writeln!(out, "\n{}\n", render_board(&session))?;
                writeln!(out, "{}\n", render_keyboard(&session))?;
            }
            Err(rejection) => {
                log::debug!("Rejected guess {line:?}: {rejection}");
                writeln!(out, "{}", rejection.to_string().red())?;
            }
        }
    }

    log::info!(
        "Game over: {} after {} attempts",
        session.state(),
        session.attempts().len()
    );
    writeln!(out, "{}", render_outcome(&session))?;
    Ok(session)
}

fn ask_again<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<bool> {
    write!(out, "\nPlay again? (yes/no): ")?;
    out.flush()?;
    Ok(read_trimmed(input)?
        .is_some_and(|answer| matches!(answer.to_ascii_lowercase().as_str(), "yes" | "y")))
}

/// Read one line, `None` at end of input
fn read_trimmed<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
