//! TUI application state and logic

use crate::commands::{PlayConfig, choose_secret, validate_guess};
use crate::core::WORD_LENGTH;
use crate::game::{GuessSession, MAX_ATTEMPTS, SessionState};
use crate::output::formatters::outcome_message;
use crate::wordlists::Dictionary;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub dictionary: &'a Dictionary,
    pub config: PlayConfig,
    pub session: GuessSession,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins indexed by number of guesses used
    pub guess_distribution: [usize; MAX_ATTEMPTS + 1],
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl<'a> App<'a> {
    /// Create the app with a first game already running
    ///
    /// # Errors
    ///
    /// Returns an error if no secret can be chosen.
    pub fn new(dictionary: &'a Dictionary, config: PlayConfig) -> Result<Self> {
        let secret = choose_secret(&config, dictionary)?;
        let session = GuessSession::from_word(secret, config.rule);

        Ok(Self {
            dictionary,
            config,
            session,
            input_buffer: String::new(),
            messages: vec![Message {
                text: format!("Guess the {WORD_LENGTH}-letter word in {MAX_ATTEMPTS} tries."),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Guessing,
        })
    }

    /// Start over with a fresh secret
    ///
    /// # Errors
    ///
    /// Returns an error if no secret can be chosen.
    pub fn new_game(&mut self) -> Result<()> {
        let secret = choose_secret(&self.config, self.dictionary)?;
        self.session = GuessSession::from_word(secret, self.config.rule);
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message("New game started!", MessageStyle::Info);
        log::debug!("New TUI game ({} scoring)", self.config.rule);
        Ok(())
    }

    pub fn push_letter(&mut self, c: char) {
        if self.input_buffer.len() < WORD_LENGTH && c.is_ascii_alphabetic() {
            self.input_buffer.push(c.to_ascii_uppercase());
        }
    }

    pub fn submit_guess(&mut self) {
        if !self.session.can_attempt() {
            return;
        }

        let secret = self.session.secret();
        let guess = match validate_guess(self.dictionary, secret, &self.input_buffer) {
            Ok(word) => word,
            Err(rejection) => {
                self.add_message(&rejection.to_string(), MessageStyle::Error);
                return;
            }
        };

        if let Err(err) = self.session.submit_word(guess) {
            self.add_message(&err.to_string(), MessageStyle::Error);
            return;
        }
        self.input_buffer.clear();

        match self.session.state() {
            SessionState::InProgress => {
                let remaining = self.session.remaining_attempts();
                self.add_message(
                    &format!(
                        "{remaining} {} left",
                        if remaining == 1 { "attempt" } else { "attempts" }
                    ),
                    MessageStyle::Info,
                );
            }
            SessionState::Solved => {
                let used = self.session.attempts().len();
                self.stats.total_games += 1;
                self.stats.games_won += 1;
                self.stats.guess_distribution[used] += 1;
                self.finish(&outcome_message(true, used), MessageStyle::Success);
            }
            SessionState::Exhausted => {
                self.stats.total_games += 1;
                let reveal = format!(
                    "{} The word was {}.",
                    outcome_message(false, MAX_ATTEMPTS),
                    self.session.secret()
                );
                self.finish(&reveal, MessageStyle::Error);
            }
        }
    }

    fn finish(&mut self, text: &str, style: MessageStyle) {
        log::debug!(
            "TUI game over: {} after {} attempts",
            self.session.state(),
            self.session.attempts().len()
        );
        self.input_mode = InputMode::GameOver;
        self.add_message(text, style);
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    ///
    /// # Errors
    ///
    /// Returns an error if starting a new game fails.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return Ok(());
        }

        match self.input_mode {
            InputMode::GameOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_game()?,
                _ => {}
            },
            InputMode::Guessing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) => self.push_letter(c),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_guess(),
                _ => {}
            },
        }
        Ok(())
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        log::error!("TUI exited with error: {err:#}");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key)?;
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
