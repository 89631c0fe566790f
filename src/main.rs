//! Wordle Game - CLI
//!
//! Terminal Wordle with a full-screen TUI and a plain line mode.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordle_game::{
    commands::{PlayConfig, convert_word_source, run_play, score_word},
    core::ScoringRule,
    output::print_score_result,
    wordlists::{Dictionary, embedded_dictionary, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the secret five-letter word in six attempts",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Duplicate-letter scoring: naive (default) or classic
    #[arg(long, global = true, default_value = "naive")]
    scoring: ScoringRule,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Full-screen TUI game (default)
    Tui {
        /// Play against this word instead of a random one
        #[arg(long)]
        secret: Option<String>,
    },

    /// Line-mode game on stdin/stdout
    Play {
        /// Play against this word instead of a random one
        #[arg(long)]
        secret: Option<String>,
    },

    /// Score one guess against a secret
    Score {
        /// The secret word
        secret: String,

        /// The guess to score
        guess: String,
    },

    /// Filter a word source down to five-letter words
    Convert {
        /// Raw word source, one word per line
        input: PathBuf,

        /// Where to write the five-letter words
        output: PathBuf,
    },
}

/// Load the dictionary based on the -w flag
fn load_dictionary(wordlist: &str) -> Result<Dictionary> {
    match wordlist {
        "embedded" => Ok(embedded_dictionary()),
        path => {
            let words = load_from_file(path)
                .with_context(|| format!("Could not load word list {path}"))?;
            Ok(Dictionary::new(words))
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    // Default to the TUI if no command given
    let command = cli.command.unwrap_or(Commands::Tui { secret: None });

    match command {
        Commands::Tui { secret } => {
            let dictionary = load_dictionary(&cli.wordlist)?;
            run_tui_command(&dictionary, play_config(cli.scoring, secret))
        }
        Commands::Play { secret } => {
            let dictionary = load_dictionary(&cli.wordlist)?;
            run_play(&play_config(cli.scoring, secret), &dictionary)
        }
        Commands::Score { secret, guess } => {
            let result = score_word(&secret, &guess, cli.scoring)?;
            print_score_result(&result);
            Ok(())
        }
        Commands::Convert { input, output } => {
            let count = convert_word_source(&input, &output)?;
            println!("Found {count} five-letter words.");
            Ok(())
        }
    }
}

fn play_config(rule: ScoringRule, secret: Option<String>) -> PlayConfig {
    let config = PlayConfig::new(rule);
    match secret {
        Some(secret) => config.with_secret(secret),
        None => config,
    }
}

fn run_tui_command(dictionary: &Dictionary, config: PlayConfig) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let app = App::new(dictionary, config)?;
    run_tui(app)
}
