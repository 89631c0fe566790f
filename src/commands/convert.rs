//! Word source conversion
//!
//! Filters a raw word source (one word per line, any length) down to the
//! five-letter words the game can use.

use crate::wordlists::loader::is_five_letter_word;
use anyhow::{Context, Result, bail};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::Path;

/// Write every five-letter line of `input` to `output`
///
/// Returns the number of words written.
///
/// # Errors
///
/// Returns an error if `input` cannot be read, holds no five-letter words,
/// or `output` cannot be written.
pub fn convert_word_source(input: &Path, output: &Path) -> Result<usize> {
    let source = fs::read_to_string(input)
        .with_context(|| format!("Failed to read word source {}", input.display()))?;

    let total = source.lines().count();
    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} lines | {msg}")?
            .progress_chars("█▓▒░"),
    );

    let mut words = Vec::new();
    for line in source.lines() {
        let line = line.trim();
        if is_five_letter_word(line) {
            words.push(line);
            pb.set_message(format!("{} found", words.len()));
        }
        pb.inc(1);
    }
    pb.finish_with_message(format!("{} five-letter words", words.len()));

    if words.is_empty() {
        bail!("No five-letter words found in {}", input.display());
    }

    let mut content = words.join("\n");
    content.push('\n');
    fs::write(output, content)
        .with_context(|| format!("Failed to write word list {}", output.display()))?;

    log::info!(
        "Converted {} of {total} lines from {} into {}",
        words.len(),
        input.display(),
        output.display()
    );
    Ok(words.len())
}
