//! User input utilities for interactive command-line prompts.
//!
//! Prompts are written to stderr so stdout stays reserved for document
//! output even when a command asks a question.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

/// Prompt on stderr and read one trimmed line from `input`.
fn prompt_string_from<R: BufRead>(prompt: &str, input: &mut R) -> Result<String> {
    eprint!("{prompt}: ");
    io::stderr().flush().ok();

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Failed to read user input")?;

    Ok(line.trim().to_string())
}

/// Prompts the user for a yes/no confirmation.
///
/// Accepts 'y', 'yes', 'n', 'no' (case insensitive).
/// Empty input and end of input are treated as 'no'.
///
/// # Errors
///
/// Returns an error if reading from stdin fails.
pub fn prompt_confirmation(prompt: &str) -> Result<bool> {
    prompt_confirmation_from(prompt, &mut io::stdin().lock())
}

/// [`prompt_confirmation`] reading from any buffered source.
pub fn prompt_confirmation_from<R: BufRead>(prompt: &str, input: &mut R) -> Result<bool> {
    loop {
        let answer = prompt_string_from(&format!("{prompt} (y/N)"), input)?;
        match answer.to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" | "" => return Ok(false),
            _ => {
                eprintln!("Please enter 'y' for yes or 'n' for no.");
            }
        }
    }
}
