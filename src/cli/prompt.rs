//! Minimal interactive prompts over stdin.

use std::io::{self, Write};

use crate::error::Result;

/// Ask a yes/no question; `n` is the default on empty input.
pub fn confirm(message: &str) -> Result<bool> {
    print!("{message} [y/N] ");
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    let answer = input.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}

/// Read a non-empty line of input.
pub fn input(message: &str) -> Result<String> {
    loop {
        print!("{message} ");
        io::stdout().flush()?;
        let mut line = String::new();
        io::stdin().read_line(&mut line)?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            return Ok(trimmed.to_owned());
        }
    }
}

/// Read a secret without echoing it.
pub fn password(message: &str) -> Result<String> {
    loop {
        let secret = rpassword::prompt_password(format!("{message} "))?;
        if !secret.trim().is_empty() {
            return Ok(secret.trim().to_owned());
        }
    }
}
