//! Yes/no confirmation before destructive requests

use crate::error::Result;
use std::io::{self, BufRead, Write};

pub trait Confirm {
    /// `true` only on an explicit yes
    fn confirm(&mut self, question: &str) -> Result<bool>;
}

/// Prompts on stdout and reads one line from stdin, unless `--yes` was given
pub struct StdinConfirm {
    assume_yes: bool,
}

impl StdinConfirm {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl Confirm for StdinConfirm {
    fn confirm(&mut self, question: &str) -> Result<bool> {
        if self.assume_yes {
            return Ok(true);
        }

        print!("{} [y/N]: ", question);
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().lock().read_line(&mut input)?;
        Ok(is_yes(&input))
    }
}

/// Accepts English and Spanish affirmatives; anything else, including EOF, is no
pub fn is_yes(input: &str) -> bool {
    matches!(
        input.trim().to_lowercase().as_str(),
        "y" | "yes" | "s" | "si" | "sí"
    )
}

/// Fixed answer, for tests
#[cfg(test)]
pub struct Answer(pub bool);

#[cfg(test)]
impl Confirm for Answer {
    fn confirm(&mut self, _question: &str) -> Result<bool> {
        Ok(self.0)
    }
}
