use anyhow::{Context, Result, bail};
use inquire::{Confirm, Text};
use models::input::normalize;
use std::io::{BufRead, Write};

/// Source of operator answers
pub trait Prompter {
    /// Asks a free-form question and returns the raw answer
    fn text(&mut self, message: &str) -> Result<String>;

    /// Asks a yes/no question
    fn confirm(&mut self, message: &str) -> Result<bool>;
}

/// Interactive prompts for a terminal session
pub struct InquirePrompter;

impl Prompter for InquirePrompter {
    fn text(&mut self, message: &str) -> Result<String> {
        Text::new(message)
            .prompt()
            .with_context(|| format!("Failed to read answer to {message:?}"))
    }

    fn confirm(&mut self, message: &str) -> Result<bool> {
        Confirm::new(message)
            .with_default(false)
            .prompt()
            .with_context(|| format!("Failed to read answer to {message:?}"))
    }
}

/// Reads one answer per line, for piped input
pub struct LinePrompter<R> {
    reader: R,
}

impl<R: BufRead> LinePrompter<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> Prompter for LinePrompter<R> {
    fn text(&mut self, message: &str) -> Result<String> {
        print!("{message} ");
        std::io::stdout().flush().ok();

        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .with_context(|| format!("Failed to read answer to {message:?}"))?;
        if read == 0 {
            bail!("Input ended before {message:?} was answered");
        }

        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn confirm(&mut self, message: &str) -> Result<bool> {
        let answer = self.text(&format!("{message} (y/n):"))?;
        Ok(normalize(&answer) == "y")
    }
}
