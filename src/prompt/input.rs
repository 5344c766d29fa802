//! Validated single-line input and multi-line capture.
//!
//! Unlike the selector this reads whole lines in the terminal's normal
//! (cooked) mode, so the user gets echo and line editing for free.

use std::io::{self, BufRead, Read, Write};

use super::error::PromptError;
use super::screen::erase_lines;
use crate::theme::{current_theme, Theme};

/// Shown under the prompt after a rejected value.
pub const INVALID_INPUT: &str = "Invalid input. Please try again.";

type Validator<'a> = Box<dyn Fn(&str) -> bool + 'a>;

/// A line prompt with optional validation.
pub struct LineInput<'a> {
    prompt: String,
    validator: Option<Validator<'a>>,
    allow_empty: bool,
    theme: Theme,
}

impl<'a> LineInput<'a> {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            validator: None,
            allow_empty: false,
            theme: current_theme(),
        }
    }

    /// Reject values for which `validator` returns false.
    pub fn validator(mut self, validator: impl Fn(&str) -> bool + 'a) -> Self {
        self.validator = Some(Box::new(validator));
        self
    }

    /// Accept an empty line instead of asking again.
    pub fn allow_empty(mut self, allow: bool) -> Self {
        self.allow_empty = allow;
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Prompt on stdin/stdout.
    pub fn interact(&self) -> Result<String, PromptError> {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        self.run(&mut input, &mut io::stdout())
    }

    /// Prompt until a value is accepted, returning it trimmed.
    ///
    /// Each attempt leaves the prompt line (with the echoed input) on
    /// screen. A rejected attempt erases it, plus the previous error line if
    /// there is one, so at most one error line is ever visible.
    pub fn run<R, W>(&self, input: &mut R, out: &mut W) -> Result<String, PromptError>
    where
        R: BufRead + ?Sized,
        W: Write + ?Sized,
    {
        let mut error_shown = false;

        loop {
            write!(out, "{}: ", self.prompt)?;
            out.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                return Err(PromptError::InputClosed);
            }
            let value = line.trim();

            if value.is_empty() {
                if self.allow_empty {
                    return Ok(String::new());
                }
                erase_lines(out, 1)?;
                continue;
            }

            if let Some(validator) = &self.validator {
                if !validator(value) {
                    tracing::debug!(prompt = %self.prompt, "input rejected");
                    erase_lines(out, if error_shown { 2 } else { 1 })?;
                    writeln!(out, "{}", self.theme.error_text(INVALID_INPUT))?;
                    out.flush()?;
                    error_shown = true;
                    continue;
                }
            }

            return Ok(value.to_string());
        }
    }
}

/// Ask for one line on the terminal.
pub fn prompt_line(
    prompt: &str,
    validator: Option<&dyn Fn(&str) -> bool>,
    allow_empty: bool,
) -> Result<String, PromptError> {
    let mut input = LineInput::new(prompt).allow_empty(allow_empty);
    if let Some(validator) = validator {
        input = input.validator(validator);
    }
    input.interact()
}

/// Read everything up to end of input (Ctrl-D on an empty line).
pub fn read_until_eof<R: Read + ?Sized>(input: &mut R) -> Result<String, PromptError> {
    let mut content = String::new();
    input.read_to_string(&mut content)?;
    Ok(content)
}
