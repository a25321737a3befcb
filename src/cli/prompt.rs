//! Interactive input.
//!
//! Every question the REPL asks goes through a [`Prompt`]. On a terminal
//! that is dialoguer; with piped stdin (scripts, tests) it is a plain line
//! reader. End of input is reported as `None` and treated as cancellation.

use dialoguer::Input;
use std::io::{self, BufRead, IsTerminal, Write};

use crate::cli::output;
use crate::core::constants;
use crate::error::Result;

/// Source of user input.
pub trait Prompt {
    /// Ask for one line of text. `None` at end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be read.
    fn line(&mut self, message: &str) -> Result<Option<String>>;

    /// Ask a yes/no question. Blank input picks `default`; `None` at end of
    /// input or on the cancel keyword.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be read.
    fn confirm(&mut self, message: &str, default: bool) -> Result<Option<bool>> {
        let choices = if default { "[Y/n]" } else { "[y/N]" };
        let message = format!("{} {}", message, choices);

        loop {
            let Some(answer) = self.line(&message)? else {
                return Ok(None);
            };
            let answer = answer.trim();
            if answer.is_empty() {
                return Ok(Some(default));
            }
            if is_cancel(answer) {
                return Ok(None);
            }
            match parse_yes_no(answer) {
                Some(value) => return Ok(Some(value)),
                None => output::warn("please answer yes or no"),
            }
        }
    }
}

/// Interpret a yes/no answer.
pub fn parse_yes_no(answer: &str) -> Option<bool> {
    match answer.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Whether `input` is the cancel keyword.
pub fn is_cancel(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case(constants::CANCEL_KEYWORD)
}

/// Report that the current operation was abandoned.
pub fn cancelled() {
    output::dimmed("operation cancelled, returning to the previous menu");
}

/// Interactive terminal prompt backed by dialoguer.
///
/// Yes/no questions are typed lines too, so the cancel keyword works there
/// the same as at any other prompt.
#[derive(Debug, Default)]
pub struct Terminal;

impl Prompt for Terminal {
    fn line(&mut self, message: &str) -> Result<Option<String>> {
        let result = Input::<String>::new()
            .with_prompt(message)
            .allow_empty(true)
            .interact_text();

        match result {
            Ok(text) => Ok(Some(text)),
            Err(dialoguer::Error::IO(e)) if is_end_of_input(&e) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

fn is_end_of_input(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        io::ErrorKind::UnexpectedEof | io::ErrorKind::Interrupted
    )
}

/// Line-oriented prompt over any reader, used when stdin is not a terminal.
pub struct Lines<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Lines<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Prompt for Lines<R, W> {
    fn line(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{}: ", message)?;
        self.output.flush()?;

        // Invalid UTF-8 is replaced with U+FFFD.
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }
}

/// Prompt for the process's stdin: dialoguer on a terminal, plain lines
/// otherwise.
pub fn stdin() -> Box<dyn Prompt> {
    if io::stdin().is_terminal() {
        Box::new(Terminal)
    } else {
        Box::new(Lines::new(io::stdin().lock(), io::stdout()))
    }
}

/// Verdict of a validator passed to [`prompt_until`].
#[derive(Debug, PartialEq, Eq)]
pub enum Check<T> {
    /// Input is valid; stop asking.
    Accept(T),
    /// Input is unusable; warn and ask again.
    Retry(String),
    /// Input was refused (e.g. by the server); report an error and ask again.
    Reject(String),
}

/// Ask `message` until `check` accepts the trimmed input, or the user types
/// the cancel keyword, or input ends.
///
/// Returns `None` when cancelled. Nothing is mutated on cancellation; that
/// is up to the caller.
///
/// # Errors
///
/// Returns an error only if input cannot be read.
pub fn prompt_until<P, T, F>(prompt: &mut P, message: &str, mut check: F) -> Result<Option<T>>
where
    P: Prompt + ?Sized,
    F: FnMut(&str) -> Check<T>,
{
    loop {
        let Some(input) = prompt.line(message)? else {
            cancelled();
            return Ok(None);
        };

        let input = input.trim();
        if is_cancel(input) {
            cancelled();
            return Ok(None);
        }

        match check(input) {
            Check::Accept(value) => return Ok(Some(value)),
            Check::Retry(reason) => output::warn(&reason),
            Check::Reject(reason) => output::error(&reason),
        }
    }
}

/// Scripted prompt for tests: answers come from a fixed string.
#[cfg(test)]
pub(crate) fn scripted(answers: &str) -> Lines<io::Cursor<Vec<u8>>, io::Sink> {
    Lines::new(io::Cursor::new(answers.as_bytes().to_vec()), io::sink())
}
