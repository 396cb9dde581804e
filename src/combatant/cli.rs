#![cfg(feature = "std")]

use std::fmt;
use std::io::{self, BufRead, Write};
use std::string::String;

use log::warn;

use super::CoordinateSource;

/// Why a typed line was not accepted as a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Line did not contain exactly two tokens.
    TokenCount(usize),
    /// A token was not a decimal number.
    NotANumber(String),
    /// Numbering starts at 1.
    Zero,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::TokenCount(n) => write!(f, "enter 2 coordinates (got {})", n),
            InputError::NotANumber(tok) => write!(f, "enter numbers, '{}' is not one", tok),
            InputError::Zero => write!(f, "coordinates start at 1"),
        }
    }
}

impl std::error::Error for InputError {}

/// Parse a line such as `"3 4"` into a 1-based (row, column) pair.
pub fn parse_pair(line: &str) -> Result<(u32, u32), InputError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [row, col] = tokens.as_slice() else {
        return Err(InputError::TokenCount(tokens.len()));
    };
    Ok((parse_number(row)?, parse_number(col)?))
}

fn parse_number(token: &str) -> Result<u32, InputError> {
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::NotANumber(token.to_string()));
    }
    match token.parse::<u32>() {
        Ok(0) => Err(InputError::Zero),
        Ok(n) => Ok(n),
        // all digits but too large; the grid will report it as out of bounds
        Err(_) => Ok(u32::MAX),
    }
}

/// Prompts on `output` and reads target lines from `input` until one parses.
pub struct ConsolePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsolePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        write!(self.output, "your move: ")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

impl ConsolePrompt<io::StdinLock<'static>, io::Stdout> {
    /// Prompt on the process's standard streams.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CoordinateSource for ConsolePrompt<R, W> {
    fn next_pair(&mut self) -> Option<(u32, u32)> {
        loop {
            let line = match self.read_line() {
                Ok(Some(line)) => line,
                Ok(None) => return None,
                Err(e) => {
                    warn!("could not read move: {}", e);
                    return None;
                }
            };
            match parse_pair(&line) {
                Ok(pair) => return Some(pair),
                Err(e) => {
                    if writeln!(self.output, "{}", e).is_err() {
                        return None;
                    }
                }
            }
        }
    }
}
