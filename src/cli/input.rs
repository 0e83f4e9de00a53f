//! Line protocol reader for the `check` command.
//!
//! The input starts with the number of dictionary words, followed by that
//! many words one per line. Every line after that is a query.

use std::io::{self, BufRead, Lines};

use log::debug;
use thiserror::Error;

/// Malformed protocol input
#[derive(Error, Debug)]
pub enum InputError {
    /// The input ended before the size line
    #[error("Missing dictionary size on the first line")]
    MissingSize,

    /// The size line is not a non-negative integer
    #[error("Invalid dictionary size: {0:?}")]
    InvalidSize(String),

    /// The input ended before all declared words were read
    #[error("Expected {expected} dictionary words, found {found}")]
    TruncatedDictionary {
        /// Declared word count
        expected: usize,
        /// Words actually present
        found: usize,
    },

    /// Reading the underlying stream failed
    #[error("Failed to read input: {0}")]
    Io(#[from] io::Error),
}

/// Lowercase `text` when case folding is enabled.
pub fn normalize(text: &str, case_fold: bool) -> String {
    if case_fold {
        text.to_lowercase()
    } else {
        text.to_owned()
    }
}

fn strip_line_ending(mut line: String) -> String {
    if line.ends_with('\r') {
        line.pop();
    }
    line
}

/// Reads the dictionary section, then yields the query lines.
pub struct ProtocolReader<R: BufRead> {
    lines: Lines<R>,
    case_fold: bool,
}

impl<R: BufRead> ProtocolReader<R> {
    /// Create a reader over `reader`
    pub fn new(reader: R, case_fold: bool) -> Self {
        Self {
            lines: reader.lines(),
            case_fold,
        }
    }

    fn next_line(&mut self) -> Result<Option<String>, InputError> {
        match self.lines.next() {
            Some(line) => Ok(Some(strip_line_ending(line?))),
            None => Ok(None),
        }
    }

    /// Read the size line and the declared number of words.
    ///
    /// Words are normalized. Empty words are kept in the count but dropped
    /// from the result, since the dictionary cannot store them.
    pub fn read_dictionary(&mut self) -> Result<Vec<String>, InputError> {
        let size_line = self.next_line()?.ok_or(InputError::MissingSize)?;
        let expected: usize = size_line
            .trim()
            .parse()
            .map_err(|_| InputError::InvalidSize(size_line.clone()))?;

        let mut words = Vec::with_capacity(expected);
        for found in 0..expected {
            let line = self
                .next_line()?
                .ok_or(InputError::TruncatedDictionary { expected, found })?;
            if line.is_empty() {
                debug!("Empty dictionary word on line {}", found + 2);
                continue;
            }
            words.push(normalize(&line, self.case_fold));
        }

        Ok(words)
    }

    /// Next query line as typed, or `None` at end of input
    pub fn next_query(&mut self) -> Result<Option<String>, InputError> {
        self.next_line()
    }
}
