//! Whitespace-separated integer parsing.
//!
//! Input is handled as bytes, so stray non-UTF-8 bytes only spoil the token
//! they sit in. A token contributes its leading `[+-]?[0-9]+` run, so `12abc`
//! reads as 12. Tokens without leading digits never fail a read: each one is
//! recorded as a [`SkippedToken`] and reported once as a warning on the
//! error stream.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::num::IntErrorKind;
use std::path::Path;

use super::Number;
use super::error::{NumberError, NumberResult};

/// Why a token was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No leading base-10 digits.
    Invalid,
    /// Numeric, but outside the `Number` range.
    OutOfRange,
}

/// A token the reader refused, with its 1-based line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedToken {
    pub line: usize,
    pub token: String,
    pub reason: SkipReason,
}

impl fmt::Display for SkippedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason {
            SkipReason::Invalid => write!(f, "invalid number '{}'", self.token),
            SkipReason::OutOfRange => write!(f, "number out of range '{}'", self.token),
        }
    }
}

/// Result of parsing one input: accepted numbers in input order plus the
/// tokens that were skipped.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReadReport {
    pub numbers: Vec<Number>,
    pub skipped: Vec<SkippedToken>,
}

/// Source of numbers for a processing run.
pub trait NumberReader {
    /// Read every number from `path`, in file order.
    fn read(&self, path: &Path) -> NumberResult<Vec<Number>>;
}

/// Parse the leading `[+-]?[0-9]+` run of `token` as a base-10 `Number`.
///
/// Trailing bytes after the digits are ignored.
pub(crate) fn parse_leading_number(token: &[u8]) -> Result<Number, SkipReason> {
    let sign = usize::from(matches!(token.first(), Some(b'+' | b'-')));
    let digits = token[sign..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits == 0 {
        return Err(SkipReason::Invalid);
    }

    // ASCII sign and digits only, so always valid UTF-8.
    let prefix = std::str::from_utf8(&token[..sign + digits]).map_err(|_| SkipReason::Invalid)?;
    prefix.parse::<Number>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => SkipReason::OutOfRange,
        _ => SkipReason::Invalid,
    })
}

/// Parse numbers from any buffered source, line by line.
///
/// Only I/O failures are errors; undecodable bytes are treated as part of
/// an ordinary token.
pub fn parse_numbers(input: impl BufRead) -> std::io::Result<ReadReport> {
    let mut report = ReadReport::default();

    for (index, line) in input.split(b'\n').enumerate() {
        let line = line?;
        for token in line
            .split(u8::is_ascii_whitespace)
            .filter(|token| !token.is_empty())
        {
            match parse_leading_number(token) {
                Ok(n) => report.numbers.push(n),
                Err(reason) => report.skipped.push(SkippedToken {
                    line: index + 1,
                    token: String::from_utf8_lossy(token).into_owned(),
                    reason,
                }),
            }
        }
    }

    Ok(report)
}

/// Reads numbers from a text file on disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileReader;

impl FileReader {
    pub fn new() -> Self {
        Self
    }

    /// Read `path` and return the full report, without emitting warnings.
    pub fn read_report(&self, path: &Path) -> NumberResult<ReadReport> {
        let io_error = |source| NumberError::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(io_error)?;
        parse_numbers(BufReader::new(file)).map_err(io_error)
    }
}

impl NumberReader for FileReader {
    fn read(&self, path: &Path) -> NumberResult<Vec<Number>> {
        let report = self.read_report(path)?;

        for skipped in &report.skipped {
            tracing::warn!(
                "{skipped} in {}:{}, skipping",
                path.display(),
                skipped.line
            );
        }
        crate::debug_event!(
            "reader",
            "parsed",
            "{} numbers, {} skipped from {}",
            report.numbers.len(),
            report.skipped.len(),
            path.display()
        );

        Ok(report.numbers)
    }
}
