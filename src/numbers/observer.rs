//! Observers notified of accepted numbers.
//!
//! Each observer writes to its own `Write` target (stdout by default), so a
//! failing target only affects that observer.

use std::io::{self, Stdout, Write};

use super::Number;
use super::error::ObserverError;

/// Consumer of the accepted-number stream.
pub trait NumberObserver {
    /// Observer name for diagnostics.
    fn name(&self) -> &str;

    /// Called for every number that passed the filter, in input order.
    fn on_number(&mut self, number: Number) -> Result<(), ObserverError>;

    /// Called once after the last number.
    fn on_finished(&mut self) -> Result<(), ObserverError>;
}

/// Prints each accepted number as it arrives.
#[derive(Debug)]
pub struct PrintObserver<W: Write = Stdout> {
    out: W,
}

impl PrintObserver {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> PrintObserver<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, line: std::fmt::Arguments<'_>) -> Result<(), ObserverError> {
        writeln!(self.out, "{line}")
            .and_then(|_| self.out.flush())
            .map_err(|e| ObserverError::new("print", e))
    }
}

impl<W: Write> NumberObserver for PrintObserver<W> {
    fn name(&self) -> &str {
        "print"
    }

    fn on_number(&mut self, number: Number) -> Result<(), ObserverError> {
        self.emit(format_args!("Read and filtered number: {number}"))
    }

    fn on_finished(&mut self) -> Result<(), ObserverError> {
        self.emit(format_args!("Number processing finished."))
    }
}

/// Counts accepted numbers silently and reports the total on completion.
#[derive(Debug)]
pub struct CountObserver<W: Write = Stdout> {
    out: W,
    count: usize,
}

impl CountObserver {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> CountObserver<W> {
    pub fn new(out: W) -> Self {
        Self { out, count: 0 }
    }

    /// Numbers seen so far.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> NumberObserver for CountObserver<W> {
    fn name(&self) -> &str {
        "count"
    }

    fn on_number(&mut self, _number: Number) -> Result<(), ObserverError> {
        self.count += 1;
        Ok(())
    }

    fn on_finished(&mut self) -> Result<(), ObserverError> {
        writeln!(self.out, "Total number of filtered numbers: {}", self.count)
            .and_then(|_| self.out.flush())
            .map_err(|e| ObserverError::new("count", e))
    }
}
