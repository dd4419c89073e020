//! Error types for the number pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a processing run or prevent it from starting.
#[derive(Error, Debug)]
pub enum NumberError {
    #[error("Could not read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Filter(#[from] FilterError),
}

/// Failures building a filter from a name and argument.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("Unknown filter type: {name}")]
    UnknownFilter { name: String },

    #[error("Missing argument for {filter} filter")]
    MissingArgument { filter: String },

    #[error("Invalid argument for {filter} filter: {argument}")]
    InvalidArgument { filter: String, argument: String },

    #[error("Argument out of range for {filter} filter: {argument}")]
    OutOfRange { filter: String, argument: String },
}

impl FilterError {
    /// True for every variant reported as an invalid-argument failure.
    pub fn is_invalid_argument(&self) -> bool {
        !self.is_out_of_range()
    }

    pub fn is_out_of_range(&self) -> bool {
        matches!(self, FilterError::OutOfRange { .. })
    }
}

/// A single observer failed to handle an event.
#[derive(Error, Debug)]
#[error("Observer '{observer}' failed: {source}")]
pub struct ObserverError {
    pub observer: String,
    #[source]
    pub source: std::io::Error,
}

impl ObserverError {
    pub fn new(observer: impl Into<String>, source: std::io::Error) -> Self {
        Self {
            observer: observer.into(),
            source,
        }
    }
}

pub type NumberResult<T> = Result<T, NumberError>;
