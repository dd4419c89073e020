//! Error types for the switchable-sink logger.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SinkError {
    #[error("Error opening log file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error: log file {path} is not open")]
    NotOpen { path: PathBuf },

    #[error("Error writing to {target}: {source}")]
    Write {
        target: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Unknown sink type: {value}")]
    UnknownSink { value: String },
}
