//! Concrete log sinks.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;

use super::SinkKind;
use super::error::SinkError;

/// Writer shared between the logger and its console sink.
pub type SharedWriter = Arc<Mutex<dyn Write + Send>>;

/// Wrap a writer for sharing.
pub fn shared(writer: impl Write + Send + 'static) -> SharedWriter {
    Arc::new(Mutex::new(writer))
}

/// Destination for formatted log lines.
pub trait LogSink: Send {
    fn kind(&self) -> SinkKind;

    /// Write one complete line. Implementations must not buffer.
    fn write_line(&mut self, line: &str) -> Result<(), SinkError>;
}

/// Writes each line to the console writer.
pub struct ConsoleSink {
    out: SharedWriter,
}

impl ConsoleSink {
    pub fn new(out: SharedWriter) -> Self {
        Self { out }
    }
}

impl LogSink for ConsoleSink {
    fn kind(&self) -> SinkKind {
        SinkKind::Console
    }

    fn write_line(&mut self, line: &str) -> Result<(), SinkError> {
        let mut out = self.out.lock();
        writeln!(out, "{line}")
            .and_then(|_| out.flush())
            .map_err(|source| SinkError::Write {
                target: "console".to_string(),
                source,
            })
    }
}

/// Appends lines to a file.
///
/// A sink whose file failed to open stays installed and rejects every
/// write with [`SinkError::NotOpen`].
pub struct FileSink {
    path: PathBuf,
    file: Option<File>,
}

impl FileSink {
    /// Open `path` for appending, creating it if needed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, SinkError> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| SinkError::Open {
                path: path.clone(),
                source,
            })?;

        Ok(Self {
            path,
            file: Some(file),
        })
    }

    /// A sink for `path` that drops everything.
    pub fn unopened(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            file: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_open(&self) -> bool {
        self.file.is_some()
    }
}

impl LogSink for FileSink {
    fn kind(&self) -> SinkKind {
        SinkKind::File
    }

    fn write_line(&mut self, line: &str) -> Result<(), SinkError> {
        let Some(file) = self.file.as_mut() else {
            return Err(SinkError::NotOpen {
                path: self.path.clone(),
            });
        };

        writeln!(file, "{line}")
            .and_then(|_| file.flush())
            .map_err(|source| SinkError::Write {
                target: self.path.display().to_string(),
                source,
            })
    }
}

/// Discards everything.
#[derive(Debug, Default)]
pub struct NullSink;

impl LogSink for NullSink {
    fn kind(&self) -> SinkKind {
        SinkKind::None
    }

    #[inline(always)]
    fn write_line(&mut self, _line: &str) -> Result<(), SinkError> {
        Ok(())
    }
}
