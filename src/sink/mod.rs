//! Logger with a switchable output sink.
//!
//! There is no global instance: the process entry point builds one
//! [`Logger`] and hands out references to it. Exactly one sink is active at
//! a time, and switching it takes effect for every later [`Logger::log`]
//! call.
//!
//! ```ignore
//! let logger = Logger::new("app.log");
//! numsift::log_at!(logger, "started with {} inputs", n);
//! logger.set_sink(SinkKind::File);
//! numsift::log_at!(logger, "now appended to app.log");
//! ```
//!
//! Sink state is guarded by a mutex, so `set_sink` and `log` calls from
//! several threads are serialized.

pub mod backends;
pub mod error;

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use parking_lot::Mutex;

pub use backends::{ConsoleSink, FileSink, LogSink, NullSink, SharedWriter, shared};
pub use error::SinkError;

/// Which sink is active.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SinkKind {
    #[default]
    Console,
    File,
    None,
}

impl SinkKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SinkKind::Console => "console",
            SinkKind::File => "file",
            SinkKind::None => "none",
        }
    }

    /// Case-insensitive parse that falls back to [`SinkKind::Console`].
    pub fn parse_lenient(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }
}

impl FromStr for SinkKind {
    type Err = SinkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "console" => Ok(SinkKind::Console),
            "file" => Ok(SinkKind::File),
            "none" => Ok(SinkKind::None),
            _ => Err(SinkError::UnknownSink {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for SinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source location of a log call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    pub file: &'static str,
    pub function: &'static str,
    pub line: u32,
}

impl CallSite {
    pub const fn new(file: &'static str, function: &'static str, line: u32) -> Self {
        Self {
            file,
            function,
            line,
        }
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.function, self.line)
    }
}

#[doc(hidden)]
pub fn type_name_of<T>(_: &T) -> &'static str {
    std::any::type_name::<T>()
}

/// Turn the type name of a marker fn nested in a function into the path of
/// that function.
#[doc(hidden)]
pub fn enclosing_function(marker: &'static str) -> &'static str {
    marker.strip_suffix("::__call_site").unwrap_or(marker)
}

/// Capture the current file, enclosing function and line as a [`CallSite`].
#[macro_export]
macro_rules! call_site {
    () => {{
        fn __call_site() {}
        $crate::sink::CallSite::new(
            file!(),
            $crate::sink::enclosing_function($crate::sink::type_name_of(&__call_site)),
            line!(),
        )
    }};
}

/// Log a formatted message through a [`Logger`](crate::sink::Logger),
/// tagged with the caller's location.
///
/// # Examples
/// ```ignore
/// log_at!(logger, "First test message.");
/// log_at!(logger, "{} numbers accepted", count);
/// ```
#[macro_export]
macro_rules! log_at {
    ($logger:expr, $($arg:tt)+) => {
        $logger.log($crate::call_site!(), &format!($($arg)+))
    };
}

/// Format a log line as `[file:function:line] message`.
pub fn format_message(site: &CallSite, message: &str) -> String {
    format!("[{site}] {message}")
}

/// Logger routing messages to one active sink.
pub struct Logger {
    sink: Mutex<Box<dyn LogSink>>,
    console: SharedWriter,
    diagnostics: SharedWriter,
    log_path: PathBuf,
}

impl Logger {
    /// Console sink on stdout, diagnostics on stderr, file sink at `log_path`.
    pub fn new(log_path: impl Into<PathBuf>) -> Self {
        Self::builder().log_path(log_path).build()
    }

    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Replace the active sink and announce the switch on the console.
    ///
    /// Switching to [`SinkKind::File`] opens the log file in append mode. If
    /// that fails, a diagnostic is written and the file sink stays installed
    /// in a degraded state that rejects every write.
    pub fn set_sink(&self, kind: SinkKind) {
        let mut active = self.sink.lock();

        let sink: Box<dyn LogSink> = match kind {
            SinkKind::Console => Box::new(ConsoleSink::new(self.console.clone())),
            SinkKind::File => match FileSink::open(&self.log_path) {
                Ok(sink) => Box::new(sink),
                Err(e) => {
                    self.diagnose(&e);
                    Box::new(FileSink::unopened(&self.log_path))
                }
            },
            SinkKind::None => Box::new(NullSink),
        };
        *active = sink;

        let status = match kind {
            SinkKind::Console => "Logging redirected to console.".to_string(),
            SinkKind::File => format!("Logging redirected to file {}.", self.log_path.display()),
            SinkKind::None => "Logging disabled.".to_string(),
        };
        self.announce(&status);
        tracing::debug!("[sink] switched to {kind}");
    }

    /// Write `message`, tagged with `site`, through the active sink.
    pub fn log(&self, site: CallSite, message: &str) {
        let line = format_message(&site, message);
        if let Err(e) = self.sink.lock().write_line(&line) {
            self.diagnose(&e);
        }
    }

    /// Kind of the active sink. A degraded file sink still reports `File`.
    pub fn current_sink(&self) -> SinkKind {
        self.sink.lock().kind()
    }

    /// File appended to while the file sink is active.
    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    fn announce(&self, status: &str) {
        let mut out = self.console.lock();
        if let Err(e) = writeln!(out, "{status}").and_then(|_| out.flush()) {
            drop(out);
            self.diagnose(&SinkError::Write {
                target: "console".to_string(),
                source: e,
            });
        }
    }

    fn diagnose(&self, error: &SinkError) {
        let mut out = self.diagnostics.lock();
        // Nowhere left to report a failing diagnostics stream.
        let _ = writeln!(out, "{error}").and_then(|_| out.flush());
    }
}

/// Builder for [`Logger`], mainly to redirect its standard streams.
pub struct LoggerBuilder {
    console: SharedWriter,
    diagnostics: SharedWriter,
    log_path: PathBuf,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self {
            console: shared(io::stdout()),
            diagnostics: shared(io::stderr()),
            log_path: PathBuf::from("app.log"),
        }
    }

    pub fn console(mut self, writer: SharedWriter) -> Self {
        self.console = writer;
        self
    }

    pub fn diagnostics(mut self, writer: SharedWriter) -> Self {
        self.diagnostics = writer;
        self
    }

    pub fn log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_path = path.into();
        self
    }

    /// Build with the console sink active.
    pub fn build(self) -> Logger {
        let sink: Box<dyn LogSink> = Box::new(ConsoleSink::new(self.console.clone()));
        Logger {
            sink: Mutex::new(sink),
            console: self.console,
            diagnostics: self.diagnostics,
            log_path: self.log_path,
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
