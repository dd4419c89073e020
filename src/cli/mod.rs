//! CLI module shared by the `numsift` and `sinklog` binaries.
//!
//! Provides argument parsing, settings loading and command dispatch so the
//! binaries stay thin.

pub mod args;
pub mod commands;

pub use args::{NumsiftCli, SinklogCli};

use std::path::Path;
use std::process::ExitCode;

use clap::error::ErrorKind;

use crate::config::Settings;

/// Load settings and start diagnostic logging.
///
/// A broken settings source is reported and replaced by defaults.
pub fn load_settings(config: Option<&Path>) -> Settings {
    let settings = Settings::load(config).unwrap_or_else(|e| {
        eprintln!("Configuration error: {e}");
        eprintln!("Using default configuration.");
        Settings::default()
    });
    crate::logging::init_with_config(&settings.logging);
    settings
}

/// Dump the active settings at trace level.
///
/// Rendering is skipped unless trace is enabled, and a rendering failure is
/// only logged.
pub fn trace_settings(settings: &Settings) {
    if !tracing::enabled!(tracing::Level::TRACE) {
        return;
    }
    match settings.to_toml() {
        Ok(rendered) => tracing::trace!("settings:\n{rendered}"),
        Err(e) => tracing::warn!("Could not render settings: {e}"),
    }
}

/// Report a clap parse failure.
///
/// Help and version requests exit with 0. Every other failure prints the
/// clap message followed by `hint` and exits with 1.
pub fn exit_for_parse_error(error: clap::Error, hint: &str) -> ExitCode {
    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = error.print();
            ExitCode::SUCCESS
        }
        _ => {
            let _ = error.print();
            if !hint.is_empty() {
                eprintln!("{hint}");
            }
            ExitCode::from(1)
        }
    }
}

/// Print a command failure and map it to exit code 1.
pub fn exit_for_error(error: anyhow::Error) -> ExitCode {
    eprintln!("Error: {error:#}");
    ExitCode::from(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::io;
    use std::sync::Arc;
    use tracing::Level;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn traced_at(level: Level) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || trace_settings(&Settings::default()));

        let bytes = captured.0.lock().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_trace_settings_only_renders_at_trace() {
        let output = traced_at(Level::TRACE);
        assert!(output.contains("settings:"));
        assert!(output.contains("log_file = \"app.log\""));

        assert!(traced_at(Level::DEBUG).is_empty());
    }
}
