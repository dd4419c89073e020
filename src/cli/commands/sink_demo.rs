//! Scripted demo for the `sinklog` binary.

use std::process::ExitCode;

use crate::cli::args::SinklogCli;
use crate::config::Settings;
use crate::log_at;
use crate::sink::{Logger, SinkKind};

/// Resolve the initial sink from the optional CLI value, printing which
/// source was used.
pub fn initial_sink(value: Option<&str>) -> SinkKind {
    match value {
        Some(value) => {
            println!("Command line argument received: {value}");
            SinkKind::parse_lenient(value)
        }
        None => {
            println!("No command line argument provided. Using default console output.");
            SinkKind::Console
        }
    }
}

/// Run the fixed sequence of sink switches and log calls.
pub fn run_script(logger: &Logger, initial: SinkKind) {
    logger.set_sink(initial);
    log_at!(logger, "First test message.");
    log_at!(logger, "Second test message.");

    logger.set_sink(SinkKind::File);
    log_at!(logger, "Message to file.");

    logger.set_sink(SinkKind::None);
    log_at!(logger, "This message should go nowhere.");

    logger.set_sink(SinkKind::Console);
    log_at!(logger, "Back to console output.");
}

pub fn run(cli: &SinklogCli, settings: &Settings) -> anyhow::Result<ExitCode> {
    crate::cli::trace_settings(settings);

    let initial = initial_sink(cli.sink.as_deref());
    let logger = Logger::new(&settings.sink.log_file);
    run_script(&logger, initial);

    println!("Program finished.");
    Ok(ExitCode::SUCCESS)
}
