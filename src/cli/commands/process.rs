//! Number processing command for the `numsift` binary.

use std::process::ExitCode;

use crate::cli::args::NumsiftCli;
use crate::config::Settings;
use crate::numbers::{
    CountObserver, FileReader, FilterFactory, NumberObserver, NumberProcessor, PrintObserver,
};

/// Usage lines printed after argument or filter errors.
pub fn usage_hint(factory: &FilterFactory) -> String {
    format!(
        "Usage: numsift <filter> <file>\nAvailable filters: {}",
        factory.usage()
    )
}

/// Build the filter, then run the pipeline with print and count observers.
///
/// Filter construction failures exit with 1 before any input is read. A
/// missing or unreadable input file is reported by the processor and still
/// exits with success.
pub fn run(cli: &NumsiftCli, settings: &Settings) -> anyhow::Result<ExitCode> {
    let factory = FilterFactory::new();

    let filter = match factory.create_from_token(&cli.filter) {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{}", usage_hint(&factory));
            return Ok(ExitCode::from(1));
        }
    };
    crate::debug_event!(
        "numsift",
        "filter",
        "{} -> {}",
        cli.filter,
        filter.describe()
    );
    crate::cli::trace_settings(settings);

    let reader = FileReader::new();
    let mut print = PrintObserver::stdout();
    let mut count = CountObserver::stdout();
    let observers: Vec<&mut dyn NumberObserver> = vec![&mut print, &mut count];

    let mut processor = NumberProcessor::new(&reader, filter.as_ref(), observers);
    if let Ok(summary) = processor.run(&cli.file) {
        crate::debug_event!("numsift", "summary", "{summary:?}");
    }

    Ok(ExitCode::SUCCESS)
}
