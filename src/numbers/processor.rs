//! Reader → filter → observer fan-out.

use std::path::Path;

use super::Number;
use super::error::NumberResult;
use super::filter::NumberFilter;
use super::observer::NumberObserver;
use super::reader::NumberReader;

/// Counters for one completed run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Numbers returned by the reader
    pub read: usize,
    /// Numbers rejected by the filter
    pub rejected: usize,
    /// Numbers passed to observers
    pub accepted: usize,
    /// Observer callbacks that returned an error
    pub observer_failures: usize,
}

/// Drives a single reader, filter and ordered observer list.
///
/// Observers are borrowed for the lifetime of the processor and notified in
/// the order they were given.
pub struct NumberProcessor<'a> {
    reader: &'a dyn NumberReader,
    filter: &'a dyn NumberFilter,
    observers: Vec<&'a mut dyn NumberObserver>,
}

impl<'a> NumberProcessor<'a> {
    pub fn new(
        reader: &'a dyn NumberReader,
        filter: &'a dyn NumberFilter,
        observers: Vec<&'a mut dyn NumberObserver>,
    ) -> Self {
        Self {
            reader,
            filter,
            observers,
        }
    }

    /// Process every number in `path`.
    ///
    /// `on_finished` is sent exactly once after the last number, but only
    /// when the read succeeded. A read failure is logged and returned without
    /// finishing the observers.
    pub fn run(&mut self, path: &Path) -> NumberResult<RunSummary> {
        let numbers = self.reader.read(path).inspect_err(|e| {
            tracing::error!("Error during processing: {e}");
        })?;

        let mut summary = RunSummary {
            read: numbers.len(),
            ..RunSummary::default()
        };

        for number in numbers {
            if self.filter.keep(number) {
                summary.accepted += 1;
                crate::debug_event!("processor", "accepted", "{number}");
                summary.observer_failures += self.notify_number(number);
            } else {
                summary.rejected += 1;
            }
        }
        summary.observer_failures += self.notify_finished();

        crate::log_event!(
            "processor",
            "finished",
            "{} with {}: {} read, {} accepted",
            path.display(),
            self.filter.describe(),
            summary.read,
            summary.accepted
        );
        Ok(summary)
    }

    fn notify_number(&mut self, number: Number) -> usize {
        let mut failures = 0;
        for observer in self.observers.iter_mut() {
            if let Err(e) = observer.on_number(number) {
                tracing::error!("[processor] {e}");
                failures += 1;
            }
        }
        failures
    }

    fn notify_finished(&mut self) -> usize {
        let mut failures = 0;
        for observer in self.observers.iter_mut() {
            if let Err(e) = observer.on_finished() {
                tracing::error!("[processor] {e}");
                failures += 1;
            }
        }
        failures
    }
}
