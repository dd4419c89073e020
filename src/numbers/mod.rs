//! Integer filtering pipeline.
//!
//! A [`NumberProcessor`] pulls numbers from a [`NumberReader`], keeps those
//! accepted by a [`NumberFilter`] and fans each one out to every registered
//! [`NumberObserver`] in order. Filters are built by name through the open
//! [`FilterFactory`] registry.

pub mod error;
pub mod factory;
pub mod filter;
pub mod observer;
pub mod processor;
pub mod reader;

/// A value read from input text.
pub type Number = i32;

pub use error::{FilterError, NumberError, NumberResult, ObserverError};
pub use factory::{FilterArgs, FilterCreator, FilterFactory, FilterSpec};
pub use filter::{EvenFilter, GreaterThanFilter, NumberFilter, OddFilter};
pub use observer::{CountObserver, NumberObserver, PrintObserver};
pub use processor::{NumberProcessor, RunSummary};
pub use reader::{FileReader, NumberReader, ReadReport, SkipReason, SkippedToken, parse_numbers};
