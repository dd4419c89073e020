pub mod cli;
pub mod config;
pub mod logging;
pub mod numbers;
pub mod sink;

pub use config::Settings;
pub use numbers::{
    FilterFactory, Number, NumberFilter, NumberObserver, NumberProcessor, NumberReader,
};
pub use sink::{CallSite, Logger, SinkKind};
