//! Command implementations for the two binaries.

pub mod process;
pub mod sink_demo;
