//! `sinklog [SINK]`: walk the switchable-sink logger through its demo script.

use clap::Parser;
use std::process::ExitCode;

use numsift::cli::commands::sink_demo;
use numsift::cli::{self, SinklogCli};

fn main() -> ExitCode {
    let args = match SinklogCli::try_parse() {
        Ok(args) => args,
        Err(e) => return cli::exit_for_parse_error(e, ""),
    };

    let settings = cli::load_settings(args.config.as_deref());
    sink_demo::run(&args, &settings).unwrap_or_else(cli::exit_for_error)
}
