//! `numsift <FILTER> <FILE>`: filter integers from a text file.

use clap::Parser;
use std::process::ExitCode;

use numsift::cli::commands::process;
use numsift::cli::{self, NumsiftCli};
use numsift::numbers::FilterFactory;

fn main() -> ExitCode {
    let args = match NumsiftCli::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let factory = FilterFactory::new();
            return cli::exit_for_parse_error(e, &format!("Available filters: {}", factory.usage()));
        }
    };

    let settings = cli::load_settings(args.config.as_deref());
    process::run(&args, &settings).unwrap_or_else(cli::exit_for_error)
}
