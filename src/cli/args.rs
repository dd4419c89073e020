//! CLI argument parsing using clap.
//!
//! Contains the argument structs for the `numsift` and `sinklog` binaries.

use clap::{
    Parser,
    builder::styling::{AnsiColor, Effects, Styles},
};
use std::path::PathBuf;

fn clap_cargo_style() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default())
}

/// Filter integers from a text file
#[derive(Parser, Debug)]
#[command(
    name = "numsift",
    version = env!("CARGO_PKG_VERSION"),
    about = "Filter integers from a text file and report them",
    long_about = "Read whitespace-separated integers from FILE, keep those matching FILTER, \
                  print each kept number and the total count.",
    after_help = "Examples:\n  numsift EVEN numbers.txt\n  numsift ODD numbers.txt\n  numsift GT10 numbers.txt\n  numsift GT-5 numbers.txt",
    styles = clap_cargo_style()
)]
pub struct NumsiftCli {
    /// Path to a settings TOML file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Filter to apply: EVEN, ODD or GT<n>
    #[arg(value_name = "FILTER")]
    pub filter: String,

    /// Text file with whitespace-separated integers
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

/// Drive the switchable-sink logger through a fixed script
#[derive(Parser, Debug)]
#[command(
    name = "sinklog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Demonstrate switching log output between console, file and nowhere",
    after_help = "Examples:\n  sinklog\n  sinklog file\n  sinklog NONE",
    styles = clap_cargo_style()
)]
pub struct SinklogCli {
    /// Path to a settings TOML file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Initial sink: console, file or none (case-insensitive; anything else means console)
    #[arg(value_name = "SINK")]
    pub sink: Option<String>,
}
