// CLI module
// Command-line interface, argument parsing and subcommand dispatch

mod args;
mod commands;

pub use args::{BatchArgs, CliArgs, Command, ComputeArgs, PayArgs, StrategyType};
pub use commands::run;

use clap::Parser;

/// Parse command-line arguments using clap
///
/// If parsing fails (invalid arguments, missing required arguments or the
/// --help flag), clap prints the error or help text and exits the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
