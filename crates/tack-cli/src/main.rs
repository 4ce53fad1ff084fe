//! tack CLI - assembles the build configuration for the current mode.
//!
//! Handles argument parsing, logging initialization, and command dispatch.

use clap::Parser;
use miette::Result;
use tack_cli::{cli, commands, error, logger, ui};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);

    let reporter = ui::Reporter::new(args.quiet);
    let result = match args.command {
        cli::Command::Print(print_args) => commands::print_execute(print_args),
        cli::Command::Check(check_args) => commands::check_execute(check_args, reporter),
    };

    result.map_err(error::cli_error_to_miette)
}
