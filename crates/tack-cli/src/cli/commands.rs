use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::enums::*;

/// Available tack subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the assembled configuration as JSON
    ///
    /// Writes to stdout; logs and status messages go to stderr.
    Print(PrintArgs),

    /// Validate the assembled configuration against the project tree
    ///
    /// Checks patterns and naming policy, then that the entry, HTML template
    /// and static asset directories exist.
    Check(CheckArgs),
}

/// Arguments for the print command
#[derive(Args, Debug)]
pub struct PrintArgs {
    /// Build mode (overrides NODE_ENV)
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Project root (defaults to the current directory)
    #[arg(short, long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Output shape
    ///
    /// - typed: the tagged configuration structure
    /// - webpack: the object shape the bundler runtime consumes
    #[arg(short, long, value_enum, default_value = "webpack")]
    pub format: PrintFormat,

    /// Emit single-line JSON
    #[arg(long)]
    pub compact: bool,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Build mode (overrides NODE_ENV)
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Project root (defaults to the current directory)
    #[arg(short, long, value_name = "DIR")]
    pub root: Option<PathBuf>,
}
