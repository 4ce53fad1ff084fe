//! Command-line interface definition for tack.
//!
//! - `tack print` - Assemble the configuration and print it as JSON
//! - `tack check` - Assemble the configuration and validate it against the project tree

mod commands;
pub mod enums;

use clap::Parser;

pub use commands::{CheckArgs, Command, PrintArgs};
pub use enums::*;

/// tack - mode-driven front-end build configuration
#[derive(Parser, Debug)]
#[command(
    name = "tack",
    version,
    about = "Assemble front-end build configuration for development or production",
    long_about = "tack builds the bundler configuration for a front-end project.\n\
                  The build mode comes from NODE_ENV (or --mode); paths and the dev\n\
                  server port can be adjusted in tack.toml or TACK_* variables."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
