//! Print command implementation.

use std::io::Write;

use crate::cli::{PrintArgs, PrintFormat};
use crate::commands::utils;
use crate::error::Result;

/// Execute the print command.
///
/// Assembles the configuration for the resolved mode and writes it to
/// stdout as JSON, either in its typed form or in the bundler's shape.
///
/// # Errors
///
/// Returns errors for a missing root, malformed settings, or a failed write.
pub fn execute(args: PrintArgs) -> Result<()> {
    let root = utils::resolve_root(args.root.as_deref())?;
    let mode = utils::resolve_mode(args.mode);
    let config = utils::assemble_for(&root, mode)?;

    let value = match args.format {
        PrintFormat::Typed => config.to_value()?,
        PrintFormat::Webpack => config.to_webpack_value(&root),
    };

    let rendered = if args.compact {
        serde_json::to_string(&value)?
    } else {
        serde_json::to_string_pretty(&value)?
    };

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{rendered}")?;
    stdout.flush()?;
    Ok(())
}
