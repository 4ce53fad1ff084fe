//! Check command implementation.
//!
//! Validates the assembled configuration without handing it to the bundler.

use tack_config::{ConfigValidator, FsValidator};

use crate::cli::CheckArgs;
use crate::commands::utils;
use crate::error::Result;
use crate::ui::Reporter;

/// Execute the check command.
///
/// # Validation Steps
///
/// 1. Load settings and assemble the configuration for the resolved mode
/// 2. Check patterns, pipelines, port and naming policy
/// 3. Check the entry, HTML template and static asset directories exist
///
/// Status lines go through `reporter`, so `--quiet` leaves only errors.
///
/// # Errors
///
/// Returns the first validation failure.
pub fn execute(args: CheckArgs, reporter: Reporter) -> Result<()> {
    let root = utils::resolve_root(args.root.as_deref())?;
    let mode = utils::resolve_mode(args.mode);

    reporter.info(&format!("Checking {mode} configuration..."));
    let config = utils::assemble_for(&root, mode)?;

    FsValidator::new(&root).validate(&config)?;

    reporter.success(&format!(
        "Configuration is valid ({} rules, {} plugins)",
        config.rules.len(),
        config.plugins.len()
    ));
    Ok(())
}
