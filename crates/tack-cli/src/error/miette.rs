//! Miette diagnostic conversion for CLI errors.

use miette::Report;
use tack_config::ConfigError;

use crate::error::CliError;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Config(e) => config_error_to_miette(e),
        CliError::RootNotFound(path) => miette::miette!(
            help = "Pass an existing directory with --root",
            "Project root not found: {}",
            path.display()
        ),
        _ => miette::miette!("{}", err),
    }
}

/// Convert ConfigError to miette Report
pub fn config_error_to_miette(err: ConfigError) -> Report {
    match err {
        ConfigError::PathNotFound { kind, path } => miette::miette!(
            help = "Create it, or point the layout elsewhere in tack.toml",
            "{} not found: {}",
            kind,
            path.display()
        ),
        ConfigError::Settings(e) => miette::miette!(
            help = "Check tack.toml syntax and TACK_* environment variables",
            "Invalid settings: {}",
            e
        ),
        ConfigError::HashPolicy { template, mode } => miette::miette!(
            help = "Production bundles need a [hash] token; development bundles must not have one",
            "Output template `{}` does not follow the {} hashing policy",
            template,
            mode
        ),
        _ => miette::miette!("Configuration error: {}", err),
    }
}
