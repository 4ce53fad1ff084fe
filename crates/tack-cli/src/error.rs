//! Error handling for the tack CLI.
//!
//! `CliError` wraps the configuration library's errors together with the
//! failures only the CLI can hit (I/O on stdout, JSON encoding, bad paths).
//! `main` converts it into a miette report for display.

mod miette;

use std::path::PathBuf;
use thiserror::Error;

pub use self::miette::cli_error_to_miette;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Loading or validating the build configuration failed
    #[error("Configuration error: {0}")]
    Config(#[from] tack_config::ConfigError),

    /// Project root does not exist or is not a directory
    #[error("Project root not found: {}", .0.display())]
    RootNotFound(PathBuf),

    /// I/O errors from file system operations or stdout
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = CliError> = std::result::Result<T, E>;
