//! Error types for configuration validation and loading.

use std::path::PathBuf;

use thiserror::Error;

use crate::mode::Mode;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Schema validation errors (no filesystem checks)
    #[error("invalid file pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("rule `{pattern}` has no loader steps")]
    EmptyPipeline { pattern: String },

    #[error("no entry specified")]
    MissingEntry,

    #[error("dev server port must be non-zero")]
    InvalidPort,

    #[error("output template `{template}` does not follow the {mode} hashing policy")]
    HashPolicy { template: String, mode: Mode },

    #[error("copy pattern has an empty `{side}` path")]
    EmptyCopyPath { side: &'static str },

    // Filesystem validation errors (for CLI use)
    #[error("{kind} not found: {}", path.display())]
    PathNotFound { kind: &'static str, path: PathBuf },

    // Settings loading errors
    #[error("invalid settings: {0}")]
    Settings(#[from] figment::Error),

    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
