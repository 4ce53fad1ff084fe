//! Command-line front end for `tack-config`.
//!
//! - [`cli`] - Argument definitions
//! - `commands` - `print` and `check` implementations
//! - [`error`] - CLI error types and miette conversion
//! - [`logger`] - Structured logging with tracing
//! - [`ui`] - Status messages on stderr

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result};
