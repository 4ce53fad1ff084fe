//! Mode-driven build configuration for a web front-end project.
//!
//! [`assemble`] turns a [`Mode`] into a [`BuildConfiguration`]: entry, output
//! naming, optimization, processing pipelines and plugins. The configuration
//! can be validated ([`SchemaValidator`], [`FsValidator`]) and rendered into
//! the object shape the bundler runtime expects
//! ([`BuildConfiguration::to_webpack_value`]).

pub mod assemble;
pub mod build;
pub mod dev;
pub mod error;
pub mod layout;
pub mod mode;
mod render;
pub mod settings;
pub mod validation;

// Re-export main types
pub use assemble::*;
pub use build::*;
pub use dev::*;
pub use error::*;
pub use layout::*;
pub use mode::*;
pub use settings::*;

pub use validation::{ConfigValidator, FsValidator, SchemaValidator, validate_fs, validate_schema};
