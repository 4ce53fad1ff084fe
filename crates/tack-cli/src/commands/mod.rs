//! Command implementations for the tack CLI.
//!
//! - [`print`] - Render the assembled configuration to stdout
//! - [`check`] - Validate the assembled configuration against the project tree

pub mod check;
pub mod print;
pub(crate) mod utils;

pub use check::execute as check_execute;
pub use print::execute as print_execute;
