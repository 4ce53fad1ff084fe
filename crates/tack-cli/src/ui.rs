//! Status messages for terminal output.
//!
//! Everything here writes to stderr; stdout is reserved for rendered
//! configuration. Messages go through a [`Reporter`] so `--quiet` can
//! silence them in one place.

use owo_colors::OwoColorize;

/// Writes status lines unless the user asked for quiet output.
///
/// # Examples
///
/// ```no_run
/// use tack_cli::ui::Reporter;
///
/// let reporter = Reporter::new(false);
/// reporter.info("Checking production configuration...");
/// reporter.success("Configuration is valid");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Reporter {
    quiet: bool,
}

impl Reporter {
    /// Create a reporter.
    ///
    /// # Arguments
    ///
    /// * `quiet` - Drop every status line (errors are reported by `main`)
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// Print a success line, see [`success`].
    pub fn success(&self, message: &str) {
        if !self.quiet {
            success(message);
        }
    }

    /// Print an info line, see [`info`].
    pub fn info(&self, message: &str) {
        if !self.quiet {
            info(message);
        }
    }
}

/// Print a success message to stderr.
///
/// # Arguments
///
/// * `message` - Message to display
///
/// # Examples
///
/// ```no_run
/// use tack_cli::ui::success;
///
/// success("Configuration is valid (4 rules, 5 plugins)");
/// ```
pub fn success(message: &str) {
    eprintln!("{} {}", "✓".green().bold(), message);
}

/// Print an info message to stderr.
///
/// # Arguments
///
/// * `message` - Message to display
///
/// # Examples
///
/// ```no_run
/// use tack_cli::ui::info;
///
/// info("Checking development configuration...");
/// ```
pub fn info(message: &str) {
    eprintln!("{} {}", "ℹ".blue().bold(), message);
}
