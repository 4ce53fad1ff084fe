//! Logging infrastructure for the tack CLI.
//!
//! Logs go to stderr so `tack print` output stays machine-readable.
//!
//! The filter is chosen in this order:
//! 1. `--verbose`: DEBUG for tack crates
//! 2. `--quiet`: ERROR only
//! 3. `RUST_LOG`
//! 4. INFO for tack crates
//!
//! # Example
//!
//! ```rust,no_run
//! use tack_cli::logger::init_logger;
//! use tracing::{debug, info};
//!
//! init_logger(false, false, false);
//!
//! info!("assembling build configuration");
//! debug!(root = "site", "loading settings");
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const VERBOSE_FILTER: &str = "tack_cli=debug,tack_config=debug";
const QUIET_FILTER: &str = "tack_cli=error,tack_config=error";
const DEFAULT_FILTER: &str = "tack_cli=info,tack_config=info";

/// Initialize the tracing subscriber from the global CLI flags.
///
/// Call once at startup, before any logging occurs.
///
/// # Arguments
///
/// * `verbose` - Enable debug-level logging (wins over `quiet`)
/// * `quiet` - Only show error-level logs
/// * `no_color` - Disable ANSI colors even on a capable terminal
///
/// # Examples
///
/// ```rust,no_run
/// use tack_cli::logger::init_logger;
///
/// // Default logging (INFO level)
/// init_logger(false, false, false);
///
/// // Quiet mode for scripts
/// init_logger(false, true, false);
/// ```
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    init_logger_with_filter(filter_for(verbose, quiet), no_color);
}

/// Initialize logger with a custom environment filter.
///
/// Useful in tests that need precise control over filtering. Later calls are
/// ignored once a subscriber is installed.
///
/// # Example
///
/// ```rust,no_run
/// use tack_cli::logger::init_logger_with_filter;
/// use tracing_subscriber::EnvFilter;
///
/// init_logger_with_filter(EnvFilter::new("tack_config=trace"), true);
/// ```
pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color && should_use_colors())
        .compact();

    // A second initialization (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

fn filter_for(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Check if colored output should be enabled.
///
/// `NO_COLOR` disables colors, `FORCE_COLOR` forces them; otherwise stderr
/// terminal capabilities decide.
///
/// # Example
///
/// ```rust,no_run
/// use tack_cli::logger::should_use_colors;
///
/// if should_use_colors() {
///     eprintln!("\x1b[32mready\x1b[0m");
/// }
/// ```
pub fn should_use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }

    console::Term::stderr().features().colors_supported()
}
