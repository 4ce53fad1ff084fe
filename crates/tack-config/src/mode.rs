//! Build mode and its resolution from the process environment.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Environment variable the mode is read from.
pub const MODE_ENV_VAR: &str = "NODE_ENV";

/// The only value of [`MODE_ENV_VAR`] that selects a development build.
pub const DEVELOPMENT_TOKEN: &str = "development";

/// Binary build context driving every conditional part of the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Development,
    /// Anything that is not explicitly development builds for production.
    #[default]
    Production,
}

impl Mode {
    /// Map a raw environment value onto a mode.
    ///
    /// Matching is exact and case-sensitive. Unknown values, including the
    /// empty string, resolve to [`Mode::Production`].
    ///
    /// ```
    /// use tack_config::Mode;
    ///
    /// assert_eq!(Mode::from_env_value("development"), Mode::Development);
    /// assert_eq!(Mode::from_env_value("Development"), Mode::Production);
    /// assert_eq!(Mode::from_env_value("dev"), Mode::Production);
    /// assert_eq!(Mode::from_env_value("%%garbage%%"), Mode::Production);
    /// ```
    pub fn from_env_value(value: &str) -> Self {
        if value == DEVELOPMENT_TOKEN {
            Mode::Development
        } else {
            Mode::Production
        }
    }

    /// Resolve the mode from [`MODE_ENV_VAR`].
    ///
    /// Meant to be called once at startup; the result is then passed around
    /// explicitly.
    pub fn from_env() -> Self {
        let Ok(value) = std::env::var(MODE_ENV_VAR) else {
            debug!("{} is not set, building for production", MODE_ENV_VAR);
            return Mode::Production;
        };

        let mode = Self::from_env_value(&value);
        if mode == Mode::Production && !value.is_empty() && value != "production" {
            warn!(
                value = %value,
                "unrecognized {} value, building for production",
                MODE_ENV_VAR
            );
        }
        debug!(%mode, "resolved build mode from {}", MODE_ENV_VAR);
        mode
    }

    pub fn is_development(self) -> bool {
        self == Mode::Development
    }

    pub fn is_production(self) -> bool {
        self == Mode::Production
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Development => "development",
            Mode::Production => "production",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_development_token() {
        assert_eq!(Mode::from_env_value("development"), Mode::Development);
    }

    #[test]
    fn short_alias_is_not_development() {
        assert_eq!(Mode::from_env_value("dev"), Mode::Production);
    }

    #[test]
    fn everything_else_is_production() {
        for value in ["production", "prod", "", " development", "DEV", "x9!?"] {
            assert_eq!(Mode::from_env_value(value), Mode::Production, "{value:?}");
        }
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(Mode::Development).unwrap(),
            serde_json::json!("development")
        );
        assert_eq!(Mode::Production.to_string(), "production");
    }
}
