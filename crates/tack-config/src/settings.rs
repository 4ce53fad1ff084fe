//! Project settings layered from defaults, `tack.toml` and the environment.

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::dev::DEFAULT_DEV_SERVER_PORT;
use crate::error::Result;
use crate::layout::ProjectLayout;

/// Settings file looked up in the project root
pub const SETTINGS_FILE: &str = "tack.toml";

/// Prefix for environment overrides, e.g. `TACK_DEV_SERVER_PORT`
pub const ENV_PREFIX: &str = "TACK_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSettings {
    #[serde(default)]
    pub layout: ProjectLayout,

    #[serde(default = "default_dev_server_port")]
    pub dev_server_port: u16,
}

impl Default for ProjectSettings {
    fn default() -> Self {
        Self {
            layout: ProjectLayout::default(),
            dev_server_port: DEFAULT_DEV_SERVER_PORT,
        }
    }
}

impl ProjectSettings {
    /// Load settings for the project at `root`.
    ///
    /// Priority: environment variables > `tack.toml` > defaults
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Settings` when a source is malformed or a
    /// value has the wrong type.
    pub fn load(root: impl AsRef<Path>) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        let file = root.as_ref().join(SETTINGS_FILE);
        if file.exists() {
            debug!(path = %file.display(), "loading settings file");
            figment = figment.merge(Toml::file(&file));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX));

        let settings: Self = figment.extract()?;
        debug!(
            port = settings.dev_server_port,
            context = %settings.layout.context.display(),
            "resolved project settings"
        );
        Ok(settings)
    }
}

fn default_dev_server_port() -> u16 {
    DEFAULT_DEV_SERVER_PORT
}
