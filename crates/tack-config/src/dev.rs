//! Development server policy.

use serde::{Deserialize, Serialize};

use crate::mode::Mode;

pub const DEFAULT_DEV_SERVER_PORT: u16 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevServerPolicy {
    #[serde(default = "default_port")]
    pub port: u16,

    /// Hot module replacement
    #[serde(default)]
    pub hot: bool,
}

impl DevServerPolicy {
    /// Hot reload is only enabled for development builds.
    pub fn for_mode(mode: Mode, port: u16) -> Self {
        Self {
            port,
            hot: mode.is_development(),
        }
    }
}

fn default_port() -> u16 {
    DEFAULT_DEV_SERVER_PORT
}
