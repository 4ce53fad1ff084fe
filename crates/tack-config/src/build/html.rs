use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::mode::Mode;

/// HTML template injection options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HtmlTemplateOptions {
    /// Template path, relative to the build context
    pub template: PathBuf,

    /// Minification of the emitted HTML
    #[serde(default)]
    pub minify: HtmlMinify,
}

/// HTML minification switches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HtmlMinify {
    #[serde(default)]
    pub collapse_whitespace: bool,

    #[serde(default)]
    pub remove_comments: bool,
}

impl HtmlMinify {
    /// Both switches are on in production and off in development.
    pub fn for_mode(mode: Mode) -> Self {
        let enabled = mode.is_production();
        Self {
            collapse_whitespace: enabled,
            remove_comments: enabled,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.collapse_whitespace || self.remove_comments
    }
}
