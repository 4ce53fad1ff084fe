//! Typed build configuration handed to the bundler runtime.

mod css;
mod html;
mod plugin;
mod rules;
mod types;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;

pub use css::{CssExtractOptions, PostCssPlugin};
pub use html::{HtmlMinify, HtmlTemplateOptions};
pub use plugin::{CopyOptions, CopyPattern, PluginDescriptor};
pub use rules::{
    BABEL_PRESET_ENV, FONT_NAME_TEMPLATE, FONT_PATTERN, FilePattern, IMAGE_PATTERN, LoaderStep,
    NODE_MODULES_PATTERN, Rule, SCRIPT_PATTERN, STYLE_PATTERN,
};
pub use types::{
    ChunkSelection, FileNameTemplate, HASH_TOKEN, Minimizer, OptimizationPolicy, SourceMapPolicy,
    SplitChunks,
};

use crate::dev::DevServerPolicy;
use crate::error::{ConfigError, Result};
use crate::mode::Mode;

/// Complete configuration for one build, derived from a single [`Mode`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfiguration {
    pub mode: Mode,

    /// Base directory the entry and HTML template resolve against
    pub context: PathBuf,

    /// Entry script, relative to `context`
    pub entry: String,

    pub output: OutputOptions,

    pub optimization: OptimizationPolicy,

    pub source_maps: SourceMapPolicy,

    pub dev_server: DevServerPolicy,

    /// Processing pipelines, matched in order
    pub rules: Vec<Rule>,

    /// Plugins, instantiated in order
    pub plugins: Vec<PluginDescriptor>,
}

/// Where and under which name the script bundle is written
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputOptions {
    pub filename: FileNameTemplate,
    pub path: PathBuf,
}

impl BuildConfiguration {
    /// Create from serde_json::Value
    ///
    /// # Example
    ///
    /// ```
    /// use tack_config::{assemble, BuildConfiguration, Mode};
    ///
    /// let value = assemble(Mode::Production).to_value().unwrap();
    /// let config = BuildConfiguration::from_value(value).unwrap();
    /// assert_eq!(config, assemble(Mode::Production));
    /// ```
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(ConfigError::from)
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(ConfigError::from)
    }

    /// First rule a module at `path` would go through, if any.
    pub fn rule_for(&self, path: &str) -> Result<Option<&Rule>> {
        for rule in &self.rules {
            if rule.applies_to(path)? {
                return Ok(Some(rule));
            }
        }
        Ok(None)
    }

    /// Look up a plugin by its runtime name.
    pub fn plugin(&self, name: &str) -> Option<&PluginDescriptor> {
        self.plugins.iter().find(|plugin| plugin.name() == name)
    }

    /// Every file name template this configuration emits.
    pub fn output_templates(&self) -> impl Iterator<Item = &FileNameTemplate> {
        std::iter::once(&self.output.filename).chain(self.plugins.iter().filter_map(
            |plugin| match plugin {
                PluginDescriptor::CssExtract(options) => Some(&options.filename),
                _ => None,
            },
        ))
    }
}
