use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::build::css::CssExtractOptions;
use crate::build::html::HtmlTemplateOptions;

/// A plugin the bundler runtime instantiates, with its typed options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "plugin", content = "options", rename_all = "kebab-case")]
pub enum PluginDescriptor {
    /// Empties the output directory before each build
    Clean,
    /// Emits an HTML page with the bundles injected
    HtmlTemplate(HtmlTemplateOptions),
    /// Copies static asset directories into the output
    CopyAssets(CopyOptions),
    /// Writes extracted CSS to its own file
    CssExtract(CssExtractOptions),
    /// Reports bundle composition and sizes
    BundleAnalyzer,
}

impl PluginDescriptor {
    /// Name of the plugin as the bundler runtime knows it
    pub fn name(&self) -> &'static str {
        match self {
            PluginDescriptor::Clean => "CleanWebpackPlugin",
            PluginDescriptor::HtmlTemplate(_) => "HtmlWebpackPlugin",
            PluginDescriptor::CopyAssets(_) => "CopyWebpackPlugin",
            PluginDescriptor::CssExtract(_) => "MiniCssExtractPlugin",
            PluginDescriptor::BundleAnalyzer => "BundleAnalyzerPlugin",
        }
    }
}

/// Options for the static asset copy plugin
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CopyOptions {
    /// Copied in order
    #[serde(default)]
    pub patterns: Vec<CopyPattern>,
}

/// One source directory copied to one destination, both relative to the project root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyPattern {
    pub from: PathBuf,
    pub to: PathBuf,
}

impl CopyPattern {
    pub fn new(from: impl Into<PathBuf>, to: impl Into<PathBuf>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}
