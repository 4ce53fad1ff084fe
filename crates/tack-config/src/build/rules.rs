use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::build::css::PostCssPlugin;
use crate::error::{ConfigError, Result};

pub const STYLE_PATTERN: &str = r"\.s[ac]ss$";
pub const IMAGE_PATTERN: &str = r"\.(png|jpg|svg|gif)$";
pub const FONT_PATTERN: &str = r"\.(ttf|woff|woff2|eot)$";
pub const SCRIPT_PATTERN: &str = r"\.js$";
pub const NODE_MODULES_PATTERN: &str = "node_modules";

pub const BABEL_PRESET_ENV: &str = "@babel/preset-env";

/// Fonts keep their source-relative location in the output.
pub const FONT_NAME_TEMPLATE: &str = "[path][name].[ext]";

/// Regular expression selecting module paths, kept as source text
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilePattern(String);

impl FilePattern {
    pub fn new(source: impl Into<String>) -> Self {
        Self(source.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn compile(&self) -> Result<Regex> {
        Regex::new(&self.0).map_err(|source| ConfigError::InvalidPattern {
            pattern: self.0.clone(),
            source,
        })
    }

    pub fn is_match(&self, path: &str) -> Result<bool> {
        Ok(self.compile()?.is_match(path))
    }
}

impl fmt::Display for FilePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered transform steps for one class of source file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub test: FilePattern,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<FilePattern>,

    /// Listed in declaration order; the bundler applies them last to first
    pub steps: Vec<LoaderStep>,
}

impl Rule {
    pub fn new(test: &str, steps: Vec<LoaderStep>) -> Self {
        Self {
            test: FilePattern::new(test),
            exclude: None,
            steps,
        }
    }

    pub fn excluding(mut self, pattern: &str) -> Self {
        self.exclude = Some(FilePattern::new(pattern));
        self
    }

    /// Whether a module at `path` goes through this rule.
    pub fn applies_to(&self, path: &str) -> Result<bool> {
        if !self.test.is_match(path)? {
            return Ok(false);
        }
        match &self.exclude {
            Some(exclude) => Ok(!exclude.is_match(path)?),
            None => Ok(true),
        }
    }

    pub fn loader_names(&self) -> Vec<&'static str> {
        self.steps.iter().map(LoaderStep::loader_name).collect()
    }
}

/// One transform step inside a pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "loader", rename_all = "kebab-case")]
pub enum LoaderStep {
    /// Hands compiled CSS to the extraction plugin
    CssExtract {
        /// Hot module replacement for extracted styles
        #[serde(default)]
        hmr: bool,
        /// Reload every stylesheet on change
        #[serde(default)]
        reload_all: bool,
    },
    Css,
    Sass,
    /// Post-processing chain
    #[serde(rename = "postcss")]
    PostCss {
        #[serde(default)]
        plugins: Vec<PostCssPlugin>,
    },
    /// Syntax transform
    Babel {
        #[serde(default)]
        presets: Vec<String>,
    },
    /// Lint pass
    Eslint,
    /// Emits the file as-is and exports its URL
    File {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },
}

impl LoaderStep {
    pub fn babel_preset_env() -> Self {
        LoaderStep::Babel {
            presets: vec![BABEL_PRESET_ENV.to_string()],
        }
    }

    pub fn loader_name(&self) -> &'static str {
        match self {
            LoaderStep::CssExtract { .. } => "mini-css-extract-plugin/loader",
            LoaderStep::Css => "css-loader",
            LoaderStep::Sass => "sass-loader",
            LoaderStep::PostCss { .. } => "postcss-loader",
            LoaderStep::Babel { .. } => "babel-loader",
            LoaderStep::Eslint => "eslint-loader",
            LoaderStep::File { .. } => "file-loader",
        }
    }
}
