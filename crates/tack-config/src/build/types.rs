use serde::{Deserialize, Serialize};
use std::fmt;

use crate::mode::Mode;

/// Placeholder the bundler replaces with a content hash.
pub const HASH_TOKEN: &str = "[hash]";

/// Output file name, optionally qualified with a content hash for cache busting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileNameTemplate {
    pub name: String,
    pub ext: String,
    #[serde(default)]
    pub hashed: bool,
}

impl FileNameTemplate {
    /// `name.ext` in development, `name.[hash].ext` in production.
    pub fn for_mode(name: impl Into<String>, ext: impl Into<String>, mode: Mode) -> Self {
        Self {
            name: name.into(),
            ext: ext.into(),
            hashed: mode.is_production(),
        }
    }

    pub fn render(&self) -> String {
        if self.hashed {
            format!("{}.{}.{}", self.name, HASH_TOKEN, self.ext)
        } else {
            format!("{}.{}", self.name, self.ext)
        }
    }
}

impl fmt::Display for FileNameTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Source map generation policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceMapPolicy {
    /// Source maps embedded in the bundle
    Inline,
    /// No source maps
    Disabled,
}

impl SourceMapPolicy {
    pub fn for_mode(mode: Mode) -> Self {
        match mode {
            Mode::Development => SourceMapPolicy::Inline,
            Mode::Production => SourceMapPolicy::Disabled,
        }
    }

    pub fn is_enabled(self) -> bool {
        matches!(self, SourceMapPolicy::Inline)
    }
}

/// Which chunks the splitter considers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkSelection {
    #[default]
    All,
}

impl ChunkSelection {
    pub fn as_str(self) -> &'static str {
        match self {
            ChunkSelection::All => "all",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SplitChunks {
    #[serde(default)]
    pub chunks: ChunkSelection,
}

/// Code minimizers run at the end of a production build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Minimizer {
    Terser,
}

impl Minimizer {
    pub fn plugin_name(self) -> &'static str {
        match self {
            Minimizer::Terser => "TerserWebpackPlugin",
        }
    }
}

/// Chunk splitting and minification settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizationPolicy {
    /// Chunk splitting, always enabled
    #[serde(default)]
    pub split_chunks: SplitChunks,

    /// `None` leaves the bundler's default (no minification) in place
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimizer: Option<Vec<Minimizer>>,
}

impl OptimizationPolicy {
    pub fn for_mode(mode: Mode) -> Self {
        Self {
            split_chunks: SplitChunks {
                chunks: ChunkSelection::All,
            },
            minimizer: mode.is_production().then(|| vec![Minimizer::Terser]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names_follow_mode() {
        let dev = FileNameTemplate::for_mode("scripts", "js", Mode::Development);
        let prod = FileNameTemplate::for_mode("scripts", "js", Mode::Production);
        assert_eq!(dev.render(), "scripts.js");
        assert_eq!(prod.render(), "scripts.[hash].js");
        assert_eq!(prod.to_string(), prod.render());
    }

    #[test]
    fn minimizer_only_in_production() {
        assert!(OptimizationPolicy::for_mode(Mode::Development).minimizer.is_none());
        assert_eq!(
            OptimizationPolicy::for_mode(Mode::Production).minimizer,
            Some(vec![Minimizer::Terser])
        );
    }
}
