use serde::{Deserialize, Serialize};

use crate::build::types::FileNameTemplate;

/// Options for the CSS extraction plugin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CssExtractOptions {
    /// Name of the extracted stylesheet
    pub filename: FileNameTemplate,
}

/// A PostCSS plugin applied by the post-processing loader
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "plugin", rename_all = "lowercase")]
pub enum PostCssPlugin {
    /// Vendor prefixing
    Autoprefixer,
    /// Merges identical media queries
    MqPacker,
    /// Minification
    Cssnano {
        /// Preset name (default: "default")
        #[serde(default = "default_cssnano_preset")]
        preset: String,

        /// Strip every comment, including `/*! ... */`
        #[serde(default)]
        discard_all_comments: bool,
    },
}

impl PostCssPlugin {
    /// The production post-processing chain: prefix, pack media queries, minify.
    pub fn production_chain() -> Vec<PostCssPlugin> {
        vec![
            PostCssPlugin::Autoprefixer,
            PostCssPlugin::MqPacker,
            PostCssPlugin::Cssnano {
                preset: default_cssnano_preset(),
                discard_all_comments: true,
            },
        ]
    }

    pub fn package_name(&self) -> &'static str {
        match self {
            PostCssPlugin::Autoprefixer => "autoprefixer",
            PostCssPlugin::MqPacker => "css-mqpacker",
            PostCssPlugin::Cssnano { .. } => "cssnano",
        }
    }
}

fn default_cssnano_preset() -> String {
    "default".to_string()
}
