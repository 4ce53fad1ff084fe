//! Fixed project paths the configuration refers to.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::build::CopyPattern;

/// Where things live inside a project, relative to its root.
///
/// `entry` and `html_template` are resolved by the bundler against
/// `context`; everything else is relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLayout {
    /// Base directory for the entry and the HTML template
    #[serde(default = "default_context")]
    pub context: PathBuf,

    /// Entry script, relative to `context`
    #[serde(default = "default_entry")]
    pub entry: String,

    /// Output directory for emitted bundles
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// HTML template, relative to `context`
    #[serde(default = "default_html_template")]
    pub html_template: PathBuf,

    /// Static asset directories copied verbatim into the output
    #[serde(default = "default_static_assets")]
    pub static_assets: Vec<CopyPattern>,
}

impl Default for ProjectLayout {
    fn default() -> Self {
        Self {
            context: default_context(),
            entry: default_entry(),
            output_dir: default_output_dir(),
            html_template: default_html_template(),
            static_assets: default_static_assets(),
        }
    }
}

fn default_context() -> PathBuf {
    PathBuf::from("src")
}

fn default_entry() -> String {
    "./scripts/index.js".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("build")
}

fn default_html_template() -> PathBuf {
    PathBuf::from("index.html")
}

fn default_static_assets() -> Vec<CopyPattern> {
    vec![
        CopyPattern::new("src/img", "build/img"),
        CopyPattern::new("src/favicon", "build/favicon"),
    ]
}
