//! Mode-driven assembly of a [`BuildConfiguration`].
//!
//! Assembly is a pure function of the mode and the project layout: no I/O,
//! no global state, and it cannot fail. Every mode-dependent sequence is
//! written out as a complete literal per mode so the final order can be read
//! straight from the source.

use crate::build::{
    BuildConfiguration, CopyOptions, CssExtractOptions, FONT_NAME_TEMPLATE, FONT_PATTERN,
    FileNameTemplate, HtmlMinify, HtmlTemplateOptions, IMAGE_PATTERN, LoaderStep,
    NODE_MODULES_PATTERN, OptimizationPolicy, OutputOptions, PluginDescriptor, PostCssPlugin,
    Rule, SCRIPT_PATTERN, STYLE_PATTERN, SourceMapPolicy,
};
use crate::dev::{DEFAULT_DEV_SERVER_PORT, DevServerPolicy};
use crate::layout::ProjectLayout;
use crate::mode::Mode;
use crate::settings::ProjectSettings;

/// Base name of the emitted script bundle.
pub const SCRIPT_BUNDLE_NAME: &str = "scripts";

/// Base name of the extracted stylesheet.
pub const STYLE_BUNDLE_NAME: &str = "style";

/// Assemble the configuration for the default project layout.
///
/// ```
/// use tack_config::{assemble, Mode};
///
/// let config = assemble(Mode::Development);
/// assert_eq!(config.output.filename.render(), "scripts.js");
/// assert!(config.dev_server.hot);
/// ```
pub fn assemble(mode: Mode) -> BuildConfiguration {
    Assembler::default().assemble(mode)
}

/// Builds configurations for one project layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assembler {
    layout: ProjectLayout,
    dev_server_port: u16,
}

impl Default for Assembler {
    fn default() -> Self {
        Self::new(ProjectLayout::default())
    }
}

impl Assembler {
    pub fn new(layout: ProjectLayout) -> Self {
        Self {
            layout,
            dev_server_port: DEFAULT_DEV_SERVER_PORT,
        }
    }

    pub fn from_settings(settings: &ProjectSettings) -> Self {
        Self::new(settings.layout.clone()).with_dev_server_port(settings.dev_server_port)
    }

    pub fn with_dev_server_port(mut self, port: u16) -> Self {
        self.dev_server_port = port;
        self
    }

    pub fn assemble(&self, mode: Mode) -> BuildConfiguration {
        BuildConfiguration {
            mode,
            context: self.layout.context.clone(),
            entry: self.layout.entry.clone(),
            output: OutputOptions {
                filename: FileNameTemplate::for_mode(SCRIPT_BUNDLE_NAME, "js", mode),
                path: self.layout.output_dir.clone(),
            },
            optimization: OptimizationPolicy::for_mode(mode),
            source_maps: SourceMapPolicy::for_mode(mode),
            dev_server: DevServerPolicy::for_mode(mode, self.dev_server_port),
            rules: vec![
                Rule::new(STYLE_PATTERN, style_steps(mode)),
                Rule::new(IMAGE_PATTERN, vec![LoaderStep::File { name: None }]),
                Rule::new(
                    FONT_PATTERN,
                    vec![LoaderStep::File {
                        name: Some(FONT_NAME_TEMPLATE.to_string()),
                    }],
                ),
                Rule::new(SCRIPT_PATTERN, script_steps(mode)).excluding(NODE_MODULES_PATTERN),
            ],
            plugins: self.plugins(mode),
        }
    }

    fn plugins(&self, mode: Mode) -> Vec<PluginDescriptor> {
        let html = PluginDescriptor::HtmlTemplate(HtmlTemplateOptions {
            template: self.layout.html_template.clone(),
            minify: HtmlMinify::for_mode(mode),
        });
        let copy = PluginDescriptor::CopyAssets(CopyOptions {
            patterns: self.layout.static_assets.clone(),
        });
        let css = PluginDescriptor::CssExtract(CssExtractOptions {
            filename: FileNameTemplate::for_mode(STYLE_BUNDLE_NAME, "css", mode),
        });

        match mode {
            Mode::Development => vec![PluginDescriptor::Clean, html, copy, css],
            Mode::Production => vec![
                PluginDescriptor::Clean,
                html,
                copy,
                css,
                PluginDescriptor::BundleAnalyzer,
            ],
        }
    }
}

fn style_steps(mode: Mode) -> Vec<LoaderStep> {
    let extract = LoaderStep::CssExtract {
        hmr: mode.is_development(),
        reload_all: true,
    };

    match mode {
        Mode::Development => vec![extract, LoaderStep::Css, LoaderStep::Sass],
        // Post-processing runs on the compiled Sass output, so it sits before
        // the Sass step in declaration order.
        Mode::Production => vec![
            extract,
            LoaderStep::Css,
            LoaderStep::PostCss {
                plugins: PostCssPlugin::production_chain(),
            },
            LoaderStep::Sass,
        ],
    }
}

fn script_steps(mode: Mode) -> Vec<LoaderStep> {
    match mode {
        Mode::Development => vec![LoaderStep::babel_preset_env(), LoaderStep::Eslint],
        Mode::Production => vec![LoaderStep::babel_preset_env()],
    }
}
