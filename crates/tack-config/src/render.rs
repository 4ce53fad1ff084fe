//! Rendering into the object shape the bundler runtime consumes.

use serde_json::{Map, Value, json};
use std::path::Path;

use crate::build::{
    BuildConfiguration, LoaderStep, PluginDescriptor, PostCssPlugin, Rule, SourceMapPolicy,
};

impl BuildConfiguration {
    /// Render as the bundler's configuration object.
    ///
    /// `context`, the output path and copy patterns are resolved against
    /// `root`. Loaders without options render as bare names.
    ///
    /// ```
    /// use std::path::Path;
    /// use tack_config::{assemble, Mode};
    ///
    /// let value = assemble(Mode::Production).to_webpack_value(Path::new("/app"));
    /// assert_eq!(value["output"]["filename"], "scripts.[hash].js");
    /// assert_eq!(value["output"]["path"], "/app/build");
    /// assert_eq!(value["devtool"], false);
    /// ```
    pub fn to_webpack_value(&self, root: &Path) -> Value {
        let mut optimization = Map::new();
        optimization.insert(
            "splitChunks".to_string(),
            json!({ "chunks": self.optimization.split_chunks.chunks.as_str() }),
        );
        if let Some(minimizer) = &self.optimization.minimizer {
            optimization.insert(
                "minimizer".to_string(),
                minimizer.iter().map(|m| json!(m.plugin_name())).collect(),
            );
        }

        json!({
            "mode": self.mode.as_str(),
            "context": path_value(&root.join(&self.context)),
            "entry": self.entry,
            "output": {
                "filename": self.output.filename.render(),
                "path": path_value(&root.join(&self.output.path)),
            },
            "optimization": optimization,
            "devtool": devtool(self.source_maps),
            "devServer": {
                "port": self.dev_server.port,
                "hot": self.dev_server.hot,
            },
            "plugins": self
                .plugins
                .iter()
                .map(|plugin| plugin_value(plugin, root))
                .collect::<Vec<_>>(),
            "module": {
                "rules": self.rules.iter().map(rule_value).collect::<Vec<_>>(),
            },
        })
    }
}

fn path_value(path: &Path) -> Value {
    Value::String(path.to_string_lossy().into_owned())
}

fn devtool(policy: SourceMapPolicy) -> Value {
    match policy {
        SourceMapPolicy::Inline => json!("inline-source-map"),
        SourceMapPolicy::Disabled => json!(false),
    }
}

fn rule_value(rule: &Rule) -> Value {
    let mut value = Map::new();
    value.insert("test".to_string(), json!(rule.test.as_str()));
    if let Some(exclude) = &rule.exclude {
        value.insert("exclude".to_string(), json!(exclude.as_str()));
    }
    value.insert(
        "use".to_string(),
        rule.steps.iter().map(loader_value).collect(),
    );
    Value::Object(value)
}

fn loader_value(step: &LoaderStep) -> Value {
    let options = match step {
        LoaderStep::CssExtract { hmr, reload_all } => {
            json!({ "hmr": hmr, "reloadAll": reload_all })
        }
        LoaderStep::PostCss { plugins } => json!({
            "postcssOptions": {
                "plugins": plugins.iter().map(postcss_plugin_value).collect::<Vec<_>>(),
            },
        }),
        LoaderStep::Babel { presets } => json!({ "presets": presets }),
        LoaderStep::File { name: Some(name) } => json!({ "name": name }),
        LoaderStep::Css | LoaderStep::Sass | LoaderStep::Eslint | LoaderStep::File { name: None } => {
            return json!(step.loader_name());
        }
    };

    json!({ "loader": step.loader_name(), "options": options })
}

fn postcss_plugin_value(plugin: &PostCssPlugin) -> Value {
    match plugin {
        PostCssPlugin::Autoprefixer | PostCssPlugin::MqPacker => json!(plugin.package_name()),
        PostCssPlugin::Cssnano {
            preset,
            discard_all_comments,
        } => json!([
            plugin.package_name(),
            {
                "preset": [
                    preset,
                    { "discardComments": { "removeAll": discard_all_comments } },
                ],
            },
        ]),
    }
}

fn plugin_value(plugin: &PluginDescriptor, root: &Path) -> Value {
    let options = match plugin {
        PluginDescriptor::Clean | PluginDescriptor::BundleAnalyzer => {
            return json!({ "plugin": plugin.name() });
        }
        PluginDescriptor::HtmlTemplate(options) => json!({
            "template": path_value(&options.template),
            "minify": {
                "collapseWhitespace": options.minify.collapse_whitespace,
                "removeComments": options.minify.remove_comments,
            },
        }),
        PluginDescriptor::CopyAssets(options) => json!({
            "patterns": options
                .patterns
                .iter()
                .map(|pattern| json!({
                    "from": path_value(&root.join(&pattern.from)),
                    "to": path_value(&root.join(&pattern.to)),
                }))
                .collect::<Vec<_>>(),
        }),
        PluginDescriptor::CssExtract(options) => json!({
            "filename": options.filename.render(),
        }),
    };

    json!({ "plugin": plugin.name(), "options": options })
}
