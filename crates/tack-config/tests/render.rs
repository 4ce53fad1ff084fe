//! Rendering into the bundler runtime's configuration shape.

use serde_json::json;
use std::path::Path;
use tack_config::{Mode, assemble};

#[test]
fn production_render() {
    let value = assemble(Mode::Production).to_webpack_value(Path::new("/srv/site"));

    assert_eq!(value["mode"], "production");
    assert_eq!(value["context"], "/srv/site/src");
    assert_eq!(value["entry"], "./scripts/index.js");
    assert_eq!(
        value["output"],
        json!({ "filename": "scripts.[hash].js", "path": "/srv/site/build" })
    );
    assert_eq!(
        value["optimization"],
        json!({ "splitChunks": { "chunks": "all" }, "minimizer": ["TerserWebpackPlugin"] })
    );
    assert_eq!(value["devtool"], false);
    assert_eq!(value["devServer"], json!({ "port": 3000, "hot": false }));
}

#[test]
fn development_render() {
    let value = assemble(Mode::Development).to_webpack_value(Path::new("/srv/site"));

    assert_eq!(value["mode"], "development");
    assert_eq!(value["output"]["filename"], "scripts.js");
    assert_eq!(value["optimization"], json!({ "splitChunks": { "chunks": "all" } }));
    assert_eq!(value["devtool"], "inline-source-map");
    assert_eq!(value["devServer"], json!({ "port": 3000, "hot": true }));
}

#[test]
fn style_rule_renders_loader_chain() {
    let dev = assemble(Mode::Development).to_webpack_value(Path::new("/p"));
    assert_eq!(
        dev["module"]["rules"][0],
        json!({
            "test": r"\.s[ac]ss$",
            "use": [
                {
                    "loader": "mini-css-extract-plugin/loader",
                    "options": { "hmr": true, "reloadAll": true }
                },
                "css-loader",
                "sass-loader"
            ]
        })
    );

    let prod = assemble(Mode::Production).to_webpack_value(Path::new("/p"));
    let style = &prod["module"]["rules"][0]["use"];
    assert_eq!(style[0]["options"]["hmr"], false);
    assert_eq!(style[2]["loader"], "postcss-loader");
    assert_eq!(
        style[2]["options"]["postcssOptions"]["plugins"][0],
        "autoprefixer"
    );
    assert_eq!(
        style[2]["options"]["postcssOptions"]["plugins"][1],
        "css-mqpacker"
    );
    assert_eq!(style[3], "sass-loader");
}

#[test]
fn script_rule_renders_exclude_and_lint() {
    let value = assemble(Mode::Development).to_webpack_value(Path::new("/p"));
    assert_eq!(
        value["module"]["rules"][3],
        json!({
            "test": r"\.js$",
            "exclude": "node_modules",
            "use": [
                { "loader": "babel-loader", "options": { "presets": ["@babel/preset-env"] } },
                "eslint-loader"
            ]
        })
    );
}

#[test]
fn asset_rules_render() {
    let value = assemble(Mode::Production).to_webpack_value(Path::new("/p"));
    let rules = &value["module"]["rules"];
    assert_eq!(rules[1], json!({ "test": r"\.(png|jpg|svg|gif)$", "use": ["file-loader"] }));
    assert_eq!(
        rules[2]["use"][0],
        json!({ "loader": "file-loader", "options": { "name": "[path][name].[ext]" } })
    );
}

#[test]
fn plugins_render_with_absolute_copy_paths() {
    let value = assemble(Mode::Production).to_webpack_value(Path::new("/srv/site"));
    let plugins = value["plugins"].as_array().unwrap();

    assert_eq!(plugins.len(), 5);
    assert_eq!(plugins[0], json!({ "plugin": "CleanWebpackPlugin" }));
    assert_eq!(
        plugins[1],
        json!({
            "plugin": "HtmlWebpackPlugin",
            "options": {
                "template": "index.html",
                "minify": { "collapseWhitespace": true, "removeComments": true }
            }
        })
    );
    assert_eq!(
        plugins[2]["options"]["patterns"],
        json!([
            { "from": "/srv/site/src/img", "to": "/srv/site/build/img" },
            { "from": "/srv/site/src/favicon", "to": "/srv/site/build/favicon" }
        ])
    );
    assert_eq!(
        plugins[3],
        json!({ "plugin": "MiniCssExtractPlugin", "options": { "filename": "style.[hash].css" } })
    );
    assert_eq!(plugins[4], json!({ "plugin": "BundleAnalyzerPlugin" }));
}
