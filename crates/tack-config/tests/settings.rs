//! Settings layering and mode resolution from the environment.
//!
//! These tests mutate process environment variables and run serially.

use serial_test::serial;
use std::fs;
use std::path::PathBuf;
use tack_config::{
    Assembler, ConfigError, CopyPattern, MODE_ENV_VAR, Mode, ProjectSettings, assemble,
};
use tempfile::TempDir;

fn set_env(key: &str, value: &str) {
    unsafe { std::env::set_var(key, value) }
}

fn remove_env(key: &str) {
    unsafe { std::env::remove_var(key) }
}

#[test]
#[serial]
fn defaults_without_settings_file() {
    remove_env("TACK_DEV_SERVER_PORT");
    let dir = TempDir::new().unwrap();

    let settings = ProjectSettings::load(dir.path()).unwrap();
    assert_eq!(settings, ProjectSettings::default());
    assert_eq!(
        Assembler::from_settings(&settings).assemble(Mode::Production),
        assemble(Mode::Production)
    );
}

#[test]
#[serial]
fn settings_file_overrides_layout() {
    remove_env("TACK_DEV_SERVER_PORT");
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("tack.toml"),
        r#"
dev_server_port = 4000

[layout]
entry = "./js/main.js"
output_dir = "dist"
static_assets = [{ from = "assets", to = "dist/assets" }]
"#,
    )
    .unwrap();

    let settings = ProjectSettings::load(dir.path()).unwrap();
    assert_eq!(settings.dev_server_port, 4000);
    assert_eq!(settings.layout.entry, "./js/main.js");
    assert_eq!(settings.layout.context, PathBuf::from("src"));
    assert_eq!(
        settings.layout.static_assets,
        [CopyPattern::new("assets", "dist/assets")]
    );

    let config = Assembler::from_settings(&settings).assemble(Mode::Development);
    assert_eq!(config.output.path, PathBuf::from("dist"));
    assert_eq!(config.dev_server.port, 4000);
}

#[test]
#[serial]
fn environment_overrides_settings_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("tack.toml"), "dev_server_port = 4000\n").unwrap();
    set_env("TACK_DEV_SERVER_PORT", "5173");

    let settings = ProjectSettings::load(dir.path());
    remove_env("TACK_DEV_SERVER_PORT");

    assert_eq!(settings.unwrap().dev_server_port, 5173);
}

#[test]
#[serial]
fn malformed_settings_file_is_rejected() {
    remove_env("TACK_DEV_SERVER_PORT");
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("tack.toml"), "dev_server_port = \"fast\"\n").unwrap();

    assert!(matches!(
        ProjectSettings::load(dir.path()).unwrap_err(),
        ConfigError::Settings(_)
    ));
}

#[test]
#[serial]
fn mode_from_environment() {
    set_env(MODE_ENV_VAR, "development");
    assert_eq!(Mode::from_env(), Mode::Development);

    set_env(MODE_ENV_VAR, "dev");
    assert_eq!(Mode::from_env(), Mode::Production);

    set_env(MODE_ENV_VAR, "production");
    assert_eq!(Mode::from_env(), Mode::Production);

    set_env(MODE_ENV_VAR, "qa-staging-42");
    assert_eq!(Mode::from_env(), Mode::Production);

    remove_env(MODE_ENV_VAR);
    assert_eq!(Mode::from_env(), Mode::Production);
}
