//! Overlay-file tests: selection, merging, and failure tolerance.

use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;

use super::{setup_config_dir, write_config_file};

const DEFAULT_TOML: &str = r#"
name = "svc"

[server]
port = 8080
host = "localhost"
"#;

fn loader_with_selector(prefix: &str, selected: &'static str) -> ConfigLoader {
    ConfigLoader::new()
        .with_file_prefix(prefix)
        .with_automatic_env(false)
        .with_env_lookup(move |name| (name == "ENV").then(|| selected.to_string()))
}

#[test]
fn overlay_keys_win_and_others_keep_defaults() {
    let (_tmp, prefix) = setup_config_dir("toml", DEFAULT_TOML);
    write_config_file(&prefix, "prod", "toml", "[server]\nport = 9090\n");

    let config = loader_with_selector(&prefix, "prod").load().unwrap();
    assert_eq!(config.get_int("server.port"), 9090);
    assert_eq!(config.get_string("server.host"), "localhost");
    assert_eq!(config.get_string("name"), "svc");
}

#[test]
fn selector_value_is_lowercased() {
    let (_tmp, prefix) = setup_config_dir("toml", DEFAULT_TOML);
    write_config_file(&prefix, "prod", "toml", "[server]\nport = 9090\n");

    let config = loader_with_selector(&prefix, "PROD").load().unwrap();
    assert_eq!(config.get_int("server.port"), 9090);
}

#[test]
fn missing_overlay_file_is_tolerated() {
    let (_tmp, prefix) = setup_config_dir("toml", DEFAULT_TOML);

    let config = loader_with_selector(&prefix, "staging").load().unwrap();
    assert_eq!(config.get_int("server.port"), 8080);
}

#[test]
fn malformed_overlay_file_is_fatal() {
    let (_tmp, prefix) = setup_config_dir("toml", DEFAULT_TOML);
    write_config_file(&prefix, "prod", "toml", "port = = 9090\n");

    let err = loader_with_selector(&prefix, "prod").load().unwrap_err();
    match err {
        ConfigError::FileLoad { path, .. } => {
            assert!(path.to_string_lossy().ends_with("prod.toml"));
        }
        other => panic!("expected FileLoad, got {other:?}"),
    }
}

#[test]
fn selector_variable_name_is_configurable() {
    let (_tmp, prefix) = setup_config_dir("toml", DEFAULT_TOML);
    write_config_file(&prefix, "prod", "toml", "[server]\nport = 9090\n");

    let config = ConfigLoader::new()
        .with_file_prefix(&*prefix)
        .with_selector_var("RUN_MODE")
        .with_automatic_env(false)
        .with_env_lookup(|name| (name == "RUN_MODE").then(|| "prod".to_string()))
        .load()
        .unwrap();
    assert_eq!(config.get_int("server.port"), 9090);
}

#[test]
fn selector_is_read_through_the_injected_lookup() {
    let (_tmp, prefix) = setup_config_dir("toml", DEFAULT_TOML);
    write_config_file(&prefix, "prod", "toml", "[server]\nport = 9090\n");

    // The lookup answers only for the selector variable; nothing else
    // is consulted during a file-only load.
    let config = ConfigLoader::new()
        .with_file_prefix(&*prefix)
        .with_automatic_env(false)
        .with_env_lookup(|name| {
            assert_eq!(name, "ENV");
            Some("prod".to_string())
        })
        .load()
        .unwrap();
    assert_eq!(config.get_int("server.port"), 9090);
}
