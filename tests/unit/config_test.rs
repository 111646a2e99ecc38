//! Tests for configuration loading

use std::fs;

use regex_rocket::config::Config;
use regex_rocket::core::models::Flags;
use regex_rocket::paths::CONFIG_ENV;
use serial_test::serial;
use tempfile::TempDir;

use crate::common::{DATE_PATTERN, SAMPLE_SUBJECT};

#[test]
fn test_missing_file_gives_defaults() {
    let temp = TempDir::new().unwrap();
    let config = Config::load_from(&temp.path().join("config.toml"));
    assert_eq!(config, Config::default());
    assert_eq!(config.assistant.model, "gemini-2.5-flash");
    assert_eq!(config.assistant.api_key_env, "GEMINI_API_KEY");
}

#[test]
fn test_initial_state_is_date_sample() {
    let state = Config::default().initial_state();
    assert_eq!(state.regex, DATE_PATTERN);
    assert_eq!(state.test_string, SAMPLE_SUBJECT);
    assert_eq!(state.flags, Flags::global());
}

#[test]
fn test_partial_file_overrides_only_given_fields() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(
        &path,
        r#"
[assistant]
model = "gemini-2.5-pro"

[defaults]
flags = "gi"
"#,
    )
    .unwrap();

    let config = Config::load_from(&path);
    assert_eq!(config.assistant.model, "gemini-2.5-pro");
    assert_eq!(config.assistant.api_key_env, "GEMINI_API_KEY");
    assert_eq!(config.default_flags().to_string(), "gi");
    assert_eq!(config.defaults.pattern, DATE_PATTERN);
}

#[test]
fn test_malformed_file_gives_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[assistant\nmodel = ").unwrap();
    assert_eq!(Config::load_from(&path), Config::default());
}

#[test]
fn test_invalid_default_flags_fall_back_to_global() {
    let mut config = Config::default();
    config.defaults.flags = "gz".to_string();
    assert_eq!(config.default_flags(), Flags::global());
}

#[test]
fn test_save_then_load() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested/dir/config.toml");

    let mut config = Config::default();
    config.defaults.subject = "abc".to_string();
    config.save_to(&path).unwrap();

    assert_eq!(Config::load_from(&path), config);
}

#[test]
#[serial(config_env)]
fn test_env_var_overrides_location() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("custom.toml");
    fs::write(&path, "[defaults]\npattern = 'x+'\n").unwrap();

    // SAFETY: serialized with the other tests touching this variable
    unsafe { std::env::set_var(CONFIG_ENV, &path) };
    let loaded = Config::load();
    let location = Config::config_path();
    unsafe { std::env::remove_var(CONFIG_ENV) };

    assert_eq!(location, path);
    assert_eq!(loaded.defaults.pattern, "x+");
}

#[test]
#[serial(config_env)]
fn test_empty_env_var_ignored() {
    // SAFETY: serialized with the other tests touching this variable
    unsafe { std::env::set_var(CONFIG_ENV, "") };
    let location = Config::config_path();
    unsafe { std::env::remove_var(CONFIG_ENV) };

    assert!(location.ends_with("regex-rocket/config.toml"));
}
