use std::fs;

use storeguide::config::{Config, ConfigError};
use storeguide::report::{OutputFormat, TrailMode};
use tempfile::TempDir;

#[test]
fn test_config_default_values() {
    let config = Config::default();
    assert_eq!(config.output.format, OutputFormat::Text);
    assert_eq!(config.output.trail, TrailMode::Full);
    assert!(!config.check.require_expect);
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("storeguide/config.toml"));
}

#[test]
fn test_load_from_full_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[output]
format = "json"
trail = "decisive"

[check]
require-expect = true
"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.output.format, OutputFormat::Json);
    assert_eq!(config.output.trail, TrailMode::Decisive);
    assert!(config.check.require_expect);
}

#[test]
fn test_partial_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[output]\ntrail = \"decisive\"\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.output.format, OutputFormat::Text);
    assert_eq!(config.output.trail, TrailMode::Decisive);
}

#[test]
fn test_missing_explicit_file_is_read_error() {
    let dir = TempDir::new().unwrap();
    let result = Config::load_from(&dir.path().join("nope.toml"));
    assert!(matches!(result, Err(ConfigError::ReadError { .. })));
}

#[test]
fn test_unknown_key_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[output]\ncolour = \"always\"\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn test_invalid_format_value_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[output]\nformat = \"yaml\"\n").unwrap();
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}
