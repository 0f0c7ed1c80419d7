//! Configuration tests

use super::*;
use std::collections::HashMap;
use tempfile::TempDir;

fn no_env(_: &str) -> Option<String> {
    None
}

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip tests
// ─────────────────────────────────────────────────────────────────────────────

/// Every field written by `to_toml` comes back through `FileConfig`
#[test]
fn test_config_roundtrip_default() {
    let config = Config::default();
    let toml_str = config.to_toml();

    let parsed: FileConfig = toml::from_str(&toml_str).unwrap_or_else(|e| {
        panic!("Default config should round-trip.\nTOML:\n{toml_str}\nError: {e}")
    });
    let loaded = Config::from_sources(parsed, no_env);

    assert_eq!(loaded.api_url, config.api_url);
    assert_eq!(loaded.title, config.title);
    assert_eq!(loaded.state_dir, config.state_dir);
    assert_eq!(loaded.theme, config.theme);
    assert_eq!(loaded.show_logs, config.show_logs);
    assert_eq!(loaded.logging.level, config.logging.level);
    assert_eq!(loaded.logging.file_rotation, config.logging.file_rotation);
}

#[test]
fn test_config_roundtrip_custom_values() {
    let config = Config {
        api_url: "http://localhost:3000".into(),
        title: "Harbor \"Grill\"".into(),
        state_dir: PathBuf::from(r"C:\Users\pat\callboard"),
        theme: "light".into(),
        show_logs: true,
        logging: LoggingConfig {
            level: "debug".into(),
            file_enabled: true,
            file_dir: PathBuf::from("/var/log/callboard"),
            file_rotation: LogRotation::Hourly,
            file_prefix: "cb".into(),
        },
    };

    let parsed: FileConfig = toml::from_str(&config.to_toml()).unwrap();
    let loaded = Config::from_sources(parsed, no_env);

    assert_eq!(loaded.title, "Harbor \"Grill\"");
    assert_eq!(loaded.state_dir, PathBuf::from(r"C:\Users\pat\callboard"));
    assert!(loaded.show_logs);
    assert!(loaded.logging.file_enabled);
    assert_eq!(loaded.logging.file_rotation, LogRotation::Hourly);
    assert_eq!(loaded.logging.file_prefix, "cb");
}

// ─────────────────────────────────────────────────────────────────────────────
// Precedence
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_env_overrides_file() {
    let file: FileConfig = toml::from_str(
        r#"
api_url = "http://from-file"
theme = "light"
state_dir = "/from/file"
"#,
    )
    .unwrap();

    let env: HashMap<&str, &str> = [
        ("CALLBOARD_API_URL", "http://from-env"),
        ("CALLBOARD_STATE_DIR", "/from/env"),
    ]
    .into_iter()
    .collect();

    let config = Config::from_sources(file, |k| env.get(k).map(|v| v.to_string()));
    assert_eq!(config.api_url, "http://from-env");
    assert_eq!(config.state_dir, PathBuf::from("/from/env"));
    // Not in env, so file wins
    assert_eq!(config.theme, "light");
}

#[test]
fn test_missing_values_use_defaults() {
    let config = Config::from_sources(FileConfig::default(), no_env);
    assert_eq!(config.api_url, DEFAULT_API_URL);
    assert_eq!(config.title, "BlackSalt Voice AI");
    assert_eq!(config.theme, "dark");
    assert!(!config.logging.file_enabled);
}

#[test]
fn test_level_becomes_crate_filter() {
    let file: FileConfig = toml::from_str("[logging]\nlevel = \"debug\"\n").unwrap();
    let config = Config::from_sources(file, no_env);
    assert_eq!(config.logging.filter_directive(), "callboard=debug");
}

#[test]
fn test_unknown_rotation_falls_back_to_daily() {
    let file: FileConfig = toml::from_str("[logging]\nfile_rotation = \"weekly\"\n").unwrap();
    let config = Config::from_sources(file, no_env);
    assert_eq!(config.logging.file_rotation, LogRotation::Daily);
}

// ─────────────────────────────────────────────────────────────────────────────
// File loading
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_missing_file_is_default() {
    let dir = TempDir::new().unwrap();
    let file = Config::load_file_config(&dir.path().join("absent.toml")).unwrap();
    assert!(file.api_url.is_none());
}

#[test]
fn test_malformed_file_names_the_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "api_url = [unterminated").unwrap();

    let err = Config::load_file_config(&path).unwrap_err();
    assert!(format!("{err:#}").contains("config.toml"));
}
