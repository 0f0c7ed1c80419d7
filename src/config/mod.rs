//! Configuration for the admin console
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/callboard/config.toml)
//! 3. Built-in defaults (lowest priority)
//!
//! The `--api-url` flag is applied on top by `main`.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod observability;
mod serialization;

#[cfg(test)]
mod tests;

pub use observability::{FileLogging, LogRotation, LoggingConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Directory name under ~/.config
const APP_DIR: &str = "callboard";

/// Production backend
pub const DEFAULT_API_URL: &str = "https://7al3ohcnml.execute-api.us-east-1.amazonaws.com";

const DEFAULT_TITLE: &str = "BlackSalt Voice AI";
const DEFAULT_THEME: &str = "dark";

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Backend base URL (no trailing slash needed)
    pub api_url: String,

    /// Shown in the title bar
    pub title: String,

    /// Where the credential blob lives
    pub state_dir: PathBuf,

    /// Theme name: "dark" or "light"
    pub theme: String,

    /// Start with the log footer expanded
    pub show_logs: bool,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            title: DEFAULT_TITLE.to_string(),
            state_dir: Self::default_state_dir(),
            theme: DEFAULT_THEME.to_string(),
            show_logs: false,
            logging: LoggingConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub api_url: Option<String>,
    pub title: Option<String>,
    pub state_dir: Option<String>,
    pub theme: Option<String>,
    pub show_logs: Option<bool>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// ~/.config/callboard, used on all platforms for consistency
    fn app_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join(APP_DIR))
    }

    /// Get the config file path: ~/.config/callboard/config.toml
    pub fn config_path() -> Option<PathBuf> {
        Self::app_dir().map(|p| p.join("config.toml"))
    }

    fn default_state_dir() -> PathBuf {
        Self::app_dir().unwrap_or_else(|| PathBuf::from(".callboard"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        // Don't overwrite existing config
        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // config is optional
            }
        }

        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Overwrite the config file with defaults
    pub fn reset_config_file() -> Result<PathBuf> {
        let path = Self::config_path().context("could not determine home directory")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        std::fs::write(&path, Self::default().to_toml())
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(path)
    }

    /// Parse a config file. Missing is fine; unreadable or malformed is not.
    pub(crate) fn load_file_config(path: &Path) -> Result<FileConfig> {
        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents)
                .with_context(|| format!("failed to parse config file {}", path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FileConfig::default()),
            Err(e) => {
                Err(e).with_context(|| format!("failed to read config file {}", path.display()))
            }
        }
    }

    /// Load configuration: env vars > file > defaults
    pub fn from_env() -> Result<Self> {
        let file = match Self::config_path() {
            Some(path) => Self::load_file_config(&path)?,
            None => FileConfig::default(),
        };
        Ok(Self::from_sources(file, |key| std::env::var(key).ok()))
    }

    /// Merge a parsed file with an environment lookup
    pub(crate) fn from_sources(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        // API URL: env > file > default
        let api_url = env("CALLBOARD_API_URL")
            .or(file.api_url)
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        // State dir: env > file > default
        let state_dir = env("CALLBOARD_STATE_DIR")
            .or(file.state_dir)
            .map(PathBuf::from)
            .unwrap_or_else(Self::default_state_dir);

        // Theme: env > file > default
        let theme = env("CALLBOARD_THEME")
            .or(file.theme)
            .unwrap_or_else(|| DEFAULT_THEME.to_string());

        // Title and log footer: file > default
        let title = file.title.unwrap_or_else(|| DEFAULT_TITLE.to_string());
        let show_logs = file.show_logs.unwrap_or(false);

        let logging = LoggingConfig::from_file(file.logging);

        Self {
            api_url,
            title,
            state_dir,
            theme,
            show_logs,
            logging,
        }
    }
}
