//! Config serialization to TOML
//!
//! Single source of truth for the config file format; the first-run
//! template and `config --reset` both come from here.

use super::Config;

/// TOML-escape a string value (paths on Windows carry backslashes)
fn quoted(s: &str) -> String {
    toml::Value::String(s.to_string()).to_string()
}

impl Config {
    /// Render this config as a commented TOML file
    pub fn to_toml(&self) -> String {
        format!(
            r#"# callboard configuration

# Backend base URL (CALLBOARD_API_URL overrides)
api_url = {api_url}

# Title bar text
title = {title}

# Where the saved login lives (CALLBOARD_STATE_DIR overrides)
state_dir = {state_dir}

# Theme: dark, light (CALLBOARD_THEME overrides)
theme = {theme}

# Start with the log footer open (toggle with 'l')
show_logs = {show_logs}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = {log_level}
# JSON file logging (in addition to the in-app log footer)
file_enabled = {log_file_enabled}
file_dir = {log_file_dir}
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = {log_file_prefix}
"#,
            api_url = quoted(&self.api_url),
            title = quoted(&self.title),
            state_dir = quoted(&self.state_dir.to_string_lossy()),
            theme = quoted(&self.theme),
            show_logs = self.show_logs,
            log_level = quoted(&self.logging.level),
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = quoted(&self.logging.file_dir.to_string_lossy()),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = quoted(&self.logging.file_prefix),
        )
    }
}
