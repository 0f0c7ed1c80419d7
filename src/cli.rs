// CLI module - command-line argument parsing and handlers
//
// With no subcommand the TUI runs. Subcommands do one thing and exit:
// - config --show: Display effective configuration
// - config --path: Show config file path
// - config --reset: Regenerate config file with defaults
// - config --edit: Open config file in $EDITOR
// - logout: Forget the saved login

use crate::config::{Config, VERSION};
use crate::session::CredentialStore;
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::process::Command;

/// callboard - admin console for the restaurant voice assistant
#[derive(Parser, Debug)]
#[command(name = "callboard")]
#[command(version = VERSION)]
#[command(about = "Terminal admin console for a restaurant voice-AI call service", long_about = None)]
pub struct Cli {
    /// Backend base URL (overrides config and CALLBOARD_API_URL)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Open config file in $EDITOR
        #[arg(long)]
        edit: bool,
    },

    /// Delete saved credentials
    Logout,
}

/// Handle subcommands. Returns true if one ran (exit after).
pub fn handle_command(cli: &Cli) -> Result<bool> {
    match &cli.command {
        Some(Commands::Config {
            show,
            path,
            reset,
            edit,
        }) => {
            if *path {
                handle_config_path()?;
            } else if *show {
                handle_config_show(cli)?;
            } else if *reset {
                handle_config_reset()?;
            } else if *edit {
                handle_config_edit()?;
            } else {
                println!("Usage: callboard config [--show|--path|--reset|--edit]");
                println!();
                println!("Options:");
                println!("  --show    Display effective configuration");
                println!("  --path    Show config file path");
                println!("  --reset   Reset config file to defaults");
                println!("  --edit    Open config file in $EDITOR");
            }
            Ok(true)
        }
        Some(Commands::Logout) => {
            handle_logout(cli)?;
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Effective configuration: env > file > defaults, then the flag
pub fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::from_env()?;
    if let Some(url) = &cli.api_url {
        config.api_url = url.clone();
    }
    Ok(config)
}

fn handle_config_path() -> Result<()> {
    let path = Config::config_path().context("could not determine config path")?;
    println!("{}", path.display());
    Ok(())
}

fn handle_config_show(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;

    println!("# Effective configuration (flags > env > file > defaults)");
    println!();
    println!("api_url = {:?}", config.api_url);
    println!("title = {:?}", config.title);
    println!("state_dir = {:?}", config.state_dir.display().to_string());
    println!("theme = {:?}", config.theme);
    println!("show_logs = {}", config.show_logs);
    println!();
    println!("[logging]");
    println!("level = {:?}", config.logging.level);
    println!("file_enabled = {}", config.logging.file_enabled);
    println!(
        "file_dir = {:?}",
        config.logging.file_dir.display().to_string()
    );
    println!("file_rotation = {:?}", config.logging.file_rotation.as_str());
    println!("file_prefix = {:?}", config.logging.file_prefix);

    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
    Ok(())
}

fn handle_config_reset() -> Result<()> {
    let path = Config::config_path().context("could not determine config path")?;

    // Confirm if file exists
    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        std::io::stderr().flush()?;

        let mut input = String::new();
        std::io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    let path = Config::reset_config_file()?;
    println!("Config reset to defaults: {}", path.display());
    Ok(())
}

fn handle_config_edit() -> Result<()> {
    let path = Config::config_path().context("could not determine config path")?;

    if !path.exists() {
        Config::ensure_config_exists();
        println!("Created new config file: {}", path.display());
    }

    let editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(windows) {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    println!("Opening {} with {}", path.display(), editor);

    let status = Command::new(&editor)
        .arg(&path)
        .status()
        .with_context(|| format!("failed to launch editor '{}' (set $EDITOR)", editor))?;

    if !status.success() {
        bail!("editor exited with status: {}", status);
    }
    Ok(())
}

fn handle_logout(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let store = CredentialStore::new(&config.state_dir);
    store.clear()?;
    println!("Signed out ({} removed)", store.path().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_flag_and_subcommands() {
        let cli = Cli::parse_from(["callboard", "--api-url", "http://localhost:9000"]);
        assert_eq!(cli.api_url.as_deref(), Some("http://localhost:9000"));
        assert!(cli.command.is_none());

        let cli = Cli::parse_from(["callboard", "config", "--show"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Config { show: true, .. })
        ));

        let cli = Cli::parse_from(["callboard", "logout"]);
        assert!(matches!(cli.command, Some(Commands::Logout)));
    }
}
