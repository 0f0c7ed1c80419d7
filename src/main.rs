// Callboard - terminal admin console for a restaurant's voice-AI line
//
// Signs the owner in against the admin backend, then lets them decide who
// answers the phone, review past calls, and maintain the FAQ the assistant
// draws on.
//
// Architecture:
// - API (reqwest): Typed client for the admin backend plus a dispatcher that
//   runs each request on its own task
// - Dashboard: Synchronous state for each screen; returns requests, applies
//   responses
// - Session: Stored credentials and the sign-in lifecycle
// - TUI (ratatui): Renders the dashboard and routes input
// - Event system: an mpsc channel carries finished requests back to the TUI

mod api;
mod cli;
mod config;
mod dashboard;
mod logging;
mod session;
mod tui;

use anyhow::{Context, Result};
use api::{ApiClient, Dispatcher};
use clap::Parser;
use config::Config;
use logging::LogBuffer;
use session::{CredentialStore, Session};
use tokio::sync::mpsc;

/// Buffered responses between the request tasks and the render loop
const API_CHANNEL_SIZE: usize = 64;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Subcommands (config, logout) run and exit without the TUI
    if cli::handle_command(&cli)? {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let config = cli::load_config(&cli)?;

    // Logs go to the in-app buffer (and optionally a file), never stdout,
    // so they don't garble the display. The guard flushes the file writer.
    let log_buffer = LogBuffer::new();
    let _file_guard = logging::init(&config.logging, log_buffer.clone())?;

    tracing::info!("Callboard v{} starting", config::VERSION);
    tracing::debug!("Backend: {}", config.api_url);

    let client = ApiClient::new(&config.api_url)
        .with_context(|| format!("Invalid API URL: {}", config.api_url))?;
    let (api_tx, api_rx) = mpsc::channel(API_CHANNEL_SIZE);
    let dispatcher = Dispatcher::new(client, api_tx);

    let store = CredentialStore::new(&config.state_dir);
    let (session, startup) = Session::start(store);

    let app = tui::app::App::new(&config, log_buffer, session, dispatcher);
    tui::run_tui(app, startup, api_rx).await?;

    tracing::info!("Shutting down");
    Ok(())
}
