//! Configuration panel state
//!
//! Owns a cached copy of the configuration record, the forwarding toggle,
//! and the fallback-number field. Nothing is mutated optimistically: the
//! screen shows the last server-confirmed record plus a spinner while a
//! patch is in flight, and every response replaces the cache wholesale.

use super::{Generation, LoadState, Tab, TextField};
use crate::api::{ApiError, ApiRequest, ConfigPatch, Configuration, Ticket};

const FETCH_FAILED: &str = "Failed to fetch configuration";
const TOGGLE_FAILED: &str = "Failed to update configuration";
const FALLBACK_FAILED: &str = "Failed to update fallback number";

/// Which control has focus
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConfigFocus {
    #[default]
    Forwarding,
    Fallback,
}

/// The single patch that may be in flight
#[derive(Debug, Clone, PartialEq, Eq)]
enum Pending {
    Fetch,
    Toggle,
    Fallback,
}

#[derive(Debug, Default)]
pub struct ConfigPanel {
    generation: Generation,
    pub state: LoadState,
    config: Option<Configuration>,
    pending: Option<Pending>,
    pub focus: ConfigFocus,
    /// Fallback field buffer; meaningful only while `editing`
    pub fallback: TextField,
    editing: bool,
    /// Last action error, shown under the controls
    pub error: Option<String>,
}

impl ConfigPanel {
    pub fn new() -> Self {
        Self::default()
    }

    fn ticket(&mut self) -> Ticket {
        Ticket::new(Tab::Configuration, self.generation.bump())
    }

    /// Reset and issue the initial fetch
    pub fn mount(&mut self) -> ApiRequest {
        *self = Self {
            generation: self.generation,
            ..Self::default()
        };
        self.state = LoadState::Loading;
        self.pending = Some(Pending::Fetch);
        ApiRequest::FetchConfig(self.ticket())
    }

    /// Forget everything; responses still in flight become stale
    pub fn unmount(&mut self) {
        self.generation.bump();
        *self = Self {
            generation: self.generation,
            ..Self::default()
        };
    }

    pub fn config(&self) -> Option<&Configuration> {
        self.config.as_ref()
    }

    /// A request is outstanding; controls are disabled
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn focus_next(&mut self) {
        if !self.editing {
            self.focus = match self.focus {
                ConfigFocus::Forwarding => ConfigFocus::Fallback,
                ConfigFocus::Fallback => ConfigFocus::Forwarding,
            };
        }
    }

    /// Flip the forwarding flag on the server.
    ///
    /// Sends the negation of the last confirmed value. Returns None when
    /// nothing is loaded yet or another request is outstanding.
    pub fn toggle_forwarding(&mut self) -> Option<ApiRequest> {
        if self.is_busy() {
            return None;
        }
        let current = self.config.as_ref()?.forward_to_pam;

        self.error = None;
        self.pending = Some(Pending::Toggle);
        let ticket = self.ticket();
        Some(ApiRequest::PatchConfig(
            ticket,
            ConfigPatch::forwarding(!current),
        ))
    }

    /// Focus the fallback field for editing, prefilled with the confirmed value
    pub fn begin_fallback_edit(&mut self) {
        if self.is_busy() || self.editing {
            return;
        }
        let Some(config) = &self.config else {
            return;
        };
        self.fallback.set(config.fallback_number.clone());
        self.focus = ConfigFocus::Fallback;
        self.editing = true;
    }

    /// Field lost focus or Enter was pressed: submit the buffer
    pub fn commit_fallback(&mut self) -> Option<ApiRequest> {
        if !self.editing {
            return None;
        }
        self.editing = false;
        let value = self.fallback.value().trim().to_string();
        self.update_fallback_number(value)
    }

    /// Send a new fallback number.
    ///
    /// No-op when the value is empty or equal to the confirmed number.
    pub fn update_fallback_number(&mut self, value: String) -> Option<ApiRequest> {
        if self.is_busy() {
            return None;
        }
        let current = &self.config.as_ref()?.fallback_number;
        if value.is_empty() || value == *current {
            self.fallback.clear();
            return None;
        }

        self.error = None;
        self.pending = Some(Pending::Fallback);
        // Keep showing what the user typed until the server answers
        self.fallback.set(value.clone());
        let ticket = self.ticket();
        Some(ApiRequest::PatchConfig(
            ticket,
            ConfigPatch::fallback_number(value),
        ))
    }

    /// Value the fallback input should show right now
    pub fn displayed_fallback(&self) -> &str {
        if self.editing || self.pending == Some(Pending::Fallback) {
            return self.fallback.value();
        }
        self.config
            .as_ref()
            .map(|c| c.fallback_number.as_str())
            .unwrap_or("")
    }

    /// Apply a `/config` response. Returns false if it was stale.
    pub fn apply(&mut self, generation: Generation, result: Result<Configuration, ApiError>) -> bool {
        if generation != self.generation {
            tracing::debug!("Dropping stale configuration response");
            return false;
        }

        let Some(pending) = self.pending.take() else {
            return false;
        };

        match (pending, result) {
            (Pending::Fetch, Ok(config)) => {
                self.config = Some(config);
                self.state = LoadState::Ready;
            }
            (Pending::Fetch, Err(e)) => {
                tracing::warn!("Configuration fetch failed: {}", e);
                self.state = LoadState::Failed(e.user_message(FETCH_FAILED));
            }
            (Pending::Toggle, Ok(config)) => {
                tracing::info!(
                    "Forwarding is now {}",
                    if config.forward_to_pam { "on" } else { "off" }
                );
                self.config = Some(config);
            }
            (Pending::Toggle, Err(e)) => {
                tracing::warn!("Forwarding toggle failed: {}", e);
                self.error = Some(e.user_message(TOGGLE_FAILED));
            }
            (Pending::Fallback, Ok(config)) => {
                tracing::info!("Fallback number updated");
                self.config = Some(config);
                self.fallback.clear();
            }
            (Pending::Fallback, Err(e)) => {
                // Input falls back to the last confirmed number
                tracing::warn!("Fallback number update failed: {}", e);
                self.error = Some(e.user_message(FALLBACK_FAILED));
                self.fallback.clear();
            }
        }
        true
    }
}
