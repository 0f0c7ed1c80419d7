// API module - everything that crosses the network
//
// The TUI loop never awaits the network itself. State modules describe what
// they need as an `ApiRequest`; the `Dispatcher` runs it on a tokio task and
// sends the outcome back over an mpsc channel as an `ApiEvent`, which the
// loop applies on its next turn.

pub mod client;
pub mod error;
pub mod types;

pub use client::ApiClient;
pub use error::ApiError;
pub use types::{Call, CallsQuery, ConfigPatch, Configuration, Credentials, FaqEntry, Role};

use crate::dashboard::{Generation, Tab};
use tokio::sync::mpsc;

/// Identifies which mounted component issued a request, and which of its
/// requests. A response whose ticket no longer matches is stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub tab: Tab,
    pub generation: Generation,
}

impl Ticket {
    pub fn new(tab: Tab, generation: Generation) -> Self {
        Self { tab, generation }
    }
}

/// Why credentials are being checked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthPurpose {
    /// Re-validating the stored blob at startup
    Restore,
    /// User submitted the login form
    Login,
}

/// A request a component wants performed
#[derive(Debug, Clone, PartialEq)]
pub enum ApiRequest {
    Authenticate {
        credentials: Credentials,
        purpose: AuthPurpose,
    },
    FetchConfig(Ticket),
    PatchConfig(Ticket, ConfigPatch),
    ListCalls(Ticket, CallsQuery),
}

/// The outcome of an `ApiRequest`, delivered back to the event loop
#[derive(Debug)]
pub enum ApiEvent {
    Authenticated {
        credentials: Credentials,
        purpose: AuthPurpose,
        result: Result<(), ApiError>,
    },
    Config {
        ticket: Ticket,
        result: Result<Configuration, ApiError>,
    },
    Calls {
        ticket: Ticket,
        result: Result<Vec<Call>, ApiError>,
    },
}

/// Perform one request to completion.
///
/// Authenticated requests without credentials fail with
/// `ApiError::MissingCredentials` and never touch the network.
pub async fn execute(
    client: &ApiClient,
    credentials: Option<&Credentials>,
    request: ApiRequest,
) -> ApiEvent {
    match request {
        ApiRequest::Authenticate {
            credentials,
            purpose,
        } => {
            let result = client.authenticate(&credentials).await;
            ApiEvent::Authenticated {
                credentials,
                purpose,
                result,
            }
        }
        ApiRequest::FetchConfig(ticket) => {
            let result = match credentials {
                Some(creds) => client.fetch_config(creds).await,
                None => Err(ApiError::MissingCredentials),
            };
            ApiEvent::Config { ticket, result }
        }
        ApiRequest::PatchConfig(ticket, patch) => {
            let result = match credentials {
                Some(creds) => client.patch_config(creds, &patch).await,
                None => Err(ApiError::MissingCredentials),
            };
            ApiEvent::Config { ticket, result }
        }
        ApiRequest::ListCalls(ticket, query) => {
            let result = match credentials {
                Some(creds) => client.list_calls(creds, &query).await,
                None => Err(ApiError::MissingCredentials),
            };
            ApiEvent::Calls { ticket, result }
        }
    }
}

/// Runs requests in the background and reports back on a channel.
///
/// In-flight requests are never cancelled; if the receiver is gone by the
/// time one finishes, the result is dropped.
#[derive(Clone)]
pub struct Dispatcher {
    client: ApiClient,
    tx: mpsc::Sender<ApiEvent>,
}

impl Dispatcher {
    pub fn new(client: ApiClient, tx: mpsc::Sender<ApiEvent>) -> Self {
        Self { client, tx }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Spawn `request` on the runtime. Must be called from within tokio.
    pub fn submit(&self, credentials: Option<&Credentials>, request: ApiRequest) {
        let client = self.client.clone();
        let credentials = credentials.cloned();
        let tx = self.tx.clone();

        tokio::spawn(async move {
            let event = execute(&client, credentials.as_ref(), request).await;
            if tx.send(event).await.is_err() {
                tracing::debug!("Event loop gone, dropping API result");
            }
        });
    }
}
