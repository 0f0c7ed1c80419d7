// Session - who is signed in, and whether we know yet
//
// Built once at startup. Stored credentials are re-validated against /auth
// before anything else renders; on success they become the session used by
// every authenticated request, on any failure they are wiped. There is no
// expiry or refresh, so validity is only ever checked at process start.

pub mod store;

pub use store::CredentialStore;

use crate::api::{ApiError, ApiRequest, AuthPurpose, Credentials};

const INVALID_CREDENTIALS: &str = "Invalid credentials";
const LOGIN_FAILED: &str = "Login failed";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Startup validation in flight
    Checking,
    SignedOut,
    SignedIn,
}

#[derive(Debug)]
pub struct Session {
    state: SessionState,
    credentials: Option<Credentials>,
    store: CredentialStore,
    /// Shown under the login form
    pub login_error: Option<String>,
    login_pending: bool,
}

impl Session {
    /// Read stored credentials and decide where to start.
    ///
    /// Returns the validation request when there is something to validate.
    /// A blob that cannot be read is treated as absent and removed.
    pub fn start(store: CredentialStore) -> (Self, Option<ApiRequest>) {
        let stored = match store.load() {
            Ok(stored) => stored,
            Err(e) => {
                tracing::warn!("Discarding unreadable credentials: {:#}", e);
                if let Err(e) = store.clear() {
                    tracing::warn!("Could not remove credentials: {:#}", e);
                }
                None
            }
        };

        let mut session = Self {
            state: SessionState::SignedOut,
            credentials: None,
            store,
            login_error: None,
            login_pending: false,
        };

        let request = stored.map(|credentials| {
            tracing::info!("Validating stored session for {}", credentials.username);
            session.state = SessionState::Checking;
            ApiRequest::Authenticate {
                credentials,
                purpose: AuthPurpose::Restore,
            }
        });

        (session, request)
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_authenticated(&self) -> bool {
        self.state == SessionState::SignedIn
    }

    /// Credentials for authenticated requests; None unless signed in
    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    pub fn username(&self) -> Option<&str> {
        self.credentials.as_ref().map(|c| c.username.as_str())
    }

    pub fn is_login_pending(&self) -> bool {
        self.login_pending
    }

    /// Submit the login form. Ignored while a login is already in flight.
    pub fn login(&mut self, username: String, password: String) -> Option<ApiRequest> {
        if self.login_pending || self.state != SessionState::SignedOut {
            return None;
        }
        self.login_pending = true;
        self.login_error = None;
        Some(ApiRequest::Authenticate {
            credentials: Credentials::new(username, password),
            purpose: AuthPurpose::Login,
        })
    }

    /// Apply an /auth outcome
    pub fn apply(
        &mut self,
        credentials: Credentials,
        purpose: AuthPurpose,
        result: Result<(), ApiError>,
    ) {
        match (purpose, result) {
            (AuthPurpose::Restore, Ok(())) => {
                if self.state != SessionState::Checking {
                    return;
                }
                tracing::info!("Session restored for {}", credentials.username);
                self.credentials = Some(credentials);
                self.state = SessionState::SignedIn;
            }
            (AuthPurpose::Restore, Err(e)) => {
                if self.state != SessionState::Checking {
                    return;
                }
                tracing::warn!("Stored session rejected: {}", e);
                self.forget();
            }
            (AuthPurpose::Login, Ok(())) => {
                self.login_pending = false;
                if let Err(e) = self.store.save(&credentials) {
                    // Signed in for this run; next start will ask again
                    tracing::warn!("Could not persist credentials: {:#}", e);
                }
                tracing::info!("Signed in as {}", credentials.username);
                self.credentials = Some(credentials);
                self.state = SessionState::SignedIn;
            }
            (AuthPurpose::Login, Err(e)) => {
                self.login_pending = false;
                tracing::warn!("Login failed: {}", e);
                self.login_error = Some(
                    if e.is_rejection() {
                        INVALID_CREDENTIALS
                    } else {
                        LOGIN_FAILED
                    }
                    .to_string(),
                );
            }
        }
    }

    /// Sign out and remove stored credentials
    pub fn logout(&mut self) {
        if let Some(creds) = &self.credentials {
            tracing::info!("Signing out {}", creds.username);
        }
        self.forget();
        self.login_error = None;
    }

    fn forget(&mut self) {
        self.credentials = None;
        self.state = SessionState::SignedOut;
        self.login_pending = false;
        if let Err(e) = self.store.clear() {
            tracing::warn!("Could not remove credentials: {:#}", e);
        }
    }
}
