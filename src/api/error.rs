//! Error types for backend requests

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur when talking to the admin backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No stored credentials to attach to an authenticated request.
    #[error("No credentials found")]
    MissingCredentials,

    /// Backend answered with a non-success status.
    #[error("{endpoint} returned {status}")]
    Status {
        endpoint: &'static str,
        status: StatusCode,
    },

    /// Request never completed (DNS, connect, TLS, reset...).
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body was not the expected JSON.
    #[error("JSON error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Backend looked at the request and said no
    pub fn is_rejection(&self) -> bool {
        matches!(self, ApiError::Status { .. })
    }

    /// Message shown inline in the component that issued the request.
    ///
    /// Missing credentials keep their own wording; everything else collapses
    /// to the component's generic message.
    pub fn user_message(&self, generic: &str) -> String {
        match self {
            ApiError::MissingCredentials => self.to_string(),
            _ => generic.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_collapses_to_generic() {
        let err = ApiError::Status {
            endpoint: "/config",
            status: StatusCode::INTERNAL_SERVER_ERROR,
        };
        assert!(err.is_rejection());
        assert_eq!(
            err.user_message("Failed to fetch configuration"),
            "Failed to fetch configuration"
        );
    }

    #[test]
    fn missing_credentials_keeps_its_wording() {
        let err = ApiError::MissingCredentials;
        assert!(!err.is_rejection());
        assert_eq!(err.user_message("Failed to fetch calls"), "No credentials found");
    }
}
