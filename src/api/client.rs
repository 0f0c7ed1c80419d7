//! Admin backend HTTP client.
//!
//! Authenticated endpoints take the username and password as literal
//! `username` / `password` header values (not a bearer scheme). `/auth`
//! takes them in the body instead. Any 2xx is success; everything else is
//! reported as `ApiError::Status`. No client-side timeout is configured.

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::error::ApiError;
use super::types::{Call, CallsQuery, ConfigPatch, Configuration, Credentials};

const USERNAME_HEADER: &str = "username";
const PASSWORD_HEADER: &str = "password";

/// Client for the voice-AI admin backend.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client for the backend at `base_url`
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let http = Client::builder()
            .user_agent(concat!("callboard/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ApiError::Transport)?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authed(&self, builder: RequestBuilder, credentials: &Credentials) -> RequestBuilder {
        builder
            .header(USERNAME_HEADER, &credentials.username)
            .header(PASSWORD_HEADER, &credentials.password)
            .header(CONTENT_TYPE, "application/json")
    }

    /// Check credentials with `POST /auth`. Ok means the backend accepted them.
    pub async fn authenticate(&self, credentials: &Credentials) -> Result<(), ApiError> {
        debug!("Authenticating {} against /auth", credentials.username);

        let response = self
            .http
            .post(self.url("/auth"))
            .json(credentials)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            debug!("/auth rejected credentials: {}", status);
            Err(ApiError::Status {
                endpoint: "/auth",
                status,
            })
        }
    }

    /// `GET /config`
    pub async fn fetch_config(&self, credentials: &Credentials) -> Result<Configuration, ApiError> {
        let request = self.authed(self.http.get(self.url("/config")), credentials);
        self.send_json("/config", request).await
    }

    /// `PATCH /config` with only the changed fields; returns the full merged record
    pub async fn patch_config(
        &self,
        credentials: &Credentials,
        patch: &ConfigPatch,
    ) -> Result<Configuration, ApiError> {
        let request = self
            .authed(self.http.patch(self.url("/config")), credentials)
            .json(patch);
        self.send_json("/config", request).await
    }

    /// `POST /calls` - one page of call records
    pub async fn list_calls(
        &self,
        credentials: &Credentials,
        query: &CallsQuery,
    ) -> Result<Vec<Call>, ApiError> {
        let request = self
            .authed(self.http.post(self.url("/calls")), credentials)
            .json(query);
        self.send_json("/calls", request).await
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            warn!("{} failed with {}", endpoint, status);
            return Err(ApiError::Status { endpoint, status });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| {
            warn!("{} returned an unreadable body: {}", endpoint, e);
            ApiError::Decode(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::FaqEntry;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn creds() -> Credentials {
        Credentials::new("owner", "s3cret")
    }

    fn config_json(forward: bool) -> serde_json::Value {
        json!({
            "FORWARD_TO_PAM": forward,
            "FALLBACK_NUMBER": "+15550001111",
            "CUSTOMER_FACING_NUMBER": "+15550002222",
            "PAM_PHONE_NUMBER": "+15550003333",
            "FAQ": []
        })
    }

    #[tokio::test]
    async fn authenticate_posts_credentials_in_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth"))
            .and(body_json(json!({"username": "owner", "password": "s3cret"})))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri()).unwrap();
        assert!(client.authenticate(&creds()).await.is_ok());
    }

    #[tokio::test]
    async fn authenticate_maps_rejection_to_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri()).unwrap();
        let err = client.authenticate(&creds()).await.unwrap_err();
        assert!(err.is_rejection());
    }

    #[tokio::test]
    async fn fetch_config_sends_credential_headers() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/config"))
            .and(header("username", "owner"))
            .and(header("password", "s3cret"))
            .and(header("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(config_json(true)))
            .expect(1)
            .mount(&server)
            .await;

        // Trailing slash on the base URL must not double up
        let client = ApiClient::new(format!("{}/", server.uri())).unwrap();
        let config = client.fetch_config(&creds()).await.unwrap();
        assert!(config.forward_to_pam);
        assert_eq!(config.pam_phone_number, "+15550003333");
    }

    #[tokio::test]
    async fn patch_config_sends_only_changed_field() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/config"))
            .and(body_json(json!({"FORWARD_TO_PAM": false})))
            .respond_with(ResponseTemplate::new(200).set_body_json(config_json(false)))
            .expect(1)
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri()).unwrap();
        let config = client
            .patch_config(&creds(), &ConfigPatch::forwarding(false))
            .await
            .unwrap();
        assert!(!config.forward_to_pam);
    }

    #[tokio::test]
    async fn patch_config_faq_sends_entire_list() {
        let server = MockServer::start().await;
        let faq = vec![FaqEntry::new("Parking?", "Street only"), FaqEntry::new("", "")];
        Mock::given(method("PATCH"))
            .and(path("/config"))
            .and(body_json(json!({"FAQ": [
                {"question": "Parking?", "answer": "Street only"},
                {"question": "", "answer": ""}
            ]})))
            .respond_with(ResponseTemplate::new(200).set_body_json(config_json(true)))
            .expect(1)
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri()).unwrap();
        client
            .patch_config(&creds(), &ConfigPatch::faq(faq))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn list_calls_posts_query() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/calls"))
            .and(header("username", "owner"))
            .and(body_json(json!({
                "limit": 10,
                "sort_order": "descending",
                "pagination_key": "call_3"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"call_id": "call_2", "start_timestamp": 1_700_000_000_000i64},
                {"call_id": "call_1", "start_timestamp": 1_699_000_000_000i64}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri()).unwrap();
        let calls = client
            .list_calls(&creds(), &CallsQuery::newest_first(10, Some("call_3".into())))
            .await
            .unwrap();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[1].call_id, "call_1");
    }

    #[tokio::test]
    async fn server_error_is_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/config"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri()).unwrap();
        let err = client.fetch_config(&creds()).await.unwrap_err();
        assert!(matches!(err, ApiError::Status { endpoint: "/config", .. }));
    }

    #[tokio::test]
    async fn garbage_body_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/config"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri()).unwrap();
        let err = client.fetch_config(&creds()).await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn unreachable_backend_is_transport_error() {
        // Port 9 (discard) on localhost is closed in test environments
        let client = ApiClient::new("http://127.0.0.1:9").unwrap();
        let err = client.fetch_config(&creds()).await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }
}
