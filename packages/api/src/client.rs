//! Credentialed HTTP client and shared response parsing.

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde_json::Value;

use crate::config;
use crate::error::ApiError;

/// HTTP client bound to a configurable base endpoint.
///
/// Every request carries credentials: on the web the browser's session cookie
/// travels via `fetch` include mode, natively a cookie store plays the same
/// role. Cloning is cheap and clones share the cookie store.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.cookie_store(true);
        let http = builder.build().expect("failed to build HTTP client");

        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Client targeting the configured base URL (`API_URL`, or the local
    /// development endpoint).
    pub fn from_env() -> Self {
        Self::new(config::base_url())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, format!("{}{path}", self.base_url));
        #[cfg(target_arch = "wasm32")]
        let builder = builder.fetch_credentials_include();
        builder
    }

    /// Send a request and parse the outcome.
    ///
    /// `Ok(Some(value))` for a 2xx JSON body, `Ok(None)` for 204 No Content.
    pub(crate) async fn send(&self, builder: RequestBuilder) -> Result<Option<Value>, ApiError> {
        let response = builder.send().await.map_err(|err| {
            tracing::warn!(%err, "request transport failure");
            ApiError::Network(err.to_string())
        })?;
        Self::parse_json(response).await
    }

    /// Send a request where only the response status is meaningful.
    ///
    /// Any 2xx succeeds, regardless of whether a body came back or what it
    /// contains. Non-2xx raises [`ApiError::RequestFailed`] with the same
    /// message extraction as [`Self::parse_json`].
    pub(crate) async fn send_status(&self, builder: RequestBuilder) -> Result<(), ApiError> {
        let response = builder.send().await.map_err(|err| {
            tracing::warn!(%err, "request transport failure");
            ApiError::Network(err.to_string())
        })?;

        if response.status().is_success() {
            return Ok(());
        }
        Err(Self::failure(response).await)
    }

    /// Parse a response per the shared contract.
    ///
    /// Non-2xx raises [`ApiError::RequestFailed`] carrying a message extracted
    /// from a JSON `message` body field when present; a body that fails to
    /// parse as JSON falls back to the generic message instead of crashing the
    /// error path.
    pub(crate) async fn parse_json(response: Response) -> Result<Option<Value>, ApiError> {
        let status = response.status();

        if !status.is_success() {
            return Err(Self::failure(response).await);
        }

        if status == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        let value = response.json().await.map_err(|err| {
            tracing::warn!(%err, "failed to parse success body");
            ApiError::Malformed
        })?;
        Ok(Some(value))
    }

    async fn failure(response: Response) -> ApiError {
        let status = response.status();
        let mut message = format!("Request failed ({})", status.as_u16());
        if let Ok(body) = response.json::<Value>().await {
            if let Some(server_message) = body.get("message").and_then(Value::as_str) {
                message = server_message.to_string();
            }
        }
        ApiError::RequestFailed {
            status: status.as_u16(),
            message,
        }
    }
}

/// Map a 401 server rejection to [`ApiError::Unauthorized`].
///
/// Applied on profile and listing fetches, where a 401 means the session is
/// gone and the caller should force a logout.
pub(crate) fn escalate_unauthorized(err: ApiError) -> ApiError {
    match err {
        ApiError::RequestFailed { status: 401, .. } => ApiError::Unauthorized,
        other => other,
    }
}
