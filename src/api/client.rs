//! API Client Core
//!
//! Shared request plumbing: base URL handling, bearer token, and mapping of
//! backend error responses onto [`DomainError`]. The backend reports
//! failures as JSON bodies with a `detail` message.

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::domain::{DomainError, DomainResult};

/// Where the backend lives and how to authenticate against it
///
/// The token is pre-obtained configuration; acquiring or refreshing it is
/// not this crate's concern.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub access_token: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/api/v1".to_string(),
            access_token: None,
        }
    }
}

/// Async client for the backend REST API
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::new(ApiConfig {
            base_url: base_url.into(),
            ..ApiConfig::default()
        })
    }

    /// Start a request against `path` (relative to the base URL)
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.config.base_url, path);
        let mut request = self.http.request(method, url);
        if let Some(token) = &self.config.access_token {
            request = request.bearer_auth(token);
        }
        request
    }

    /// Deserialize a successful response body, or map the failure
    pub(crate) async fn expect_json<T: DeserializeOwned>(response: Response) -> DomainResult<T> {
        let status = response.status();
        if status.is_success() {
            return response
                .json()
                .await
                .map_err(|e| DomainError::Internal(format!("malformed response body: {}", e)));
        }
        Err(Self::status_error(status, response).await)
    }

    /// Check a response for success, discarding the body
    pub(crate) async fn expect_ok(response: Response) -> DomainResult<()> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        Err(Self::status_error(status, response).await)
    }

    async fn status_error(status: StatusCode, response: Response) -> DomainError {
        let detail = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|body| {
                body.get("detail")
                    .and_then(|d| d.as_str())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| format!("HTTP {}", status));

        if status == StatusCode::NOT_FOUND {
            DomainError::NotFound(detail)
        } else {
            DomainError::Api(detail)
        }
    }
}

impl From<reqwest::Error> for DomainError {
    fn from(e: reqwest::Error) -> Self {
        DomainError::Api(e.to_string())
    }
}
