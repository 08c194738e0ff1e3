//! HTTP transport
//!
//! Performs single HTTP calls against one API endpoint: URL building,
//! bearer auth, JSON decoding, and translation of non-2xx responses into
//! typed errors. The transport never retries; retry policy lives in the
//! pagination engine and with callers.

use crate::action::{Action, ActionFetch};
use crate::error::{Error, Result};
use crate::paginate::{PageFetch, PageResponse};
use crate::types::{JsonValue, QueryPairs};
use async_trait::async_trait;
use reqwest::{Client, Method, Response, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;


/// Configuration for a [`Transport`]
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Base URL all paths are joined onto
    pub base_url: String,
    /// API token sent as a bearer credential
    pub token: String,
    /// Request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl TransportConfig {
    /// Create a config with the default timeout and user agent
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
            timeout: Duration::from_secs(30),
            user_agent: format!("stratus-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Set the request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }
}

/// Single-shot HTTP transport for one API endpoint
pub struct Transport {
    client: Client,
    config: TransportConfig,
}

impl Transport {
    /// Create a transport from a config
    pub fn new(config: TransportConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self { client, config })
    }

    /// The configured base URL
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Make a GET request
    pub async fn get(&self, path: &str, query: &QueryPairs) -> Result<JsonValue> {
        self.request(Method::GET, path, query, None).await
    }

    /// Make a POST request with a JSON body
    pub async fn post(&self, path: &str, body: &JsonValue) -> Result<JsonValue> {
        self.request(Method::POST, path, &QueryPairs::new(), Some(body))
            .await
    }

    /// Make a PUT request with a JSON body
    pub async fn put(&self, path: &str, body: &JsonValue) -> Result<JsonValue> {
        self.request(Method::PUT, path, &QueryPairs::new(), Some(body))
            .await
    }

    /// Make a DELETE request
    pub async fn delete(&self, path: &str) -> Result<JsonValue> {
        self.request(Method::DELETE, path, &QueryPairs::new(), None)
            .await
    }

    /// Perform one HTTP call and decode the response.
    ///
    /// 2xx bodies decode to JSON (empty body becomes `Null`). HTTP 429 maps
    /// to [`Error::RateLimited`] with the `Retry-After` hint; every other
    /// non-2xx status maps to [`Error::ApiStatus`] with the API error
    /// envelope parsed when present.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        query: &QueryPairs,
        body: Option<&JsonValue>,
    ) -> Result<JsonValue> {
        let url = self.build_url(path, query)?;
        debug!("{} {}", method, url);

        let mut req = self
            .client
            .request(method.clone(), url)
            .bearer_auth(&self.config.token);
        if let Some(body) = body {
            req = req.json(body);
        }

        let response = req.send().await?;
        let status = response.status();
        debug!("{} {} -> {}", method, path, status.as_u16());

        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = extract_retry_after(&response);
            warn!("Rate limited on {}, retry_after={}s", path, retry_after);
            return Err(Error::RateLimited {
                retry_after_seconds: retry_after,
            });
        }

        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            return Err(parse_api_error(status.as_u16(), &body_text));
        }

        let text = response.text().await?;
        if text.is_empty() {
            return Ok(JsonValue::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }

    /// Join base URL and path, then append query pairs as-is
    fn build_url(&self, path: &str, query: &QueryPairs) -> Result<Url> {
        let base = self.config.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        let mut url = Url::parse(&format!("{base}/{path}"))?;
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }
        Ok(url)
    }
}

impl std::fmt::Debug for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transport")
            .field("base_url", &self.config.base_url)
            .field("timeout", &self.config.timeout)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl PageFetch for Transport {
    async fn fetch_page(&self, path: &str, query: &QueryPairs) -> Result<PageResponse> {
        let body = self.get(path, query).await?;
        Ok(PageResponse::new(body))
    }
}

#[async_trait]
impl ActionFetch for Transport {
    async fn fetch_action(&self, action_id: u64) -> Result<Action> {
        let body = self
            .get(&format!("actions/{action_id}"), &QueryPairs::new())
            .await?;
        let record = body
            .get("action")
            .cloned()
            .ok_or_else(|| Error::missing_field("action"))?;
        Ok(serde_json::from_value(record)?)
    }
}

/// `Retry-After` header in seconds; 0 when absent or unparsable
fn extract_retry_after(response: &Response) -> u64 {
    response
        .headers()
        .get("retry-after")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.parse().ok())
        .unwrap_or(0)
}

/// Map a non-2xx body to [`Error::ApiStatus`], reading the error envelope
/// `{"error": {"code": ..., "message": ...}}` when the body carries one.
fn parse_api_error(status: u16, body: &str) -> Error {
    #[derive(Deserialize)]
    struct Envelope {
        error: ErrorBody,
    }

    #[derive(Deserialize)]
    struct ErrorBody {
        #[serde(default)]
        code: String,
        #[serde(default)]
        message: String,
    }

    match serde_json::from_str::<Envelope>(body) {
        Ok(envelope) => Error::ApiStatus {
            status,
            code: envelope.error.code,
            message: envelope.error.message,
        },
        Err(_) => Error::api_status(status, body),
    }
}
