//! Authenticated HTTP transport
//!
//! Owns the network session and translates each raw outcome into either a
//! structured success result or a typed failure. No retries: a failure is
//! terminal for that call and surfaces to the caller immediately.

use std::collections::HashMap;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION};
use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::DEFAULT_BASE_URL;
use crate::error::{Error, Result};

/// Configuration for the transport
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Base URL for all requests
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
    /// Headers attached to every request
    pub default_headers: HashMap<String, String>,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: format!("cesium-ion/{}", env!("CARGO_PKG_VERSION")),
            default_headers: HashMap::new(),
        }
    }
}

impl TransportConfig {
    /// Create a new config builder
    pub fn builder() -> TransportConfigBuilder {
        TransportConfigBuilder::default()
    }
}

/// Builder for transport config
#[derive(Default)]
pub struct TransportConfigBuilder {
    config: TransportConfig,
}

impl TransportConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Build the config
    pub fn build(self) -> TransportConfig {
        self.config
    }
}

/// Result of a single successful request: status, parsed body, headers.
///
/// Exists only as the transient outcome of one call; never persisted.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// Status code the server returned
    pub status: StatusCode,
    /// Parsed JSON body; `Value::Null` when the response carried no body
    pub body: Value,
    /// Response headers
    pub headers: HeaderMap,
}

/// Authenticated HTTP transport for the ion REST API
///
/// Constructed once with a base host and a bearer token, both immutable
/// for the transport's lifetime. Holds no mutable state across calls, so
/// concurrent requests from the same instance are safe.
pub struct Transport {
    client: Client,
    config: TransportConfig,
    bearer_token: String,
}

impl Transport {
    /// Create a transport against the default API host
    pub fn new(bearer_token: impl Into<String>) -> Self {
        Self::with_config(TransportConfig::default(), bearer_token)
    }

    /// Create a transport against a custom host
    pub fn with_host(host: impl Into<String>, bearer_token: impl Into<String>) -> Self {
        Self::with_config(
            TransportConfig::builder().base_url(host).build(),
            bearer_token,
        )
    }

    /// Create a transport with custom configuration
    pub fn with_config(config: TransportConfig, bearer_token: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            config,
            bearer_token: bearer_token.into(),
        }
    }

    /// The configured base URL
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Make a GET request; 200 is the only success status
    pub async fn get(
        &self,
        endpoint: &str,
        headers: &HashMap<String, String>,
    ) -> Result<ApiResponse> {
        self.dispatch::<Value>(Method::GET, endpoint, headers, None, StatusCode::OK)
            .await
    }

    /// Make a POST request with a JSON body; 200 is the only success status
    pub async fn post<B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        headers: &HashMap<String, String>,
        body: &B,
    ) -> Result<ApiResponse> {
        self.dispatch(Method::POST, endpoint, headers, Some(body), StatusCode::OK)
            .await
    }

    /// Make a PATCH request with a JSON body; 204 is the only success status.
    ///
    /// A 204 normally carries no body, in which case `ApiResponse::body` is
    /// `Value::Null`; a body sent anyway is still parsed and returned.
    pub async fn patch<B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        headers: &HashMap<String, String>,
        body: &B,
    ) -> Result<ApiResponse> {
        self.dispatch(
            Method::PATCH,
            endpoint,
            headers,
            Some(body),
            StatusCode::NO_CONTENT,
        )
        .await
    }

    /// Make a DELETE request; 204 is the only success status
    pub async fn delete(&self, endpoint: &str, headers: &HashMap<String, String>) -> Result<()> {
        self.dispatch::<Value>(Method::DELETE, endpoint, headers, None, StatusCode::NO_CONTENT)
            .await?;
        Ok(())
    }

    /// Perform one request/response cycle.
    ///
    /// Headers are assembled fresh per call; the connection returns to the
    /// pool on every exit path.
    async fn dispatch<B: Serialize + ?Sized>(
        &self,
        method: Method,
        endpoint: &str,
        headers: &HashMap<String, String>,
        body: Option<&B>,
        expected: StatusCode,
    ) -> Result<ApiResponse> {
        let url = self.build_url(endpoint);
        let header_map = self.build_headers(headers)?;
        debug!(
            "{} headers successfully added to {} {}",
            header_map.len(),
            method,
            url
        );

        let mut request = self.client.request(method.clone(), &url).headers(header_map);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let response_headers = response.headers().clone();
        let text = response.text().await?;

        if status != expected {
            warn!("{} {} returned unexpected status {}", method, url, status);
            return Err(Error::from_status(status, &method, url, text));
        }

        debug!("request succeeded: {} {}", method, url);
        Ok(ApiResponse {
            status,
            body: parse_body(&text)?,
            headers: response_headers,
        })
    }

    /// Merge default and caller headers, then attach the bearer token.
    ///
    /// The `Authorization` header is inserted last so caller-supplied
    /// headers of the same name can never override or duplicate it.
    fn build_headers(&self, headers: &HashMap<String, String>) -> Result<HeaderMap> {
        let mut header_map = HeaderMap::new();
        for (key, value) in self.config.default_headers.iter().chain(headers) {
            let name = HeaderName::from_bytes(key.as_bytes())
                .map_err(|e| Error::invalid_header(format!("{key}: {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| Error::invalid_header(format!("{key}: {e}")))?;
            header_map.insert(name, value);
        }

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", self.bearer_token))
            .map_err(|e| Error::invalid_header(format!("authorization: {e}")))?;
        auth.set_sensitive(true);
        header_map.insert(AUTHORIZATION, auth);

        Ok(header_map)
    }

    /// Build the full URL from a relative endpoint path.
    ///
    /// Absolute URLs pass through untouched, so pagination cursor URLs can
    /// be fetched directly.
    fn build_url(&self, endpoint: &str) -> String {
        if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
            return endpoint.to_string();
        }

        let base = self.config.base_url.trim_end_matches('/');
        let path = endpoint.trim_start_matches('/');
        format!("{base}/{path}")
    }
}

impl std::fmt::Debug for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transport")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Decode a response body, tolerating the empty 204 case.
fn parse_body(text: &str) -> Result<Value> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(text)?)
}
