//! Error types for the Cesium ion client
//!
//! All public APIs return `Result<T, Error>` where Error is defined here.
//! Failed requests are classified by HTTP status code into a fixed taxonomy;
//! everything the API reported (method, URL, status, raw body) travels with
//! the error so callers can surface it verbatim.

use std::fmt;

use reqwest::{Method, StatusCode};
use thiserror::Error;

/// Context captured from a request that returned a non-success status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedRequest {
    /// HTTP method of the request
    pub method: String,
    /// Full request URL
    pub url: String,
    /// Status code the server returned
    pub status: u16,
    /// Raw response body
    pub body: String,
}

impl fmt::Display for FailedRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} request to: {} has returned with status code: {}. Error: \"{}\"",
            self.method, self.url, self.status, self.body
        )
    }
}

/// The main error type for the Cesium ion client
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // Status-code taxonomy
    // ========================================================================
    /// 401 — bearer token rejected or expired
    #[error("invalid credentials: {0}")]
    InvalidCredentials(FailedRequest),

    /// 402 — account plan tier insufficient for the operation
    #[error("plan upgrade required: {0}")]
    PlanUpgradeRequired(FailedRequest),

    /// 404 — target entity does not exist
    #[error("resource not found: {0}")]
    ResourceNotFound(FailedRequest),

    /// Any other non-success status code
    #[error("unknown API error: {0}")]
    Unknown(FailedRequest),

    // ========================================================================
    // Shape and usage errors
    // ========================================================================
    /// A response body or `Link` header does not match any expected shape
    #[error("malformed response: {message}")]
    MalformedResponse { message: String },

    /// Caller asked for a resource area that does not exist
    #[error("provided endpoint '{endpoint}' is not supported")]
    UnsupportedEndpoint { endpoint: String },

    /// A caller-supplied header cannot be represented on the wire
    #[error("invalid header: {message}")]
    InvalidHeader { message: String },

    // ========================================================================
    // Transport-level errors
    // ========================================================================
    /// The request itself failed (connect, timeout, TLS, ...)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A response body failed to decode as JSON
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The configured base URL or an endpoint path is not a valid URL
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl Error {
    /// Classify a non-success status code into the taxonomy.
    ///
    /// The mapping is a single static lookup with an explicit default
    /// branch; extend it here when the API grows new failure codes.
    pub fn from_status(
        status: StatusCode,
        method: &Method,
        url: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        let failed = FailedRequest {
            method: method.to_string(),
            url: url.into(),
            status: status.as_u16(),
            body: body.into(),
        };
        match status.as_u16() {
            401 => Self::InvalidCredentials(failed),
            402 => Self::PlanUpgradeRequired(failed),
            404 => Self::ResourceNotFound(failed),
            _ => Self::Unknown(failed),
        }
    }

    /// Create a malformed-response error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            message: message.into(),
        }
    }

    /// Create an unsupported-endpoint error
    pub fn unsupported_endpoint(endpoint: impl Into<String>) -> Self {
        Self::UnsupportedEndpoint {
            endpoint: endpoint.into(),
        }
    }

    /// Create an invalid-header error
    pub fn invalid_header(message: impl Into<String>) -> Self {
        Self::InvalidHeader {
            message: message.into(),
        }
    }

    /// The status code of a classified failure, if this is one
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::InvalidCredentials(f)
            | Self::PlanUpgradeRequired(f)
            | Self::ResourceNotFound(f)
            | Self::Unknown(f) => Some(f.status),
            _ => None,
        }
    }
}

/// Result type alias for the Cesium ion client
pub type Result<T> = std::result::Result<T, Error>;
