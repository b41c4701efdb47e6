//! HTTP transport module
//!
//! One authenticated request per call against a configured base host, with
//! the outcome classified into success, a typed failure from the status
//! taxonomy, or a transport-level error.

mod transport;

pub use transport::{ApiResponse, Transport, TransportConfig, TransportConfigBuilder};

/// Default base host for the ion REST API
pub const DEFAULT_BASE_URL: &str = "https://api.cesium.com";
