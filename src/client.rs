//! Top-level client
//!
//! Wires a host/token pair to the resource clients. The transport is
//! shared; each accessor hands out a lightweight resource client over it.

use std::str::FromStr;
use std::sync::Arc;

use crate::archives::ArchivesClient;
use crate::assets::AssetsClient;
use crate::error::Error;
use crate::exports::ExportsClient;
use crate::http::{Transport, TransportConfig};
use crate::tokens::TokensClient;
use crate::user::UserClient;

/// The supported resource areas of the API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Archives,
    Assets,
    Exports,
    Tokens,
    User,
}

impl Endpoint {
    /// All supported resource areas
    pub const ALL: [Endpoint; 5] = [
        Endpoint::Archives,
        Endpoint::Assets,
        Endpoint::Exports,
        Endpoint::Tokens,
        Endpoint::User,
    ];

    /// Canonical name of the resource area
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Archives => "ARCHIVES",
            Self::Assets => "ASSETS",
            Self::Exports => "EXPORTS",
            Self::Tokens => "TOKENS",
            Self::User => "USER",
        }
    }
}

impl FromStr for Endpoint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ARCHIVES" => Ok(Self::Archives),
            "ASSETS" => Ok(Self::Assets),
            "EXPORTS" => Ok(Self::Exports),
            "TOKENS" => Ok(Self::Tokens),
            "USER" => Ok(Self::User),
            other => Err(Error::unsupported_endpoint(other)),
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Entry point of the crate: an authenticated client for the ion REST API
///
/// ```rust,no_run
/// use cesium_ion::IonClient;
///
/// # async fn run() -> cesium_ion::Result<()> {
/// let client = IonClient::new("my-bearer-token");
/// let profile = client.user().profile().await?;
/// println!("logged in as {:?}", profile.username);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct IonClient {
    transport: Arc<Transport>,
}

impl IonClient {
    /// Create a client against the default API host
    pub fn new(bearer_token: impl Into<String>) -> Self {
        Self {
            transport: Arc::new(Transport::new(bearer_token)),
        }
    }

    /// Create a client against a custom host
    pub fn with_host(host: impl Into<String>, bearer_token: impl Into<String>) -> Self {
        Self {
            transport: Arc::new(Transport::with_host(host, bearer_token)),
        }
    }

    /// Create a client with custom transport configuration
    pub fn with_config(config: TransportConfig, bearer_token: impl Into<String>) -> Self {
        Self {
            transport: Arc::new(Transport::with_config(config, bearer_token)),
        }
    }

    /// The shared transport
    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    /// Client for the assets resource area
    pub fn assets(&self) -> AssetsClient {
        AssetsClient::new(Arc::clone(&self.transport))
    }

    /// Client for the archives resource area
    pub fn archives(&self) -> ArchivesClient {
        ArchivesClient::new(Arc::clone(&self.transport))
    }

    /// Client for the exports resource area
    pub fn exports(&self) -> ExportsClient {
        ExportsClient::new(Arc::clone(&self.transport))
    }

    /// Client for the tokens resource area
    pub fn tokens(&self) -> TokensClient {
        TokensClient::new(Arc::clone(&self.transport))
    }

    /// Client for the user resource area
    pub fn user(&self) -> UserClient {
        UserClient::new(Arc::clone(&self.transport))
    }
}
