//! # cesium-ion
//!
//! A typed async client for the Cesium ion REST API: assets, archives,
//! exports, access tokens, and the user profile.
//!
//! ## Features
//!
//! - **Typed resource clients**: every operation takes and returns serde
//!   DTOs rather than raw JSON
//! - **Bearer authentication**: the token is attached to every request and
//!   can never be shadowed by caller-supplied headers
//! - **Cursor pagination**: `Link` response headers are parsed into
//!   structured next/prev cursors
//! - **Typed failures**: 401/402/404 and friends map to a fixed error
//!   taxonomy carrying the method, URL, status, and raw error body
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cesium_ion::assets::ListAssetsParams;
//! use cesium_ion::IonClient;
//!
//! #[tokio::main]
//! async fn main() -> cesium_ion::Result<()> {
//!     let client = IonClient::new(std::env::var("ION_TOKEN").expect("ION_TOKEN not set"));
//!
//!     let (page, links) = client.assets().list(&ListAssetsParams::default()).await?;
//!     for asset in &page.items {
//!         println!("{} ({:?})", asset.name, asset.asset_type);
//!     }
//!     if let Some(links) = links {
//!         println!("next page: {:?}", links.next);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                        IonClient                        │
//! │  assets()   archives()   exports()   tokens()   user()  │
//! └───────────────────────────┬─────────────────────────────┘
//!                             │
//!               ┌─────────────┴─────────────┐
//!               │         Transport         │
//!               │  GET / POST / PATCH /     │
//!               │  DELETE + bearer auth +   │
//!               │  status classification    │
//!               └─────────────┬─────────────┘
//!                             │
//!                   PaginationLinks (`Link` header)
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

/// Error types for the client
pub mod error;

/// Common types shared across resource areas
pub mod types;

/// HTTP transport with bearer auth and status classification
pub mod http;

/// `Link` header pagination cursors
pub mod pagination;

/// Assets resource area
pub mod assets;

/// Archives resource area
pub mod archives;

/// Exports resource area
pub mod exports;

/// Tokens resource area
pub mod tokens;

/// User resource area
pub mod user;

/// Top-level client
pub mod client;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::{Endpoint, IonClient};
pub use error::{Error, FailedRequest, Result};
pub use http::{ApiResponse, Transport, TransportConfig, DEFAULT_BASE_URL};
pub use pagination::PaginationLinks;
pub use types::SortOrder;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
