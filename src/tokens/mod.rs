//! Tokens resource area (`/v2/tokens`)
//!
//! Access tokens scope what a bearer may do; listing supports cursor
//! pagination like the asset listing does.

mod client;
mod types;

pub use client::TokensClient;
pub use types::{
    CreateTokenRequest, ListTokensParams, ListTokensResponse, ModifyTokenRequest, TokenMetadata,
    TokenScope, TokenSortBy,
};
