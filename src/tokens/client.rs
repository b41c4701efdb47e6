//! Tokens resource client

use std::collections::HashMap;
use std::sync::Arc;

use super::types::{
    CreateTokenRequest, ListTokensParams, ListTokensResponse, ModifyTokenRequest, TokenMetadata,
};
use crate::error::Result;
use crate::http::Transport;
use crate::pagination::PaginationLinks;

/// Client for the `/v2/tokens` resource area
#[derive(Debug, Clone)]
pub struct TokensClient {
    transport: Arc<Transport>,
}

impl TokensClient {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// List tokens, returning one page and its pagination cursors
    pub async fn list(
        &self,
        params: &ListTokensParams,
    ) -> Result<(ListTokensResponse, Option<PaginationLinks>)> {
        let endpoint = format!("/v2/tokens{}", params.to_query());
        let response = self.transport.get(&endpoint, &HashMap::new()).await?;
        let links = PaginationLinks::from_headers(&response.headers)?;
        let tokens = serde_json::from_value(response.body)?;
        Ok((tokens, links))
    }

    /// Create a new access token
    pub async fn create(&self, request: &CreateTokenRequest) -> Result<TokenMetadata> {
        let response = self
            .transport
            .post("/v2/tokens", &HashMap::new(), request)
            .await?;
        Ok(serde_json::from_value(response.body)?)
    }

    /// Get metadata for one token
    pub async fn get(&self, token_id: &str) -> Result<TokenMetadata> {
        let endpoint = format!("/v2/tokens/{token_id}");
        let response = self.transport.get(&endpoint, &HashMap::new()).await?;
        Ok(serde_json::from_value(response.body)?)
    }

    /// Modify the name, scopes, or restrictions of a token
    pub async fn modify(&self, token_id: &str, request: &ModifyTokenRequest) -> Result<()> {
        let endpoint = format!("/v2/tokens/{token_id}");
        self.transport
            .patch(&endpoint, &HashMap::new(), request)
            .await?;
        Ok(())
    }

    /// Delete a token
    pub async fn delete(&self, token_id: &str) -> Result<()> {
        let endpoint = format!("/v2/tokens/{token_id}");
        self.transport.delete(&endpoint, &HashMap::new()).await
    }

    /// Get the account's default token
    pub async fn default_token(&self) -> Result<TokenMetadata> {
        let response = self
            .transport
            .get("/v2/tokens/default", &HashMap::new())
            .await?;
        Ok(serde_json::from_value(response.body)?)
    }
}
