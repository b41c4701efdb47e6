//! Assets resource client

use std::collections::HashMap;
use std::sync::Arc;

use super::types::{
    AssetEndpoint, AssetMetadata, CreateAssetRequest, CreateAssetResponse, ListAssetsParams,
    ListAssetsResponse, ModifyAssetRequest,
};
use crate::error::Result;
use crate::http::Transport;
use crate::pagination::PaginationLinks;

/// Client for the `/v1/assets` resource area
#[derive(Debug, Clone)]
pub struct AssetsClient {
    transport: Arc<Transport>,
}

impl AssetsClient {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// List assets, returning one page and its pagination cursors
    pub async fn list(
        &self,
        params: &ListAssetsParams,
    ) -> Result<(ListAssetsResponse, Option<PaginationLinks>)> {
        let endpoint = format!("/v1/assets{}", params.to_query());
        let response = self.transport.get(&endpoint, &HashMap::new()).await?;
        let links = PaginationLinks::from_headers(&response.headers)?;
        let assets = serde_json::from_value(response.body)?;
        Ok((assets, links))
    }

    /// Create a new asset and receive its upload location
    pub async fn create(&self, request: &CreateAssetRequest) -> Result<CreateAssetResponse> {
        let response = self
            .transport
            .post("/v1/assets", &HashMap::new(), request)
            .await?;
        Ok(serde_json::from_value(response.body)?)
    }

    /// Get metadata for one asset
    pub async fn get(&self, asset_id: i64) -> Result<AssetMetadata> {
        let endpoint = format!("/v1/assets/{asset_id}");
        let response = self.transport.get(&endpoint, &HashMap::new()).await?;
        Ok(serde_json::from_value(response.body)?)
    }

    /// Modify the name, description, or attribution of an asset
    pub async fn modify(&self, asset_id: i64, request: &ModifyAssetRequest) -> Result<()> {
        let endpoint = format!("/v1/assets/{asset_id}");
        self.transport
            .patch(&endpoint, &HashMap::new(), request)
            .await?;
        Ok(())
    }

    /// Delete an asset
    pub async fn delete(&self, asset_id: i64) -> Result<()> {
        let endpoint = format!("/v1/assets/{asset_id}");
        self.transport.delete(&endpoint, &HashMap::new()).await
    }

    /// Resolve how to stream an asset: hosted on ion or served externally
    pub async fn access_endpoint(&self, asset_id: i64) -> Result<AssetEndpoint> {
        let endpoint = format!("/v1/assets/{asset_id}/endpoint");
        let response = self.transport.get(&endpoint, &HashMap::new()).await?;
        AssetEndpoint::from_body(response.body)
    }
}
