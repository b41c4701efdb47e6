//! Exports resource client

use std::collections::HashMap;
use std::sync::Arc;

use super::types::{ExportAssetRequest, ExportMetadata, ListExportsResponse};
use crate::error::Result;
use crate::http::Transport;
use crate::pagination::PaginationLinks;

/// Client for the `/v1/assets/{assetId}/exports` resource area
#[derive(Debug, Clone)]
pub struct ExportsClient {
    transport: Arc<Transport>,
}

impl ExportsClient {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// List the exports of an asset, with pagination cursors
    pub async fn list(
        &self,
        asset_id: i64,
    ) -> Result<(ListExportsResponse, Option<PaginationLinks>)> {
        let endpoint = format!("/v1/assets/{asset_id}/exports");
        let response = self.transport.get(&endpoint, &HashMap::new()).await?;
        let links = PaginationLinks::from_headers(&response.headers)?;
        let exports = serde_json::from_value(response.body)?;
        Ok((exports, links))
    }

    /// Start exporting an asset to its S3 destination
    pub async fn export(
        &self,
        asset_id: i64,
        request: &ExportAssetRequest,
    ) -> Result<ExportMetadata> {
        let endpoint = format!("/v1/assets/{asset_id}/exports");
        let response = self
            .transport
            .post(&endpoint, &HashMap::new(), request)
            .await?;
        Ok(serde_json::from_value(response.body)?)
    }

    /// Get the status of one export
    pub async fn status(&self, asset_id: i64, export_id: i64) -> Result<ExportMetadata> {
        let endpoint = format!("/v1/assets/{asset_id}/exports/{export_id}");
        let response = self.transport.get(&endpoint, &HashMap::new()).await?;
        Ok(serde_json::from_value(response.body)?)
    }
}
