//! Archives resource client

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use super::types::{ArchiveMetadata, CreateArchiveRequest, ListArchivesResponse};
use crate::error::Result;
use crate::http::Transport;

/// Client for the `/v1/assets/{assetId}/archives` resource area
#[derive(Debug, Clone)]
pub struct ArchivesClient {
    transport: Arc<Transport>,
}

impl ArchivesClient {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// List the archives of an asset
    pub async fn list(&self, asset_id: i64) -> Result<ListArchivesResponse> {
        let endpoint = format!("/v1/assets/{asset_id}/archives");
        let response = self.transport.get(&endpoint, &HashMap::new()).await?;
        Ok(serde_json::from_value(response.body)?)
    }

    /// Start building a new archive of an asset
    pub async fn create(
        &self,
        asset_id: i64,
        request: &CreateArchiveRequest,
    ) -> Result<ArchiveMetadata> {
        let endpoint = format!("/v1/assets/{asset_id}/archives");
        let response = self
            .transport
            .post(&endpoint, &HashMap::new(), request)
            .await?;
        Ok(serde_json::from_value(response.body)?)
    }

    /// Get metadata for one archive
    pub async fn get(&self, asset_id: i64, archive_id: i64) -> Result<ArchiveMetadata> {
        let endpoint = format!("/v1/assets/{asset_id}/archives/{archive_id}");
        let response = self.transport.get(&endpoint, &HashMap::new()).await?;
        Ok(serde_json::from_value(response.body)?)
    }

    /// Delete an archive
    pub async fn delete(&self, asset_id: i64, archive_id: i64) -> Result<()> {
        let endpoint = format!("/v1/assets/{asset_id}/archives/{archive_id}");
        self.transport.delete(&endpoint, &HashMap::new()).await
    }

    /// Fetch the download descriptor of a completed archive.
    ///
    /// Streaming the archive contents to disk is not supported; the raw
    /// response body is returned as-is.
    // TODO: stream the archive bytes instead of returning the raw body
    pub async fn download(&self, asset_id: i64, archive_id: i64) -> Result<Value> {
        let endpoint = format!("/v1/assets/{asset_id}/archives/{archive_id}/download");
        let response = self.transport.get(&endpoint, &HashMap::new()).await?;
        Ok(response.body)
    }
}
