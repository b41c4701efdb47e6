//! Export DTOs and enums

use serde::{Deserialize, Serialize};

/// Status of an export job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExportStatus {
    NotStarted,
    Queued,
    InProgress,
    Complete,
    Error,
}

/// Destination an export was written to
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExportDestination {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub bucket: Option<String>,
    pub prefix: Option<String>,
}

/// Metadata describing one export
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportMetadata {
    pub id: Option<i64>,
    pub asset_id: Option<i64>,
    pub date_added: Option<String>,
    pub status: Option<ExportStatus>,
    pub bytes_exported: Option<u64>,
    pub to: Option<ExportDestination>,
}

/// Response of the list-exports operation
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ListExportsResponse {
    #[serde(default)]
    pub items: Vec<ExportMetadata>,
}

/// Request body for exporting an asset to S3
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportAssetRequest {
    /// Export format; only `S3` is supported
    pub format: String,
    pub bucket: String,
    pub prefix: String,
    pub access_key_id: String,
    pub secret_access_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_token: Option<String>,
}

impl ExportAssetRequest {
    /// Export to an S3 bucket
    pub fn s3(
        bucket: impl Into<String>,
        prefix: impl Into<String>,
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
    ) -> Self {
        Self {
            format: "S3".to_string(),
            bucket: bucket.into(),
            prefix: prefix.into(),
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            session_token: None,
        }
    }
}
