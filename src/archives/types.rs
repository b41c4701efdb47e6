//! Archive DTOs and enums

use serde::{Deserialize, Serialize};

/// Status of an archive build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ArchiveStatus {
    NotStarted,
    InProgress,
    Complete,
    Error,
}

/// Metadata describing one archive
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveMetadata {
    pub id: Option<i64>,
    pub asset_id: Option<i64>,
    pub format: Option<String>,
    pub status: Option<ArchiveStatus>,
    pub bytes_archived: Option<u64>,
}

/// Response of the list-archives operation
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ListArchivesResponse {
    #[serde(default)]
    pub items: Vec<ArchiveMetadata>,
}

/// Request body for creating an archive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateArchiveRequest {
    /// Archive format; only `ZIP` is supported
    pub format: String,
}

impl Default for CreateArchiveRequest {
    fn default() -> Self {
        Self {
            format: "ZIP".to_string(),
        }
    }
}
