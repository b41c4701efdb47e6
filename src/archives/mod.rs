//! Archives resource area (`/v1/assets/{assetId}/archives`)

mod client;
mod types;

pub use client::ArchivesClient;
pub use types::{ArchiveMetadata, ArchiveStatus, CreateArchiveRequest, ListArchivesResponse};
