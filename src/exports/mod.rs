//! Exports resource area (`/v1/assets/{assetId}/exports`)

mod client;
mod types;

pub use client::ExportsClient;
pub use types::{
    ExportAssetRequest, ExportDestination, ExportMetadata, ExportStatus, ListExportsResponse,
};

#[cfg(test)]
mod tests;
