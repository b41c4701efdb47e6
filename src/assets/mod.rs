//! Assets resource area (`/v1/assets`)
//!
//! Listing with cursor pagination, asset creation with per-source-type
//! upload options, metadata reads and edits, deletion, and the tileset
//! access endpoint.

mod client;
mod types;

pub use client::AssetsClient;
pub use types::{
    AssetEndpoint, AssetEndpoints, AssetFrom, AssetMetadata, AssetOptions, AssetSortBy,
    AssetStatus, AssetType, Attribution, AwsCredentials, CreateAssetRequest, CreateAssetResponse,
    ExternalAssetEndpoints, ExternalEndpointOptions, GeometryCompression, HeightReference,
    ListAssetsParams, ListAssetsResponse, ModifyAssetRequest, OnComplete, TextureFormat,
    UploadLocation,
};
