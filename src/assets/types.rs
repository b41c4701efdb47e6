//! Asset DTOs and enums
//!
//! Wire names are camelCase; enum values match the API exactly (note the
//! numeric-prefixed ones like `3DTILES`).

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;
use url::form_urlencoded;

use crate::error::{Error, Result};
use crate::types::SortOrder;

/// Field to sort an asset listing by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AssetSortBy {
    /// Asset id
    #[default]
    Id,
    /// Asset name
    Name,
    /// Description
    Description,
    /// Size in bytes
    Bytes,
    /// Asset type
    Type,
    /// Tiling status
    Status,
    /// Date the asset was added
    DateAdded,
}

impl AssetSortBy {
    /// Wire value used in the `sortBy` query parameter
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Name => "NAME",
            Self::Description => "DESCRIPTION",
            Self::Bytes => "BYTES",
            Self::Type => "TYPE",
            Self::Status => "STATUS",
            Self::DateAdded => "DATE_ADDED",
        }
    }
}

/// Tiling pipeline status of an asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetStatus {
    AwaitingFiles,
    NotStarted,
    InProgress,
    Complete,
    Error,
    DataError,
}

impl AssetStatus {
    /// Wire value used in the `status` query parameter
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AwaitingFiles => "AWAITING_FILES",
            Self::NotStarted => "NOT_STARTED",
            Self::InProgress => "IN_PROGRESS",
            Self::Complete => "COMPLETE",
            Self::Error => "ERROR",
            Self::DataError => "DATA_ERROR",
        }
    }
}

/// Output format of a tiled asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetType {
    #[serde(rename = "3DTILES")]
    ThreeDTiles,
    #[serde(rename = "GLTF")]
    Gltf,
    #[serde(rename = "IMAGERY")]
    Imagery,
    #[serde(rename = "TERRAIN")]
    Terrain,
    #[serde(rename = "KML")]
    Kml,
    #[serde(rename = "CZML")]
    Czml,
    #[serde(rename = "GEOJSON")]
    GeoJson,
}

impl AssetType {
    /// Wire value used in the `type` query parameter
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ThreeDTiles => "3DTILES",
            Self::Gltf => "GLTF",
            Self::Imagery => "IMAGERY",
            Self::Terrain => "TERRAIN",
            Self::Kml => "KML",
            Self::Czml => "CZML",
            Self::GeoJson => "GEOJSON",
        }
    }
}

/// Vertical datum of raster terrain source data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HeightReference {
    MeanSeaLevel,
    Wgs84,
}

/// Geometry compression applied during tiling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GeometryCompression {
    None,
    #[default]
    Draco,
}

/// Texture format applied during tiling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextureFormat {
    #[default]
    Auto,
    Webp,
}

/// Query parameters for listing assets
#[derive(Debug, Clone)]
pub struct ListAssetsParams {
    /// Page size, 1..=1000
    pub limit: u32,
    /// Page number, starting at 1
    pub page: u32,
    /// Free-text search over name and description
    pub search: Option<String>,
    /// Sort field
    pub sort_by: AssetSortBy,
    /// Sort direction
    pub sort_order: SortOrder,
    /// Filter to these statuses (repeated parameter)
    pub status: Vec<AssetStatus>,
    /// Filter to these types (repeated parameter)
    pub asset_type: Vec<AssetType>,
}

impl Default for ListAssetsParams {
    fn default() -> Self {
        Self {
            limit: 1000,
            page: 1,
            search: None,
            sort_by: AssetSortBy::default(),
            sort_order: SortOrder::default(),
            status: Vec::new(),
            asset_type: Vec::new(),
        }
    }
}

impl ListAssetsParams {
    /// Encode as a query string, `?` included
    pub fn to_query(&self) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        query.append_pair("limit", &self.limit.to_string());
        query.append_pair("page", &self.page.to_string());
        query.append_pair("sortBy", self.sort_by.as_str());
        query.append_pair("sortOrder", self.sort_order.as_str());
        if let Some(search) = &self.search {
            query.append_pair("search", search);
        }
        for status in &self.status {
            query.append_pair("status", status.as_str());
        }
        for asset_type in &self.asset_type {
            query.append_pair("type", asset_type.as_str());
        }
        format!("?{}", query.finish())
    }
}

/// Metadata describing one asset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetMetadata {
    pub id: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub bytes: Option<u64>,
    #[serde(rename = "type")]
    pub asset_type: AssetType,
    pub status: Option<AssetStatus>,
    pub date_added: Option<String>,
    pub attribution: Option<String>,
    pub percent_complete: Option<u8>,
    pub archivable: Option<bool>,
    pub exportable: Option<bool>,
}

/// Response of the list-assets operation
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ListAssetsResponse {
    /// One page of asset metadata
    pub items: Vec<AssetMetadata>,
}

/// Source-specific tiling options for a new asset.
///
/// The variant name travels on the wire as the `sourceType` tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "sourceType")]
pub enum AssetOptions {
    #[serde(rename = "RASTER_IMAGERY")]
    RasterImagery,

    #[serde(rename = "RASTER_TERRAIN", rename_all = "camelCase")]
    RasterTerrain {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        height_reference: Option<HeightReference>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        to_meters: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        base_terrain_id: Option<i64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        water_mask: Option<bool>,
    },

    #[serde(rename = "TERRAIN_DATABASE")]
    TerrainDatabase,

    #[serde(rename = "CITYGML", rename_all = "camelCase")]
    CityGml {
        #[serde(default)]
        geometry_compression: GeometryCompression,
        #[serde(default)]
        disable_colors: bool,
        #[serde(default)]
        disable_textures: bool,
        #[serde(default)]
        clamp_to_terrain: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        base_terrain_id: Option<i64>,
    },

    #[serde(rename = "KML", rename_all = "camelCase")]
    Kml {
        #[serde(default)]
        geometry_compression: GeometryCompression,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        base_terrain_id: Option<i64>,
    },

    #[serde(rename = "3D_CAPTURE", rename_all = "camelCase")]
    ThreeDCapture {
        /// [longitude, latitude, height]
        position: [f64; 3],
        #[serde(default)]
        geometry_compression: GeometryCompression,
        #[serde(default)]
        texture_format: TextureFormat,
    },

    #[serde(rename = "3D_MODEL", rename_all = "camelCase")]
    ThreeDModel {
        /// [longitude, latitude, height]
        position: [f64; 3],
        #[serde(default)]
        geometry_compression: GeometryCompression,
        #[serde(default)]
        texture_format: TextureFormat,
        #[serde(default)]
        optimize: bool,
    },

    #[serde(rename = "POINT_CLOUD", rename_all = "camelCase")]
    PointCloud {
        /// [longitude, latitude, height]
        position: [f64; 3],
        #[serde(default)]
        geometry_compression: GeometryCompression,
    },

    #[serde(rename = "3DTILES", rename_all = "camelCase")]
    ThreeDTiles {
        /// Path of the tileset JSON within the uploaded data
        tileset_json: String,
    },

    #[serde(rename = "CZML")]
    Czml,

    #[serde(rename = "GEOJSON")]
    GeoJson,
}

/// AWS credentials for server-side ingest from S3
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwsCredentials {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_access_key: Option<String>,
}

/// Server-side ingest source for a new asset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetFrom {
    /// Source kind; only `S3` is supported
    #[serde(rename = "type")]
    pub kind: String,
    pub bucket: String,
    pub credentials: AwsCredentials,
    #[serde(default)]
    pub keys: Vec<String>,
    #[serde(default)]
    pub prefixes: Vec<String>,
}

impl AssetFrom {
    /// Ingest from an S3 bucket
    pub fn s3(bucket: impl Into<String>, credentials: AwsCredentials) -> Self {
        Self {
            kind: "S3".to_string(),
            bucket: bucket.into(),
            credentials,
            keys: Vec::new(),
            prefixes: Vec::new(),
        }
    }
}

/// Request body for creating an asset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAssetRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribution: Option<String>,
    #[serde(rename = "type")]
    pub asset_type: AssetType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_complete: Option<u8>,
    pub options: AssetOptions,
    #[serde(rename = "from", skip_serializing_if = "Option::is_none")]
    pub from: Option<AssetFrom>,
}

/// Temporary S3 location to upload source data into
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadLocation {
    pub endpoint: Option<String>,
    pub bucket: Option<String>,
    pub prefix: Option<String>,
    pub access_key: Option<String>,
    pub secret_access_key: Option<String>,
    pub session_token: Option<String>,
}

/// Request to issue once the upload has finished
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OnComplete {
    pub method: Option<String>,
    pub url: Option<String>,
    pub fields: Option<Value>,
}

/// Response of the create-asset operation
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAssetResponse {
    pub upload_location: Option<UploadLocation>,
    pub on_complete: Option<OnComplete>,
    pub asset_metadata: Option<AssetMetadata>,
}

/// Request body for modifying asset metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModifyAssetRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribution: Option<String>,
}

/// Attribution the viewer must display for an asset
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Attribution {
    pub html: Option<String>,
    pub collapsible: Option<bool>,
}

/// Access details for an asset hosted on ion
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetEndpoints {
    #[serde(rename = "type")]
    pub asset_type: Option<AssetType>,
    pub url: Option<String>,
    pub access_token: Option<String>,
    #[serde(default)]
    pub attributions: Vec<Attribution>,
}

/// Provider-specific options of an externally hosted asset
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalEndpointOptions {
    pub url: Option<String>,
    pub map_style: Option<String>,
    pub key: Option<String>,
}

/// Access details for an asset served by an external provider
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalAssetEndpoints {
    pub external_type: String,
    #[serde(rename = "type")]
    pub asset_type: Option<AssetType>,
    #[serde(default)]
    pub attributions: Vec<Attribution>,
    pub options: Option<ExternalEndpointOptions>,
}

/// Response of the access-endpoint operation, a union of the hosted and
/// external shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum AssetEndpoint {
    /// Asset served by ion itself
    Hosted(AssetEndpoints),
    /// Asset served by an external provider such as Bing
    External(ExternalAssetEndpoints),
}

impl AssetEndpoint {
    /// Match a response body against the supported endpoint shapes.
    ///
    /// The external shape carries the `externalType` discriminator and is
    /// tried first; the hosted shape has no required discriminator and
    /// would otherwise absorb every object.
    pub(crate) fn from_body(body: Value) -> Result<Self> {
        match serde_json::from_value::<ExternalAssetEndpoints>(body.clone()) {
            Ok(endpoints) => return Ok(Self::External(endpoints)),
            Err(e) => debug!("response does not match the external endpoint schema: {e}"),
        }
        match serde_json::from_value::<AssetEndpoints>(body) {
            Ok(endpoints) => return Ok(Self::Hosted(endpoints)),
            Err(e) => debug!("response does not match the hosted endpoint schema: {e}"),
        }
        Err(Error::malformed(
            "asset endpoint response does not match any supported schema",
        ))
    }
}
