//! Token DTOs and enums

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::types::SortOrder;

/// Capability granted to an access token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenScope {
    #[serde(rename = "assets:list")]
    AssetsList,
    #[serde(rename = "assets:read")]
    AssetsRead,
    #[serde(rename = "assets:write")]
    AssetsWrite,
    #[serde(rename = "geocode")]
    Geocode,
    #[serde(rename = "profile:read")]
    ProfileRead,
    #[serde(rename = "tokens:read")]
    TokensRead,
    #[serde(rename = "tokens:write")]
    TokensWrite,
}

/// Field to sort a token listing by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSortBy {
    /// Token name
    Name,
    /// Date the token was last used
    LastUsed,
}

impl TokenSortBy {
    /// Wire value used in the `sortBy` query parameter
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "NAME",
            Self::LastUsed => "LAST_USED",
        }
    }
}

/// Query parameters for listing tokens
#[derive(Debug, Clone)]
pub struct ListTokensParams {
    /// Page size, 1..=1000
    pub limit: u32,
    /// Page number, starting at 1
    pub page: u32,
    /// Free-text search over token names
    pub search: Option<String>,
    /// Sort field; omitted from the query when unset
    pub sort_by: Option<TokenSortBy>,
    /// Sort direction
    pub sort_order: SortOrder,
}

impl Default for ListTokensParams {
    fn default() -> Self {
        Self {
            limit: 1000,
            page: 1,
            search: None,
            sort_by: None,
            sort_order: SortOrder::default(),
        }
    }
}

impl ListTokensParams {
    /// Encode as a query string, `?` included
    pub fn to_query(&self) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        query.append_pair("limit", &self.limit.to_string());
        query.append_pair("page", &self.page.to_string());
        if let Some(sort_by) = self.sort_by {
            query.append_pair("sortBy", sort_by.as_str());
        }
        query.append_pair("sortOrder", self.sort_order.as_str());
        if let Some(search) = &self.search {
            query.append_pair("search", search);
        }
        format!("?{}", query.finish())
    }
}

/// Metadata describing one access token
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenMetadata {
    pub id: Option<String>,
    pub name: Option<String>,
    pub token: Option<String>,
    pub date_added: Option<String>,
    pub date_modified: Option<String>,
    pub date_last_used: Option<String>,
    pub asset_ids: Option<Vec<i64>>,
    pub is_default: Option<bool>,
    pub allowed_urls: Option<Vec<String>>,
    #[serde(default)]
    pub scopes: Vec<TokenScope>,
}

/// Response of the list-tokens operation
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ListTokensResponse {
    #[serde(default)]
    pub items: Vec<TokenMetadata>,
}

/// Request body for creating a token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTokenRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub scopes: Vec<TokenScope>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_ids: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_urls: Option<Vec<String>>,
}

/// Request body for modifying a token
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifyTokenRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_ids: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scopes: Option<Vec<TokenScope>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_urls: Option<Vec<String>>,
}
