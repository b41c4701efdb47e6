//! User profile DTOs

use serde::Deserialize;

/// Storage quota of the account
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Storage {
    pub used: Option<u64>,
    pub available: Option<u64>,
    pub total: Option<u64>,
}

/// Profile of the authenticated user
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: i64,
    pub scopes: Vec<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub email_verified: Option<bool>,
    pub avatar: Option<String>,
    pub storage: Option<Storage>,
}
