//! User resource client

use std::collections::HashMap;
use std::sync::Arc;

use super::types::Profile;
use crate::error::Result;
use crate::http::Transport;

/// Client for the `/v1/me` resource area
#[derive(Debug, Clone)]
pub struct UserClient {
    transport: Arc<Transport>,
}

impl UserClient {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Get the profile of the authenticated user
    pub async fn profile(&self) -> Result<Profile> {
        let response = self.transport.get("/v1/me", &HashMap::new()).await?;
        Ok(serde_json::from_value(response.body)?)
    }
}
