//! DNS zone resource client

use super::unwrap_key;
use crate::error::Result;
use crate::paginate;
use crate::transport::Transport;
use crate::types::{FilterParams, QueryPairs};
use chrono::{DateTime, Utc};
use futures::Stream;
use serde::{Deserialize, Serialize};

const ITEMS_KEY: &str = "zones";

/// A DNS zone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub id: String,
    pub name: String,
    /// Default TTL for records in this zone, in seconds
    pub ttl: u64,
    #[serde(default)]
    pub records_count: u64,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
}

/// Payload for creating a zone
#[derive(Debug, Clone, Serialize)]
pub struct CreateZoneRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u64>,
}

/// Operations on DNS zones
#[derive(Debug)]
pub struct ZonesClient<'a> {
    transport: &'a Transport,
}

impl<'a> ZonesClient<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Lazily stream all zones matching `filters`
    pub fn list(&self, filters: &FilterParams) -> impl Stream<Item = Result<Zone>> + 'a {
        paginate::paginate(self.transport, "zones", ITEMS_KEY, filters)
    }

    /// Fetch every matching zone eagerly
    pub async fn all(&self, filters: &FilterParams) -> Result<Vec<Zone>> {
        paginate::fetch_all(self.transport, "zones", ITEMS_KEY, filters).await
    }

    /// Fetch one zone by id
    pub async fn get(&self, id: &str) -> Result<Zone> {
        let body = self
            .transport
            .get(&format!("zones/{id}"), &QueryPairs::new())
            .await?;
        unwrap_key(body, "zone")
    }

    /// Create a zone
    pub async fn create(&self, request: &CreateZoneRequest) -> Result<Zone> {
        let body = self
            .transport
            .post("zones", &serde_json::to_value(request)?)
            .await?;
        unwrap_key(body, "zone")
    }

    /// Delete a zone
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.transport.delete(&format!("zones/{id}")).await?;
        Ok(())
    }
}
