//! Volume resource client

use super::unwrap_key;
use crate::action::Action;
use crate::error::Result;
use crate::paginate;
use crate::transport::Transport;
use crate::types::{FilterParams, QueryPairs};
use chrono::{DateTime, Utc};
use futures::Stream;
use serde::{Deserialize, Serialize};

const ITEMS_KEY: &str = "volumes";

/// Volume lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VolumeStatus {
    Creating,
    Available,
}

/// A block storage volume
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Volume {
    pub id: u64,
    pub name: String,
    /// Size in GB
    pub size: u64,
    pub location: String,
    pub status: VolumeStatus,
    /// Server the volume is attached to, if any
    #[serde(default)]
    pub server: Option<u64>,
    pub created: DateTime<Utc>,
}

/// Payload for creating a volume
#[derive(Debug, Clone, Serialize)]
pub struct CreateVolumeRequest {
    pub name: String,
    pub size: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<u64>,
}

/// Response of a volume creation
#[derive(Debug, Clone, Deserialize)]
pub struct VolumeCreated {
    pub volume: Volume,
    pub action: Action,
}

/// Operations on volumes
#[derive(Debug)]
pub struct VolumesClient<'a> {
    transport: &'a Transport,
}

impl<'a> VolumesClient<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Lazily stream all volumes matching `filters`
    pub fn list(&self, filters: &FilterParams) -> impl Stream<Item = Result<Volume>> + 'a {
        paginate::paginate(self.transport, "volumes", ITEMS_KEY, filters)
    }

    /// Fetch every matching volume eagerly
    pub async fn all(&self, filters: &FilterParams) -> Result<Vec<Volume>> {
        paginate::fetch_all(self.transport, "volumes", ITEMS_KEY, filters).await
    }

    /// Fetch one volume by id
    pub async fn get(&self, id: u64) -> Result<Volume> {
        let body = self
            .transport
            .get(&format!("volumes/{id}"), &QueryPairs::new())
            .await?;
        unwrap_key(body, "volume")
    }

    /// Create a volume
    pub async fn create(&self, request: &CreateVolumeRequest) -> Result<VolumeCreated> {
        let body = self
            .transport
            .post("volumes", &serde_json::to_value(request)?)
            .await?;
        Ok(serde_json::from_value(body)?)
    }

    /// Delete a volume
    pub async fn delete(&self, id: u64) -> Result<()> {
        self.transport.delete(&format!("volumes/{id}")).await?;
        Ok(())
    }
}
