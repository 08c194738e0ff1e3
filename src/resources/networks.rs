//! Network resource client

use super::unwrap_key;
use crate::error::Result;
use crate::paginate;
use crate::transport::Transport;
use crate::types::{FilterParams, QueryPairs};
use chrono::{DateTime, Utc};
use futures::Stream;
use serde::{Deserialize, Serialize};

const ITEMS_KEY: &str = "networks";

/// A private network
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Network {
    pub id: u64,
    pub name: String,
    /// CIDR of the whole network
    pub ip_range: String,
    /// Servers attached to this network
    #[serde(default)]
    pub servers: Vec<u64>,
    pub created: DateTime<Utc>,
}

/// Payload for creating a network
#[derive(Debug, Clone, Serialize)]
pub struct CreateNetworkRequest {
    pub name: String,
    pub ip_range: String,
}

/// Operations on networks
#[derive(Debug)]
pub struct NetworksClient<'a> {
    transport: &'a Transport,
}

impl<'a> NetworksClient<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Lazily stream all networks matching `filters`
    pub fn list(&self, filters: &FilterParams) -> impl Stream<Item = Result<Network>> + 'a {
        paginate::paginate(self.transport, "networks", ITEMS_KEY, filters)
    }

    /// Fetch every matching network eagerly
    pub async fn all(&self, filters: &FilterParams) -> Result<Vec<Network>> {
        paginate::fetch_all(self.transport, "networks", ITEMS_KEY, filters).await
    }

    /// Fetch one network by id
    pub async fn get(&self, id: u64) -> Result<Network> {
        let body = self
            .transport
            .get(&format!("networks/{id}"), &QueryPairs::new())
            .await?;
        unwrap_key(body, "network")
    }

    /// Create a network
    pub async fn create(&self, request: &CreateNetworkRequest) -> Result<Network> {
        let body = self
            .transport
            .post("networks", &serde_json::to_value(request)?)
            .await?;
        unwrap_key(body, "network")
    }

    /// Delete a network
    pub async fn delete(&self, id: u64) -> Result<()> {
        self.transport.delete(&format!("networks/{id}")).await?;
        Ok(())
    }
}
