//! Server resource client

use super::unwrap_key;
use crate::action::Action;
use crate::error::Result;
use crate::paginate;
use crate::transport::Transport;
use crate::types::{FilterParams, QueryPairs};
use chrono::{DateTime, Utc};
use futures::Stream;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

const ITEMS_KEY: &str = "servers";

/// Server lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServerStatus {
    Initializing,
    Starting,
    Running,
    Stopping,
    Off,
    Deleting,
    Rebuilding,
    Migrating,
    Unknown,
}

/// A compute server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Server {
    pub id: u64,
    pub name: String,
    pub status: ServerStatus,
    pub server_type: String,
    pub datacenter: String,
    #[serde(default)]
    pub public_ipv4: Option<String>,
    pub created: DateTime<Utc>,
    #[serde(default)]
    pub labels: HashMap<String, String>,
}

/// Payload for creating a server
#[derive(Debug, Clone, Serialize)]
pub struct CreateServerRequest {
    pub name: String,
    pub server_type: String,
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datacenter: Option<String>,
}

/// Response of a server creation: the new record plus the provisioning
/// action to poll.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerCreated {
    pub server: Server,
    pub action: Action,
}

/// Operations on servers
#[derive(Debug)]
pub struct ServersClient<'a> {
    transport: &'a Transport,
}

impl<'a> ServersClient<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Lazily stream all servers matching `filters`
    pub fn list(&self, filters: &FilterParams) -> impl Stream<Item = Result<Server>> + 'a {
        paginate::paginate(self.transport, "servers", ITEMS_KEY, filters)
    }

    /// Fetch every matching server eagerly
    pub async fn all(&self, filters: &FilterParams) -> Result<Vec<Server>> {
        paginate::fetch_all(self.transport, "servers", ITEMS_KEY, filters).await
    }

    /// Fetch one server by id
    pub async fn get(&self, id: u64) -> Result<Server> {
        let body = self
            .transport
            .get(&format!("servers/{id}"), &QueryPairs::new())
            .await?;
        unwrap_key(body, "server")
    }

    /// Create a server
    pub async fn create(&self, request: &CreateServerRequest) -> Result<ServerCreated> {
        let body = self
            .transport
            .post("servers", &serde_json::to_value(request)?)
            .await?;
        Ok(serde_json::from_value(body)?)
    }

    /// Delete a server; returns the deletion action
    pub async fn delete(&self, id: u64) -> Result<Action> {
        let body = self.transport.delete(&format!("servers/{id}")).await?;
        unwrap_key(body, "action")
    }
}
