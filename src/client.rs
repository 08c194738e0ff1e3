//! Client facades for the compute/network and DNS APIs

use crate::action::{self, Action, PollOpts};
use crate::error::Result;
use crate::resources::{
    ActionsClient, NetworksClient, RecordsClient, ServersClient, VolumesClient, ZonesClient,
};
use crate::transport::{Transport, TransportConfig};

/// Production endpoint of the compute/network control-plane API
pub const CLOUD_API_BASE: &str = "https://api.stratus.cloud/v1";

/// Production endpoint of the DNS API
pub const DNS_API_BASE: &str = "https://dns.stratus.cloud/api/v1";

/// Client for the compute/network control-plane API
#[derive(Debug)]
pub struct Client {
    transport: Transport,
}

impl Client {
    /// Create a client against the production endpoint
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::with_endpoint(CLOUD_API_BASE, token)
    }

    /// Create a client against a custom endpoint
    pub fn with_endpoint(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        Self::with_config(TransportConfig::new(base_url, token))
    }

    /// Create a client from a full transport config
    pub fn with_config(config: TransportConfig) -> Result<Self> {
        Ok(Self {
            transport: Transport::new(config)?,
        })
    }

    /// The underlying transport
    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    /// Server operations
    pub fn servers(&self) -> ServersClient<'_> {
        ServersClient::new(&self.transport)
    }

    /// Volume operations
    pub fn volumes(&self) -> VolumesClient<'_> {
        VolumesClient::new(&self.transport)
    }

    /// Network operations
    pub fn networks(&self) -> NetworksClient<'_> {
        NetworksClient::new(&self.transport)
    }

    /// Action operations
    pub fn actions(&self) -> ActionsClient<'_> {
        ActionsClient::new(&self.transport)
    }

    /// Wait for `action_id` to reach a terminal state
    pub async fn poll_action(&self, action_id: u64, opts: PollOpts) -> Result<Action> {
        action::poll(&self.transport, action_id, opts).await
    }
}

/// Client for the DNS API
#[derive(Debug)]
pub struct DnsClient {
    transport: Transport,
}

impl DnsClient {
    /// Create a client against the production endpoint
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::with_endpoint(DNS_API_BASE, token)
    }

    /// Create a client against a custom endpoint
    pub fn with_endpoint(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        Self::with_config(TransportConfig::new(base_url, token))
    }

    /// Create a client from a full transport config
    pub fn with_config(config: TransportConfig) -> Result<Self> {
        Ok(Self {
            transport: Transport::new(config)?,
        })
    }

    /// The underlying transport
    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    /// Zone operations
    pub fn zones(&self) -> ZonesClient<'_> {
        ZonesClient::new(&self.transport)
    }

    /// Record operations
    pub fn records(&self) -> RecordsClient<'_> {
        RecordsClient::new(&self.transport)
    }
}
