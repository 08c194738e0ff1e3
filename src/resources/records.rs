//! DNS record resource client

use super::unwrap_key;
use crate::error::Result;
use crate::paginate;
use crate::transport::Transport;
use crate::types::{FilterParams, QueryPairs};
use futures::Stream;
use serde::{Deserialize, Serialize};

const ITEMS_KEY: &str = "records";

/// DNS record type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordType {
    A,
    Aaaa,
    Cname,
    Mx,
    Ns,
    Txt,
    Srv,
    Caa,
    #[serde(other)]
    Other,
}

/// A DNS record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub zone_id: String,
    #[serde(rename = "type")]
    pub record_type: RecordType,
    pub name: String,
    pub value: String,
    /// Record TTL in seconds; the zone default applies when absent
    #[serde(default)]
    pub ttl: Option<u64>,
}

/// Payload for creating a record
#[derive(Debug, Clone, Serialize)]
pub struct CreateRecordRequest {
    pub zone_id: String,
    #[serde(rename = "type")]
    pub record_type: RecordType,
    pub name: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u64>,
}

/// Operations on DNS records
#[derive(Debug)]
pub struct RecordsClient<'a> {
    transport: &'a Transport,
}

impl<'a> RecordsClient<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Lazily stream all records matching `filters`; filter by `zone_id`
    /// to scope to one zone
    pub fn list(&self, filters: &FilterParams) -> impl Stream<Item = Result<Record>> + 'a {
        paginate::paginate(self.transport, "records", ITEMS_KEY, filters)
    }

    /// Fetch every matching record eagerly
    pub async fn all(&self, filters: &FilterParams) -> Result<Vec<Record>> {
        paginate::fetch_all(self.transport, "records", ITEMS_KEY, filters).await
    }

    /// Fetch every record of one zone
    pub async fn all_in_zone(&self, zone_id: &str) -> Result<Vec<Record>> {
        self.all(&FilterParams::new().with("zone_id", zone_id)).await
    }

    /// Fetch one record by id
    pub async fn get(&self, id: &str) -> Result<Record> {
        let body = self
            .transport
            .get(&format!("records/{id}"), &QueryPairs::new())
            .await?;
        unwrap_key(body, "record")
    }

    /// Create a record
    pub async fn create(&self, request: &CreateRecordRequest) -> Result<Record> {
        let body = self
            .transport
            .post("records", &serde_json::to_value(request)?)
            .await?;
        unwrap_key(body, "record")
    }

    /// Delete a record
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.transport.delete(&format!("records/{id}")).await?;
        Ok(())
    }
}
