//! Typed resource clients
//!
//! One thin client per API entity. List operations go through the
//! pagination engine; everything else is a pass-through request with the
//! resource envelope unwrapped.

mod actions;
mod networks;
mod records;
mod servers;
mod volumes;
mod zones;

pub use actions::ActionsClient;
pub use networks::{CreateNetworkRequest, Network, NetworksClient};
pub use records::{CreateRecordRequest, Record, RecordType, RecordsClient};
pub use servers::{CreateServerRequest, Server, ServerCreated, ServerStatus, ServersClient};
pub use volumes::{CreateVolumeRequest, Volume, VolumeCreated, VolumeStatus, VolumesClient};
pub use zones::{CreateZoneRequest, Zone, ZonesClient};

use crate::error::{Error, Result};
use crate::types::JsonValue;
use serde::de::DeserializeOwned;

/// Decode the resource stored under `key` in a response envelope
pub(crate) fn unwrap_key<T: DeserializeOwned>(body: JsonValue, key: &str) -> Result<T> {
    let value = body
        .get(key)
        .cloned()
        .ok_or_else(|| Error::missing_field(key))?;
    Ok(serde_json::from_value(value)?)
}
