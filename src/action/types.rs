//! Action record types
//!
//! Long-running operations (server creation, volume attach, ...) are
//! tracked server-side as actions that start `running` and settle into
//! `success` or `error`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of an action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionStatus {
    /// Still in progress
    Running,
    /// Terminal: completed successfully
    Success,
    /// Terminal: failed, see [`Action::error`]
    Error,
}

impl ActionStatus {
    /// True for `success` and `error`, which never transition further
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Running)
    }
}

/// Error detail on a failed action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionError {
    pub code: String,
    pub message: String,
}

/// A resource touched by an action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResource {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: String,
}

/// A server-tracked asynchronous operation record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    pub id: u64,
    pub command: String,
    pub status: ActionStatus,
    /// Completion percentage, 0-100
    #[serde(default)]
    pub progress: u8,
    #[serde(default)]
    pub started: Option<DateTime<Utc>>,
    #[serde(default)]
    pub finished: Option<DateTime<Utc>>,
    /// Set when `status` is `error`
    #[serde(default)]
    pub error: Option<ActionError>,
    /// Resources this action applies to
    #[serde(default)]
    pub resources: Vec<ActionResource>,
}
