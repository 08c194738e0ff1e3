//! Page response and pagination metadata types
//!
//! Collection endpoints wrap their items in a response envelope whose item
//! field is named after the resource ("servers", "zones", ...), next to a
//! `meta.pagination` block describing the page chain.

use crate::error::Result;
use crate::types::JsonValue;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Pagination metadata as sent by the API under `meta.pagination`.
///
/// `next_page` is `None` exactly when `page == last_page`; otherwise it is
/// `page + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    /// Current page number, 1-indexed
    pub page: u32,
    /// Page size
    pub per_page: u32,
    /// Previous page number, if any
    pub previous_page: Option<u32>,
    /// Next page number; `None` signals the last page
    pub next_page: Option<u32>,
    /// Total page count
    pub last_page: u32,
    /// Total item count across all pages
    pub total_entries: u64,
}

impl PaginationMeta {
    /// True when another page follows this one
    pub fn has_next(&self) -> bool {
        self.next_page.is_some()
    }
}

/// One raw page of a collection endpoint.
///
/// Holds the undecoded response body so the caller can pick the item list
/// out by its resource-specific field name.
#[derive(Debug, Clone)]
pub struct PageResponse {
    body: JsonValue,
}

impl PageResponse {
    /// Wrap a decoded response body
    pub fn new(body: JsonValue) -> Self {
        Self { body }
    }

    /// Decode the item list stored under `items_key`.
    ///
    /// An absent or null field counts as an empty page, not an error; the
    /// pagination metadata still decides whether more pages follow.
    pub fn items<T: DeserializeOwned>(&self, items_key: &str) -> Result<Vec<T>> {
        match self.body.get(items_key) {
            None | Some(JsonValue::Null) => Ok(Vec::new()),
            Some(value) => Ok(serde_json::from_value(value.clone())?),
        }
    }

    /// Pagination metadata from `meta.pagination`, if the envelope carries it
    pub fn pagination(&self) -> Option<PaginationMeta> {
        let meta = self.body.get("meta")?.get("pagination")?;
        serde_json::from_value(meta.clone()).ok()
    }

    /// The raw response body
    pub fn body(&self) -> &JsonValue {
        &self.body
    }
}
