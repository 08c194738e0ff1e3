//! Common types used throughout the Stratus Cloud client
//!
//! This module contains the filter parameter model shared by all list
//! endpoints and its query-string encoding.

use serde::{Deserialize, Serialize};

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// Flat `key=value` pairs as sent on the wire
pub type QueryPairs = Vec<(String, String)>;

// ============================================================================
// Filter Values
// ============================================================================

/// A single filter value: a scalar or a list of scalars.
///
/// Scalars encode as one `key=value` pair; lists encode as one repeated
/// `key=value` pair per element, in element order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Str(String),
    Int(i64),
    Bool(bool),
    List(Vec<String>),
}

impl FilterValue {
    /// Append this value's wire pairs for `key` onto `pairs`
    pub(crate) fn append_pairs(&self, key: &str, pairs: &mut QueryPairs) {
        match self {
            FilterValue::Str(s) => pairs.push((key.to_string(), s.clone())),
            FilterValue::Int(i) => pairs.push((key.to_string(), i.to_string())),
            FilterValue::Bool(b) => pairs.push((key.to_string(), b.to_string())),
            FilterValue::List(items) => {
                for item in items {
                    pairs.push((key.to_string(), item.clone()));
                }
            }
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for FilterValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Vec<String>> for FilterValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

impl From<Vec<&str>> for FilterValue {
    fn from(value: Vec<&str>) -> Self {
        Self::List(value.into_iter().map(str::to_string).collect())
    }
}

// ============================================================================
// Filter Parameters
// ============================================================================

/// Caller-supplied filters for a list endpoint.
///
/// Insertion order is preserved so requests are reproducible. The pagination
/// engine copies these before injecting its own `page` parameter, so a set
/// of filters can be reused across runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterParams {
    entries: Vec<(String, FilterValue)>,
}

impl FilterParams {
    /// Create an empty filter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a filter, replacing any existing value for the same key
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FilterValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Builder-style insert
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Look up a filter value by key
    pub fn get(&self, key: &str) -> Option<&FilterValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Number of filter keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no filters are set
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Encode into flat `key=value` pairs in insertion order
    pub fn to_query_pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        for (key, value) in &self.entries {
            value.append_pairs(key, &mut pairs);
        }
        pairs
    }
}

impl<K: Into<String>, V: Into<FilterValue>> FromIterator<(K, V)> for FilterParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}
