//! Error types for the Stratus Cloud client
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use crate::action::Action;
use thiserror::Error;

/// The main error type for the Stratus Cloud client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // API Errors
    // ============================================================================
    /// Non-2xx response other than rate limiting. `code` and `message` come
    /// from the API error envelope when the body carries one, otherwise
    /// `code` is empty and `message` holds the raw body text.
    #[error("API error (HTTP {status}) {code}: {message}")]
    ApiStatus {
        status: u16,
        code: String,
        message: String,
    },

    /// The server asked us to slow down (HTTP 429). `retry_after_seconds`
    /// is 0 when the server sent no `Retry-After` hint.
    #[error("Rate limited, retry after {retry_after_seconds}s")]
    RateLimited { retry_after_seconds: u64 },

    #[error("Missing field '{field}' in API response")]
    MissingField { field: String },

    // ============================================================================
    // Action Errors
    // ============================================================================
    /// A polled action reached the terminal `error` status. Carries the full
    /// failed record so callers can inspect it.
    #[error("Action {} failed with {code}: {message}", .action.id)]
    ActionFailed {
        code: String,
        message: String,
        action: Box<Action>,
    },

    #[error("Action {action_id} still running after {timeout_ms}ms")]
    ActionTimeout { action_id: u64, timeout_ms: u64 },
}

impl Error {
    /// Create an API status error with an empty error code
    pub fn api_status(status: u16, message: impl Into<String>) -> Self {
        Self::ApiStatus {
            status,
            code: String::new(),
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Check if this error is transient: the pagination engine retries
    /// exactly these, everything else propagates on first sight.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::RateLimited { .. })
    }

    /// Server-suggested wait in seconds, if this is a rate-limit error
    pub fn retry_after(&self) -> Option<u64> {
        match self {
            Error::RateLimited {
                retry_after_seconds,
            } => Some(*retry_after_seconds),
            _ => None,
        }
    }
}

/// Result type alias for the Stratus Cloud client
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{Action, ActionError, ActionStatus};

    fn failed_action() -> Action {
        Action {
            id: 42,
            command: "create_server".to_string(),
            status: ActionStatus::Error,
            progress: 80,
            started: None,
            finished: None,
            error: Some(ActionError {
                code: "server_limit_exceeded".to_string(),
                message: "cannot create more servers".to_string(),
            }),
            resources: Vec::new(),
        }
    }

    #[test]
    fn test_error_display() {
        let err = Error::api_status(404, "server not found");
        assert_eq!(err.to_string(), "API error (HTTP 404) : server not found");

        let err = Error::RateLimited {
            retry_after_seconds: 5,
        };
        assert_eq!(err.to_string(), "Rate limited, retry after 5s");

        let err = Error::ActionFailed {
            code: "server_limit_exceeded".to_string(),
            message: "cannot create more servers".to_string(),
            action: Box::new(failed_action()),
        };
        let msg = err.to_string();
        assert!(msg.contains("server_limit_exceeded"));
        assert!(msg.contains("cannot create more servers"));
    }

    #[test]
    fn test_is_retryable() {
        assert!(Error::RateLimited {
            retry_after_seconds: 0
        }
        .is_retryable());

        assert!(!Error::api_status(500, "boom").is_retryable());
        assert!(!Error::api_status(404, "gone").is_retryable());
        assert!(!Error::missing_field("meta").is_retryable());
    }

    #[test]
    fn test_retry_after() {
        let err = Error::RateLimited {
            retry_after_seconds: 7,
        };
        assert_eq!(err.retry_after(), Some(7));
        assert_eq!(Error::api_status(500, "").retry_after(), None);
    }
}
