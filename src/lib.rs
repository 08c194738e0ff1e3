//! # Stratus Cloud Client
//!
//! Typed async client for the Stratus Cloud compute/network control-plane
//! API and the separate Stratus DNS API.
//!
//! ## Features
//!
//! - **Typed resources**: servers, volumes, networks, zones, records
//! - **Lazy pagination**: list endpoints stream items page by page
//! - **Rate-limit handling**: transparent bounded retry with backoff
//! - **Action polling**: wait for long-running operations to settle
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use futures::TryStreamExt;
//! use stratus_client::{Client, FilterParams, PollOpts, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = Client::new("my-api-token")?;
//!
//!     // Stream servers lazily, one page in flight at a time
//!     let filters = FilterParams::new().with("status", "running");
//!     let mut servers = std::pin::pin!(client.servers().list(&filters));
//!     while let Some(server) = servers.try_next().await? {
//!         println!("{} ({})", server.name, server.id);
//!     }
//!
//!     // Kick off a long-running operation and wait for it
//!     let action = client.servers().delete(42).await?;
//!     client.poll_action(action.id, PollOpts::default()).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                  Client / DnsClient                       │
//! │  servers() volumes() networks() actions() zones() ...    │
//! └───────────────────────────┬───────────────────────────────┘
//!                             │
//! ┌──────────────┬────────────┴───────────┬──────────────────┐
//! │   Paginate   │        Action          │    Transport     │
//! ├──────────────┼────────────────────────┼──────────────────┤
//! │ Lazy stream  │ Fixed-interval poll    │ GET/POST/...     │
//! │ Retry 429    │ Timeout                │ Bearer auth      │
//! │ Backoff      │ Terminal status        │ Error mapping    │
//! └──────────────┴────────────────────────┴──────────────────┘
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::cast_possible_truncation)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the client
pub mod error;

/// Filter parameters and query encoding
pub mod types;

/// HTTP transport
pub mod transport;

/// Pagination engine
pub mod paginate;

/// Action poller
pub mod action;

/// Client facades
pub mod client;

/// Typed resource clients
pub mod resources;

// ============================================================================
// Re-exports
// ============================================================================

pub use action::{poll, Action, ActionError, ActionFetch, ActionStatus, PollOpts};
pub use client::{Client, DnsClient, CLOUD_API_BASE, DNS_API_BASE};
pub use error::{Error, Result};
pub use paginate::{
    backoff, fetch_all, paginate, PageFetch, PageResponse, PaginationMeta, MAX_RETRIES,
};
pub use types::{FilterParams, FilterValue};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
