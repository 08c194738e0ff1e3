//! Action poller
//!
//! Suspends the caller until a long-running action settles.
//!
//! # Overview
//!
//! [`poll`] re-fetches one action record at a fixed interval until its
//! status leaves `running`, a terminal `error` status fails the poll with
//! the action's own error code and message, and a wall-clock timeout bounds
//! the wait. Unlike the pagination engine there is no retry here: any fetch
//! failure, rate limit included, is terminal for the poll.

mod types;

pub use types::{Action, ActionError, ActionResource, ActionStatus};

use crate::error::{Error, Result};
use async_trait::async_trait;
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

#[cfg(test)]
mod tests;

/// Default wait between status fetches
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Default overall poll timeout
pub const DEFAULT_POLL_TIMEOUT: Duration = Duration::from_secs(300);

/// Fetches one action record by id.
#[async_trait]
pub trait ActionFetch: Send + Sync {
    async fn fetch_action(&self, action_id: u64) -> Result<Action>;
}

/// Options for [`poll`]. The interval is fixed per call; it does not grow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollOpts {
    /// Wait between status fetches
    pub interval: Duration,
    /// Overall deadline measured from the start of the poll
    pub timeout: Duration,
}

impl Default for PollOpts {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
            timeout: DEFAULT_POLL_TIMEOUT,
        }
    }
}

impl PollOpts {
    /// Create options with the defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fetch interval
    #[must_use]
    pub fn interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Set the overall timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Poll `action_id` until it reaches a terminal state.
///
/// Returns the record on `success`. A terminal `error` status becomes
/// [`Error::ActionFailed`] carrying the full record; exceeding the timeout
/// while still `running` becomes [`Error::ActionTimeout`]. Fetch errors
/// propagate untouched.
pub async fn poll<F>(fetcher: &F, action_id: u64, opts: PollOpts) -> Result<Action>
where
    F: ActionFetch + ?Sized,
{
    let started = Instant::now();

    loop {
        let action = fetcher.fetch_action(action_id).await?;

        match action.status {
            ActionStatus::Success => {
                debug!(
                    "Action {} ({}) finished after {:?}",
                    action.id,
                    action.command,
                    started.elapsed()
                );
                return Ok(action);
            }
            ActionStatus::Error => {
                let (code, message) = match &action.error {
                    Some(err) => (err.code.clone(), err.message.clone()),
                    None => (String::new(), "unknown error".to_string()),
                };
                return Err(Error::ActionFailed {
                    code,
                    message,
                    action: Box::new(action),
                });
            }
            ActionStatus::Running => {
                if started.elapsed() > opts.timeout {
                    return Err(Error::ActionTimeout {
                        action_id,
                        timeout_ms: opts.timeout.as_millis() as u64,
                    });
                }
                tokio::time::sleep(opts.interval).await;
            }
        }
    }
}
