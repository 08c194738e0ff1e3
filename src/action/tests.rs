//! Tests for the action poller

use super::*;
use crate::error::{Error, Result};
use async_trait::async_trait;
use pretty_assertions::assert_eq;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;
use tokio::time::Instant;

// ============================================================================
// Stub fetcher
// ============================================================================

enum Step {
    Record(Action),
    Fail(u16),
}

/// Replays scripted records; once the script runs dry it keeps answering
/// with a `running` record, which is what a stuck action looks like.
struct StubFetcher {
    script: Mutex<VecDeque<Step>>,
    calls: AtomicUsize,
}

impl StubFetcher {
    fn new(script: Vec<Step>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            calls: AtomicUsize::new(0),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ActionFetch for StubFetcher {
    async fn fetch_action(&self, action_id: u64) -> Result<Action> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.script.lock().unwrap().pop_front() {
            Some(Step::Record(action)) => Ok(action),
            Some(Step::Fail(status)) => Err(Error::api_status(status, "stub failure")),
            None => Ok(action_with_status(action_id, ActionStatus::Running)),
        }
    }
}

fn action_with_status(id: u64, status: ActionStatus) -> Action {
    Action {
        id,
        command: "create_server".to_string(),
        status,
        progress: if status == ActionStatus::Success { 100 } else { 50 },
        started: None,
        finished: None,
        error: None,
        resources: Vec::new(),
    }
}

// ============================================================================
// Poll loop
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_returns_success_record_after_running_phase() {
    let fetcher = StubFetcher::new(vec![
        Step::Record(action_with_status(1, ActionStatus::Running)),
        Step::Record(action_with_status(1, ActionStatus::Running)),
        Step::Record(action_with_status(1, ActionStatus::Success)),
    ]);
    let opts = PollOpts::new().interval(Duration::from_millis(500));

    let started = Instant::now();
    let action = poll(&fetcher, 1, opts).await.unwrap();

    assert_eq!(action.status, ActionStatus::Success);
    assert_eq!(fetcher.call_count(), 3);
    // Two running responses mean two full interval waits.
    assert!(started.elapsed() >= Duration::from_millis(1000));
}

#[tokio::test]
async fn test_immediate_success_needs_one_fetch() {
    let fetcher = StubFetcher::new(vec![Step::Record(action_with_status(
        2,
        ActionStatus::Success,
    ))]);

    let action = poll(&fetcher, 2, PollOpts::default()).await.unwrap();

    assert_eq!(action.id, 2);
    assert_eq!(fetcher.call_count(), 1);
}

#[tokio::test]
async fn test_failed_action_carries_code_and_message() {
    let mut failed = action_with_status(3, ActionStatus::Error);
    failed.error = Some(ActionError {
        code: "server_limit_exceeded".to_string(),
        message: "cannot create more servers".to_string(),
    });
    let fetcher = StubFetcher::new(vec![Step::Record(failed.clone())]);

    let err = poll(&fetcher, 3, PollOpts::default()).await.unwrap_err();

    let msg = err.to_string();
    assert!(msg.contains("server_limit_exceeded"));
    assert!(msg.contains("cannot create more servers"));
    match err {
        Error::ActionFailed { action, .. } => assert_eq!(*action, failed),
        other => panic!("expected ActionFailed, got {other}"),
    }
}

#[tokio::test]
async fn test_failed_action_without_detail_still_fails() {
    let fetcher = StubFetcher::new(vec![Step::Record(action_with_status(
        4,
        ActionStatus::Error,
    ))]);

    let err = poll(&fetcher, 4, PollOpts::default()).await.unwrap_err();
    assert!(matches!(err, Error::ActionFailed { .. }));
}

#[tokio::test(start_paused = true)]
async fn test_times_out_when_never_terminal() {
    // Empty script: the stub answers running forever.
    let fetcher = StubFetcher::new(Vec::new());
    let opts = PollOpts::new()
        .interval(Duration::from_millis(500))
        .timeout(Duration::from_secs(10));

    let started = Instant::now();
    let err = poll(&fetcher, 5, opts).await.unwrap_err();

    assert!(matches!(
        err,
        Error::ActionTimeout {
            action_id: 5,
            timeout_ms: 10_000
        }
    ));
    // The timeout fired only after the deadline actually passed.
    assert!(started.elapsed() >= Duration::from_secs(10));
    assert!(fetcher.call_count() >= 20);
}

#[tokio::test]
async fn test_fetch_error_propagates_untouched() {
    let fetcher = StubFetcher::new(vec![Step::Fail(503)]);

    let err = poll(&fetcher, 6, PollOpts::default()).await.unwrap_err();

    assert!(matches!(err, Error::ApiStatus { status: 503, .. }));
    assert_eq!(fetcher.call_count(), 1);
}

#[test]
fn test_poll_opts_defaults() {
    let opts = PollOpts::default();
    assert_eq!(opts.interval, Duration::from_millis(500));
    assert_eq!(opts.timeout, Duration::from_secs(300));
}
