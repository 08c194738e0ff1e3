//! Backoff calculation for rate-limited page fetches

use std::time::Duration;

/// Compute the wait before retry number `attempt` (1-indexed).
///
/// Honors the server's `Retry-After` hint when it is the larger value,
/// otherwise falls back to exponential growth (200ms, 400ms, 800ms, ...)
/// so retries still back off when the hint is absent or zero. No jitter,
/// no cap; the caller bounds total attempts.
pub fn backoff(suggested_delay_secs: u64, attempt: u32) -> Duration {
    let suggested_ms = suggested_delay_secs.saturating_mul(1000);
    let exponential_ms = 100u64.saturating_mul(2u64.saturating_pow(attempt));
    Duration::from_millis(suggested_ms.max(exponential_ms))
}
