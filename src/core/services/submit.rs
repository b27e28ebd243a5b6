//! Acknowledged submission with retry
//!
//! Submitting a reordered board is an explicit command: the caller gets the
//! refreshed record set back, and lock conflicts are retried with
//! exponential backoff instead of being dropped.

use std::thread::sleep;
use std::time::Duration;

use log::{info, warn};

use super::reconcile::{Reconciled, reconcile};
use crate::core::error::BoardError;
use crate::core::models::ClientChange;
use crate::core::ports::ClientStore;

/// Retry behaviour for transient store failures
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetryPolicy {
    /// Total attempts, including the first
    pub max_attempts: u32,
    /// Delay before the first retry
    pub initial_delay: Duration,
    /// Multiplier applied to the delay after each retry
    pub backoff_multiplier: f64,
    /// Upper bound for any single delay
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 4,
            initial_delay: Duration::from_millis(50),
            backoff_multiplier: 2.0,
            max_delay: Duration::from_secs(2),
        }
    }
}

impl RetryPolicy {
    /// Policy that never retries
    #[must_use]
    pub const fn no_retry() -> Self {
        Self {
            max_attempts: 1,
            initial_delay: Duration::ZERO,
            backoff_multiplier: 1.0,
            max_delay: Duration::ZERO,
        }
    }

    /// Delay to wait after the given failed attempt (1-based)
    #[must_use]
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let exponent = i32::try_from(attempt.saturating_sub(1)).unwrap_or(i32::MAX);
        let scaled = self
            .initial_delay
            .mul_f64(self.backoff_multiplier.max(1.0).powi(exponent).min(1e6));
        scaled.min(self.max_delay)
    }
}

/// Submit a full record set, retrying transient failures
///
/// Non-transient errors (validation, missing schema, I/O) are returned
/// after the first attempt.
pub fn submit_with_retry(
    store: &dyn ClientStore,
    changes: &[ClientChange],
    policy: &RetryPolicy,
) -> Result<Reconciled, BoardError> {
    let mut attempt = 0;
    loop {
        attempt += 1;
        match reconcile(store, changes) {
            Ok(reconciled) => {
                if attempt > 1 {
                    info!("event=submit module=submit status=ok attempts={attempt}");
                }
                return Ok(reconciled);
            },
            Err(err) if err.is_transient() && attempt < policy.max_attempts => {
                let delay = policy.delay_for(attempt);
                warn!(
                    "event=submit module=submit status=retry attempt={attempt} delay_ms={} error={err}",
                    delay.as_millis()
                );
                sleep(delay);
            },
            Err(err) => {
                warn!("event=submit module=submit status=error attempts={attempt} error={err}");
                return Err(err);
            },
        }
    }
}
