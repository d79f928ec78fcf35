//! Bounded retry with backoff.
//!
//! Every lookup that can be throttled goes through [`retry_with_backoff`]:
//! the caller decides which errors are worth retrying and how long to wait
//! before the next attempt, the utility owns the attempt budget.

use crate::ports::outbound::Clock;
use chrono::{DateTime, Utc};
use std::future::Future;
use std::time::Duration;

/// Default attempt budget for throttled lookups
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Outcome of a retry loop that did not succeed
#[derive(Debug)]
pub enum RetryError<E> {
    /// The operation failed with an error that must not be retried
    Fatal(E),
    /// Every attempt failed with a recoverable error; `last` is the final one
    Exhausted { attempts: u32, last: E },
}

/// Runs `op` up to `max_attempts` times.
///
/// # Arguments
/// * `max_attempts` - Attempt budget (values below 1 are treated as 1)
/// * `clock` - Time source used for waiting between attempts
/// * `op` - The fallible operation; called once per attempt
/// * `is_recoverable` - Whether an error should be retried at all
/// * `wait_time` - How long to wait after a recoverable error, given the current time
///
/// # Returns
/// The first successful value, or a [`RetryError`] describing why the loop stopped.
/// No wait happens after the final attempt.
pub async fn retry_with_backoff<T, E, C, Op, Fut, P, W>(
    max_attempts: u32,
    clock: &C,
    mut op: Op,
    is_recoverable: P,
    wait_time: W,
) -> std::result::Result<T, RetryError<E>>
where
    C: Clock + ?Sized,
    E: std::fmt::Display,
    Op: FnMut() -> Fut,
    Fut: Future<Output = std::result::Result<T, E>>,
    P: Fn(&E) -> bool,
    W: Fn(&E, DateTime<Utc>) -> Duration,
{
    let max_attempts = max_attempts.max(1);
    let mut attempt = 0;

    loop {
        attempt += 1;
        let error = match op().await {
            Ok(value) => return Ok(value),
            Err(e) => e,
        };

        if !is_recoverable(&error) {
            return Err(RetryError::Fatal(error));
        }

        if attempt >= max_attempts {
            return Err(RetryError::Exhausted {
                attempts: attempt,
                last: error,
            });
        }

        let wait = wait_time(&error, clock.now());
        tracing::warn!(
            attempt,
            max_attempts,
            wait_secs = wait.as_secs_f64(),
            "{}; retrying",
            error
        );
        clock.sleep(wait).await;
    }
}

/// Time remaining until `deadline`, or zero if it already passed.
pub fn until(deadline: DateTime<Utc>, now: DateTime<Utc>) -> Duration {
    (deadline - now).to_std().unwrap_or(Duration::ZERO)
}
