//! Retry executor for cloud document operations

use std::fmt::Display;
use std::future::Future;

use super::RetryPolicy;
use super::global::GLOBAL_RETRY_STATS;
use crate::telemetry::RetryStats;

/// Executes fallible async operations with bounded exponential-backoff retry
///
/// The executor is stateless between calls: each call owns its own attempt
/// counter and delay value, so independent calls run fully concurrently with
/// no shared state.
pub struct RetryExecutor {
    policy: RetryPolicy,
}

impl RetryExecutor {
    /// Create a new retry executor with the given policy
    pub fn new(policy: RetryPolicy) -> Self {
        Self { policy }
    }

    /// The policy driving this executor
    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Execute `operation` with retry, returning the first success or the
    /// final attempt's error
    ///
    /// The operation receives the zero-based attempt index and is invoked
    /// between 1 and `max_attempts` times. A policy with `max_attempts = 0`
    /// (rejected by [`RetryPolicy::validate`]) behaves as a single attempt. Failures on attempts before the
    /// last are caught, logged, and followed by a cooperative delay that
    /// grows by `backoff_factor` up to `max_delay`. The last attempt runs
    /// unconditionally; its outcome — success or failure — is the outcome of
    /// the whole call, and its error propagates unchanged with no wrapping
    /// error type.
    ///
    /// Every error kind is treated as transient: the executor performs no
    /// retryable-vs-permanent classification. Operations that can recognize
    /// permanent failures should fail fast internally rather than rely on
    /// the executor to stop early.
    ///
    /// Dropping the returned future during an inter-attempt delay aborts the
    /// wait immediately; the operation is never invoked again.
    ///
    /// # Errors
    ///
    /// Returns the error produced by the final attempt.
    pub async fn execute<F, Fut, T, E>(&self, mut operation: F) -> Result<T, E>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Display,
    {
        GLOBAL_RETRY_STATS.record_operation();
        let mut stats = RetryStats::default();
        let mut delay = self.policy.initial_delay();
        let last = self.policy.max_attempts.saturating_sub(1);

        for attempt in 0..last {
            stats.record_attempt();
            match operation(attempt).await {
                Ok(value) => {
                    stats.complete();
                    GLOBAL_RETRY_STATS.record_success();
                    tracing::debug!(
                        label = %self.policy.label,
                        attempts = attempt + 1,
                        elapsed_ms = stats.total_elapsed().as_millis() as u64,
                        "operation succeeded"
                    );
                    return Ok(value);
                }
                Err(err) => {
                    GLOBAL_RETRY_STATS.record_retry();
                    stats.record_error(&err);
                    tracing::warn!(
                        label = %self.policy.label,
                        attempt = attempt + 1,
                        delay_ms = delay.as_millis() as u64,
                        error = %err,
                        "attempt failed, retrying after delay"
                    );
                    tokio::time::sleep(delay).await;
                    stats.record_delay(delay);
                    delay = self.policy.next_delay(delay);
                }
            }
        }

        // Final attempt: never retried, never followed by a delay. Its
        // outcome is the outcome of the whole call.
        stats.record_attempt();
        let outcome = operation(last).await;
        stats.complete();
        match &outcome {
            Ok(_) => {
                GLOBAL_RETRY_STATS.record_success();
                tracing::debug!(
                    label = %self.policy.label,
                    attempts = stats.attempts,
                    elapsed_ms = stats.total_elapsed().as_millis() as u64,
                    "operation succeeded"
                );
            }
            Err(err) => {
                GLOBAL_RETRY_STATS.record_failure();
                tracing::warn!(
                    label = %self.policy.label,
                    attempts = stats.attempts,
                    waited_ms = stats.total_delay.as_millis() as u64,
                    error = %err,
                    "attempts exhausted"
                );
            }
        }
        outcome
    }
}
