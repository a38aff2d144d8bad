//! Convenience functions for common retry scenarios

use std::fmt::Display;
use std::future::Future;

use super::{RetryExecutor, RetryPolicy};

/// Create a retry executor for the given policy
#[inline]
pub fn with_retry(policy: RetryPolicy) -> RetryExecutor {
    RetryExecutor::new(policy)
}

/// Execute `operation` with the default retry policy
///
/// Three attempts with exponential backoff; suitable for most cloud
/// document operations.
///
/// # Errors
///
/// Returns the error produced by the final attempt.
pub async fn execute_with_default_retry<F, Fut, T, E>(operation: F) -> Result<T, E>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    RetryExecutor::new(RetryPolicy::default())
        .execute(operation)
        .await
}

/// Execute `operation` with the aggressive retry policy
///
/// Five attempts with faster backoff, for critical operations that must
/// succeed and can tolerate retry overhead.
///
/// # Errors
///
/// Returns the error produced by the final attempt.
pub async fn execute_with_aggressive_retry<F, Fut, T, E>(operation: F) -> Result<T, E>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    RetryExecutor::new(RetryPolicy::aggressive())
        .execute(operation)
        .await
}

/// Execute `operation` with the conservative retry policy
///
/// Two attempts with longer delays, for non-critical operations that should
/// minimize resource consumption.
///
/// # Errors
///
/// Returns the error produced by the final attempt.
pub async fn execute_with_conservative_retry<F, Fut, T, E>(operation: F) -> Result<T, E>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    RetryExecutor::new(RetryPolicy::conservative())
        .execute(operation)
        .await
}

/// Execute `operation` exactly once, without retries or delays
///
/// # Errors
///
/// Returns the error produced by the single attempt.
pub async fn execute_without_retry<F, Fut, T, E>(operation: F) -> Result<T, E>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    RetryExecutor::new(RetryPolicy::no_retry())
        .execute(operation)
        .await
}
