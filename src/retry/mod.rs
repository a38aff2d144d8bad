//! Retry logic with bounded exponential backoff
//!
//! Provides the retry executor used by every cloud-facing operation in the
//! data layer, its policy configuration, process-wide statistics, and
//! convenience helpers for common policies.

pub mod executor;
pub mod global;
pub mod helpers;
pub mod policy;

// Re-export main types for convenient access
pub use executor::RetryExecutor;
pub use global::{GLOBAL_RETRY_STATS, GlobalRetryStats, RetryTotals};
pub use helpers::{
    execute_with_aggressive_retry, execute_with_conservative_retry, execute_with_default_retry,
    execute_without_retry, with_retry,
};
pub use policy::{PolicyError, RetryPolicy};
