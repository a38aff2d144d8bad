//! Process-wide retry statistics
//!
//! Atomic counters tracking retry behavior across all operations in the
//! process. Updated by the executor on every call; observational only.

use std::sync::atomic::{AtomicU64, Ordering};

/// Process-wide retry counters
pub struct GlobalRetryStats {
    operations: AtomicU64,
    retries: AtomicU64,
    successes: AtomicU64,
    failures: AtomicU64,
}

/// Consistent point-in-time view of the global counters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryTotals {
    /// Executor calls started
    pub operations: u64,
    /// Failed attempts that were followed by another attempt
    pub retries: u64,
    /// Calls that returned a value
    pub successes: u64,
    /// Calls whose final attempt failed
    pub failures: u64,
}

impl GlobalRetryStats {
    /// Create zeroed counters; const to allow static initialization
    pub const fn new() -> Self {
        Self {
            operations: AtomicU64::new(0),
            retries: AtomicU64::new(0),
            successes: AtomicU64::new(0),
            failures: AtomicU64::new(0),
        }
    }

    /// Record an executor call starting
    #[inline]
    pub fn record_operation(&self) {
        self.operations.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a failed attempt that will be retried
    #[inline]
    pub fn record_retry(&self) {
        self.retries.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a call returning a value
    #[inline]
    pub fn record_success(&self) {
        self.successes.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a call whose final attempt failed
    #[inline]
    pub fn record_failure(&self) {
        self.failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Read all counters
    #[inline]
    pub fn snapshot(&self) -> RetryTotals {
        RetryTotals {
            operations: self.operations.load(Ordering::Relaxed),
            retries: self.retries.load(Ordering::Relaxed),
            successes: self.successes.load(Ordering::Relaxed),
            failures: self.failures.load(Ordering::Relaxed),
        }
    }

    /// Reset all counters to zero, losing historical data
    pub fn reset(&self) {
        self.operations.store(0, Ordering::Relaxed);
        self.retries.store(0, Ordering::Relaxed);
        self.successes.store(0, Ordering::Relaxed);
        self.failures.store(0, Ordering::Relaxed);
    }
}

impl Default for GlobalRetryStats {
    fn default() -> Self {
        Self::new()
    }
}

impl RetryTotals {
    /// Percentage of calls that returned a value; zero when empty
    #[must_use]
    pub fn success_rate(&self) -> f64 {
        if self.operations > 0 {
            (self.successes as f64 / self.operations as f64) * 100.0
        } else {
            0.0
        }
    }

    /// Average number of retries per executor call; zero when empty
    #[must_use]
    pub fn avg_retries_per_operation(&self) -> f64 {
        if self.operations > 0 {
            self.retries as f64 / self.operations as f64
        } else {
            0.0
        }
    }
}

/// Counters shared by every executor in the process
pub static GLOBAL_RETRY_STATS: GlobalRetryStats = GlobalRetryStats::new();
