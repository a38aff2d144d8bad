//! Retry policy configuration with exponential backoff
//!
//! Provides retry policy configuration covering attempt bounds, the delay
//! schedule, and the diagnostic label attached to log lines.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Retry policy configuration - all durations in milliseconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryPolicy {
    /// Upper bound on invocation count (initial attempt included)
    pub max_attempts: u32,
    /// Delay in milliseconds before the second attempt
    pub initial_delay_ms: u64,
    /// Ceiling in milliseconds on any inter-attempt delay
    pub max_delay_ms: u64,
    /// Multiplicative growth rate of the delay after each failed attempt
    pub backoff_factor: f64,
    /// Diagnostic tag carried on log lines; no behavioral effect
    pub label: String,
}

/// Policy validation errors
#[derive(Debug, thiserror::Error)]
pub enum PolicyError {
    #[error("max_attempts must be at least 1")]
    ZeroAttempts,

    #[error("delays must be positive, got initial_delay_ms {initial_ms}ms, max_delay_ms {max_ms}ms")]
    ZeroDelay { initial_ms: u64, max_ms: u64 },

    #[error("initial_delay_ms ({initial_ms}ms) cannot exceed max_delay_ms ({max_ms}ms)")]
    InvertedDelays { initial_ms: u64, max_ms: u64 },

    #[error("backoff_factor must be a finite number greater than 1.0, got {0}")]
    Factor(f64),
}

impl Default for RetryPolicy {
    /// Create default retry policy with balanced configuration
    ///
    /// Three attempts, one second initial delay, doubling up to a ten second
    /// ceiling. Suitable for most cloud document operations.
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay_ms: 1000,
            max_delay_ms: 10000,
            backoff_factor: 2.0,
            label: "operation".to_string(),
        }
    }
}

impl RetryPolicy {
    /// Create aggressive retry policy for critical operations
    ///
    /// Faster retry cycles with more attempts for operations that must
    /// succeed and can tolerate increased retry overhead.
    #[must_use]
    pub fn aggressive() -> Self {
        Self {
            max_attempts: 5,
            initial_delay_ms: 100,
            max_delay_ms: 10000,
            backoff_factor: 1.5,
            ..Self::default()
        }
    }

    /// Create conservative retry policy for non-critical operations
    ///
    /// Longer delays and fewer attempts to minimize resource consumption
    /// for operations that can tolerate failure.
    #[must_use]
    pub fn conservative() -> Self {
        Self {
            max_attempts: 2,
            initial_delay_ms: 2000,
            max_delay_ms: 60000,
            backoff_factor: 3.0,
            ..Self::default()
        }
    }

    /// Create no-retry policy (single attempt only)
    ///
    /// The operation is invoked exactly once and its outcome returned
    /// directly; the delay fields are never consulted.
    #[must_use]
    pub fn no_retry() -> Self {
        Self {
            max_attempts: 1,
            ..Self::default()
        }
    }

    /// Replace the diagnostic label
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Delay before the second attempt
    #[inline]
    #[must_use]
    pub fn initial_delay(&self) -> Duration {
        Duration::from_millis(self.initial_delay_ms)
    }

    /// Ceiling on any inter-attempt delay
    #[inline]
    #[must_use]
    pub fn max_delay(&self) -> Duration {
        Duration::from_millis(self.max_delay_ms)
    }

    /// Advance the delay schedule one step
    ///
    /// Multiplies the current delay by `backoff_factor`, then clamps to
    /// `max_delay`. Clamping happens after multiplication, so a delay already
    /// at the ceiling stays there. The product is computed in f64
    /// milliseconds so that a large factor saturates at the ceiling rather
    /// than overflowing `Duration`.
    #[inline]
    #[must_use]
    pub fn next_delay(&self, current: Duration) -> Duration {
        let grown_ms = (current.as_millis() as f64) * self.backoff_factor;
        Duration::from_millis(grown_ms.min(self.max_delay_ms as f64) as u64)
    }

    /// Validate policy configuration for consistency
    ///
    /// # Errors
    ///
    /// Returns a `PolicyError` variant if:
    /// - `max_attempts` is zero
    /// - either delay is zero, or `initial_delay_ms` exceeds `max_delay_ms`
    /// - `backoff_factor` is not a finite number greater than 1.0
    pub fn validate(&self) -> Result<(), PolicyError> {
        if self.max_attempts == 0 {
            return Err(PolicyError::ZeroAttempts);
        }

        if self.initial_delay_ms == 0 || self.max_delay_ms == 0 {
            return Err(PolicyError::ZeroDelay {
                initial_ms: self.initial_delay_ms,
                max_ms: self.max_delay_ms,
            });
        }

        if self.initial_delay_ms > self.max_delay_ms {
            return Err(PolicyError::InvertedDelays {
                initial_ms: self.initial_delay_ms,
                max_ms: self.max_delay_ms,
            });
        }

        if !self.backoff_factor.is_finite() || self.backoff_factor <= 1.0 {
            return Err(PolicyError::Factor(self.backoff_factor));
        }

        Ok(())
    }
}
