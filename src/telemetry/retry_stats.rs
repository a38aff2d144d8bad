//! Statistics for a single retry sequence

use std::fmt::Display;
use std::time::{Duration, Instant};

/// Statistics for one call to the retry executor
///
/// Scoped to a single sequence: created when the call starts, updated on
/// every attempt, completed when the call returns. Observational only.
#[derive(Debug, Clone)]
pub struct RetryStats {
    /// Attempts invoked so far
    pub attempts: u32,
    /// Cumulative time spent waiting between attempts
    pub total_delay: Duration,
    /// Descriptions of errors from retried attempts
    pub errors: Vec<String>,
    /// When the sequence started
    pub started: Instant,
    /// When the sequence completed, if it has
    pub finished: Option<Instant>,
}

impl Default for RetryStats {
    fn default() -> Self {
        Self {
            attempts: 0,
            total_delay: Duration::ZERO,
            errors: Vec::new(),
            started: Instant::now(),
            finished: None,
        }
    }
}

impl RetryStats {
    /// Record one invocation of the operation
    #[inline]
    pub fn record_attempt(&mut self) {
        self.attempts += 1;
    }

    /// Record the description of a retried failure
    #[inline]
    pub fn record_error(&mut self, error: &impl Display) {
        self.errors.push(error.to_string());
    }

    /// Record a completed inter-attempt delay
    #[inline]
    pub fn record_delay(&mut self, delay: Duration) {
        self.total_delay += delay;
    }

    /// Mark the sequence as completed
    #[inline]
    pub fn complete(&mut self) {
        self.finished = Some(Instant::now());
    }

    /// Wall-clock time from start to completion, or to now while active
    #[inline]
    #[must_use]
    pub fn total_elapsed(&self) -> Duration {
        match self.finished {
            Some(end) => end.duration_since(self.started),
            None => self.started.elapsed(),
        }
    }

    /// Description of the most recent retried failure
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.errors.last().map(String::as_str)
    }

    /// Whether any attempt had to be retried
    #[inline]
    #[must_use]
    pub fn was_retried(&self) -> bool {
        !self.errors.is_empty()
    }
}
