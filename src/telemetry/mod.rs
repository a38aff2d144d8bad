//! Telemetry for retry sequences
//!
//! Per-sequence statistics recorded by the executor and surfaced in its
//! completion log lines.

pub mod retry_stats;

pub use retry_stats::RetryStats;
