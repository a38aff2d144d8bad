//! # syncguard
//!
//! Resilient execution layer for cloud document stores. Wraps fallible
//! asynchronous operations in bounded exponential-backoff retry and provides
//! the seams a data layer needs around that: an opaque document-store trait,
//! a retrying wrapper over it, an explicitly constructed storage handle, and
//! a cancellable bridge from callback-based real-time listeners to streams.
//!
//! ## Features
//!
//! - **Bounded exponential backoff** with a deterministic, jitter-free delay
//!   schedule and a configurable ceiling
//! - **Failure-kind agnostic**: the final attempt's error propagates to the
//!   caller unchanged, with no wrapping error type
//! - **Cooperative suspension** between attempts; dropping an in-flight call
//!   during a delay aborts the wait and never re-invokes the operation
//! - **Structured diagnostics** via `tracing`, plus process-wide and
//!   per-sequence retry statistics
//! - **Snapshot streams**: real-time listener callbacks bridged into a lazy,
//!   cancellable `Stream` that unsubscribes on drop
//!
//! ## Usage
//!
//! ```no_run
//! use syncguard::{RetryExecutor, RetryPolicy};
//!
//! # async fn demo() -> Result<(), std::io::Error> {
//! let executor = RetryExecutor::new(RetryPolicy::default().with_label("journal.save"));
//! let value = executor
//!     .execute(|_attempt| async { Ok::<_, std::io::Error>("saved") })
//!     .await?;
//! assert_eq!(value, "saved");
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod retry;
pub mod store;
pub mod telemetry;
pub mod watch;

pub use retry::{RetryExecutor, RetryPolicy};
pub use store::{DocumentStore, Retrying, StoreHandle};
pub use telemetry::RetryStats;
pub use watch::{SnapshotSink, Snapshots};
