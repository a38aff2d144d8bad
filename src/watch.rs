//! Snapshot streams over callback-based real-time listeners
//!
//! Cloud document stores deliver real-time updates by invoking a registered
//! callback. [`Snapshots`] bridges that callback into a lazy, infinite
//! `Stream` of snapshots that unsubscribes when dropped. A new subscription
//! can always be established by binding again.

use std::pin::Pin;
use std::task::{Context, Poll};

use futures::Stream;
use tokio::sync::mpsc;

/// Publishing side of a snapshot subscription
///
/// Handed to the listener registration closure; the listener calls
/// [`publish`](SnapshotSink::publish) for every snapshot it receives.
pub struct SnapshotSink<T> {
    tx: mpsc::UnboundedSender<T>,
}

// Manual impl: cloning the sink never requires T: Clone
impl<T> Clone for SnapshotSink<T> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<T> SnapshotSink<T> {
    /// Deliver one snapshot to the stream
    ///
    /// Returns `false` once the consuming [`Snapshots`] has been dropped,
    /// letting the listener stop doing work for an abandoned subscription.
    pub fn publish(&self, snapshot: T) -> bool {
        self.tx.send(snapshot).is_ok()
    }
}

/// Cancellable stream of snapshots from a real-time listener
///
/// The stream is infinite as long as a sink is alive; it yields `None` only
/// after every [`SnapshotSink`] clone has been dropped. Dropping the stream
/// runs the unsubscribe action returned by the registration closure.
pub struct Snapshots<T> {
    rx: mpsc::UnboundedReceiver<T>,
    unsubscribe: Option<Box<dyn FnOnce() + Send>>,
}

impl<T> Snapshots<T> {
    /// Register a listener and return the stream of its snapshots
    ///
    /// `register` receives the sink to publish into and returns the action
    /// that tears the listener down; that action runs exactly once, when the
    /// stream is dropped.
    pub fn bind<R, U>(register: R) -> Self
    where
        R: FnOnce(SnapshotSink<T>) -> U,
        U: FnOnce() + Send + 'static,
    {
        let (tx, rx) = mpsc::unbounded_channel();
        let unsubscribe = register(SnapshotSink { tx });
        Self {
            rx,
            unsubscribe: Some(Box::new(unsubscribe)),
        }
    }
}

impl<T> Stream for Snapshots<T> {
    type Item = T;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<T>> {
        self.get_mut().rx.poll_recv(cx)
    }
}

impl<T> Drop for Snapshots<T> {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}
