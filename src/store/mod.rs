//! Opaque document-store seam and its retrying wrapper
//!
//! The cloud backend is an external collaborator: it can fail with any error
//! kind at any call. `DocumentStore` expresses the operations the data layer
//! needs from it; [`Retrying`] routes every one of them through the retry
//! executor so callers see a single fallible call regardless of how many
//! silent retries occurred.

pub mod handle;

pub use handle::StoreHandle;

use std::fmt::Display;
use std::future::Future;

use serde_json::Value;

use crate::retry::{RetryExecutor, RetryPolicy};

/// Operations the data layer requires from a document store
///
/// Implementations are expected to be thin wrappers over a vendor SDK or an
/// in-process fake; they perform a single call per method and surface
/// whatever error the backend produced.
pub trait DocumentStore: Send + Sync {
    /// Backend failure kind; unconstrained beyond being displayable
    type Error: Display + Send;

    /// Create or overwrite the document at `collection/id`
    fn put(
        &self,
        collection: &str,
        id: &str,
        document: &Value,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Fetch the document at `collection/id`, if present
    fn get(
        &self,
        collection: &str,
        id: &str,
    ) -> impl Future<Output = Result<Option<Value>, Self::Error>> + Send;

    /// Remove the document at `collection/id`; removing a missing document
    /// is not an error
    fn delete(
        &self,
        collection: &str,
        id: &str,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;
}

/// Document store wrapper that retries every operation
///
/// Wraps each call in the retry executor under the configured policy, logging
/// under `"<label>.<operation>"`. The wrapper does not coordinate across
/// concurrent calls to the same document; last write wins, exactly as with
/// the unwrapped store.
pub struct Retrying<S> {
    store: S,
    policy: RetryPolicy,
}

impl<S: DocumentStore> Retrying<S> {
    /// Wrap `store`, retrying every operation under `policy`
    pub fn new(store: S, policy: RetryPolicy) -> Self {
        Self { store, policy }
    }

    /// The wrapped store
    pub fn inner(&self) -> &S {
        &self.store
    }

    /// Unwrap, discarding the retry policy
    pub fn into_inner(self) -> S {
        self.store
    }

    fn executor(&self, op: &str) -> RetryExecutor {
        let label = format!("{}.{}", self.policy.label, op);
        RetryExecutor::new(self.policy.clone().with_label(label))
    }
}

impl<S: DocumentStore> DocumentStore for Retrying<S> {
    type Error = S::Error;

    async fn put(&self, collection: &str, id: &str, document: &Value) -> Result<(), S::Error> {
        self.executor("put")
            .execute(move |_attempt| self.store.put(collection, id, document))
            .await
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Value>, S::Error> {
        self.executor("get")
            .execute(move |_attempt| self.store.get(collection, id))
            .await
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), S::Error> {
        self.executor("delete")
            .execute(move |_attempt| self.store.delete(collection, id))
            .await
    }
}
