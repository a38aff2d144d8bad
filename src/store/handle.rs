//! Explicitly constructed storage handle
//!
//! The storage handle is built once by the composition root at process
//! startup and cloned into every component that needs persistence. There is
//! no lazy initialization and no process-wide singleton; the handle's
//! lifetime is tied to process start and stop by its owner.

use std::ops::Deref;
use std::sync::Arc;

/// Shared handle to a constructed store
///
/// Cheap to clone; all clones refer to the same store instance.
pub struct StoreHandle<S> {
    inner: Arc<S>,
}

impl<S> StoreHandle<S> {
    /// Take ownership of a fully constructed store
    pub fn new(store: S) -> Self {
        Self {
            inner: Arc::new(store),
        }
    }

    /// Borrow the underlying store
    pub fn store(&self) -> &S {
        &self.inner
    }
}

// Manual impl: cloning the handle never requires S: Clone
impl<S> Clone for StoreHandle<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S> Deref for StoreHandle<S> {
    type Target = S;

    fn deref(&self) -> &S {
        &self.inner
    }
}
