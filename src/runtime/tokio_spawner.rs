//! Tokio runtime spawner implementation.

use std::sync::Arc;

use crate::core::notify::Spawn;

/// Tokio-based spawner that runs notification delivery on a tokio runtime.
#[derive(Clone)]
pub struct TokioSpawner {
    handle: Arc<tokio::runtime::Handle>,
}

impl TokioSpawner {
    /// Create a spawner from a tokio runtime handle.
    #[must_use]
    pub fn new(handle: tokio::runtime::Handle) -> Self {
        Self {
            handle: Arc::new(handle),
        }
    }

    /// Create a spawner for the runtime the caller is already inside.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime, same as
    /// [`tokio::runtime::Handle::current`].
    #[must_use]
    pub fn current() -> Self {
        Self::new(tokio::runtime::Handle::current())
    }
}

impl Spawn for TokioSpawner {
    fn spawn<F>(&self, fut: F)
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        self.handle.spawn(fut);
    }
}
