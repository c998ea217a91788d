//! Tokio runtime spawner implementation.

use std::future::Future;
use std::sync::Arc;

use tokio::runtime::{Handle, Runtime};
use tokio::task::JoinHandle;

use crate::core::{SchedulerError, Spawn};

/// Tokio-based spawner bound to an explicit runtime handle.
#[derive(Clone)]
pub struct TokioSpawner {
    handle: Handle,
    /// Keeps a dedicated runtime alive when this spawner owns one.
    owned_runtime: Option<Arc<Runtime>>,
}

impl TokioSpawner {
    /// Create a spawner from a tokio runtime handle.
    #[must_use]
    pub const fn new(handle: Handle) -> Self {
        Self {
            handle,
            owned_runtime: None,
        }
    }

    /// Bind to the runtime the caller is currently running on.
    ///
    /// # Errors
    ///
    /// Returns `SchedulerError::NoRuntime` outside a tokio runtime.
    pub fn current() -> Result<Self, SchedulerError> {
        Handle::try_current()
            .map(Self::new)
            .map_err(|_| SchedulerError::NoRuntime)
    }

    /// Create a spawner that owns a new multi-threaded runtime.
    ///
    /// The runtime lives as long as the last clone of this spawner. Drop the
    /// last clone from synchronous code; tokio refuses to drop a runtime from
    /// inside an async context.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if the runtime cannot be built.
    pub fn multi_thread(worker_threads: usize) -> Result<Self, std::io::Error> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(worker_threads.max(1))
            .thread_name("task-scheduler")
            .enable_all()
            .build()?;
        Ok(Self {
            handle: runtime.handle().clone(),
            owned_runtime: Some(Arc::new(runtime)),
        })
    }

    /// Worker thread count used by callers that size a runtime to the host.
    #[must_use]
    pub fn default_worker_threads() -> usize {
        num_cpus::get().max(1)
    }

    /// The runtime handle units are spawned on.
    #[must_use]
    pub const fn handle(&self) -> &Handle {
        &self.handle
    }
}

impl std::fmt::Debug for TokioSpawner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokioSpawner")
            .field("owns_runtime", &self.owned_runtime.is_some())
            .finish()
    }
}

impl Spawn for TokioSpawner {
    fn spawn<F>(&self, fut: F) -> JoinHandle<F::Output>
    where
        F: Future + Send + 'static,
        F::Output: Send + 'static,
    {
        self.handle.spawn(fut)
    }
}
