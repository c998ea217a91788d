//! Abstraction for spawning task units onto a runtime.

use std::future::Future;

use tokio::task::JoinHandle;

/// Spawns the per-task units of a batch.
///
/// The handle returned for each unit is how the scheduler correlates an
/// outcome back to its submission index, and how it notices a unit that
/// panicked or was cancelled.
pub trait Spawn: Clone + Send + Sync + 'static {
    /// Spawn a future and return a handle to its output.
    fn spawn<F>(&self, fut: F) -> JoinHandle<F::Output>
    where
        F: Future + Send + 'static,
        F::Output: Send + 'static;
}
