//! Submitted units of work and the async operation abstraction.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;

/// Caller-chosen task identifier, used purely for correlation.
///
/// The scheduler does not enforce uniqueness within a batch; duplicate ids
/// are passed through untouched.
pub type TaskId = String;

/// An opaque asynchronous operation run by the scheduler.
///
/// The only contract is "eventually return a value or an error". What the
/// operation does (model call, database query, HTTP fetch) is invisible to
/// the scheduler.
///
/// Any `Fn(A) -> impl Future<Output = Result<T, E>>` closure implements this
/// trait as long as `E` converts into [`anyhow::Error`], so most callers never
/// implement it by hand.
///
/// # Example
///
/// ```rust,ignore
/// use async_trait::async_trait;
/// use bounded_task_scheduler::core::TaskOperation;
///
/// struct Fetch {
///     client: reqwest::Client,
/// }
///
/// #[async_trait]
/// impl TaskOperation<String, String> for Fetch {
///     async fn call(&self, url: String) -> anyhow::Result<String> {
///         Ok(self.client.get(url).send().await?.text().await?)
///     }
/// }
/// ```
///
/// # Cancellation
///
/// When the per-task timeout expires the future returned by `call` is
/// dropped. Work the operation handed off elsewhere (spawned tasks, blocking
/// threads) keeps running unless the operation itself stops it.
#[async_trait]
pub trait TaskOperation<A, T>: Send + Sync + 'static {
    /// Run the operation with its argument payload.
    async fn call(&self, args: A) -> anyhow::Result<T>;
}

#[async_trait]
impl<A, T, E, F, Fut> TaskOperation<A, T> for F
where
    A: Send + 'static,
    T: Send + 'static,
    E: Into<anyhow::Error> + Send + 'static,
    F: Fn(A) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<T, E>> + Send + 'static,
{
    async fn call(&self, args: A) -> anyhow::Result<T> {
        (self)(args).await.map_err(Into::into)
    }
}

/// One unit of submitted work: an id, the operation, and its arguments.
pub struct TaskSpec<A, T> {
    /// Correlation id copied onto the task's result.
    pub id: TaskId,
    /// Operation to invoke. Shared so one operation can back many specs.
    pub operation: Arc<dyn TaskOperation<A, T>>,
    /// Opaque payload moved into the operation.
    pub arguments: A,
}

impl<A, T> TaskSpec<A, T>
where
    A: Send + 'static,
    T: Send + 'static,
{
    /// Create a spec from any operation.
    pub fn new(id: impl Into<TaskId>, operation: impl TaskOperation<A, T>, arguments: A) -> Self {
        Self {
            id: id.into(),
            operation: Arc::new(operation),
            arguments,
        }
    }

    /// Create a spec that reuses an already shared operation.
    pub fn shared(
        id: impl Into<TaskId>,
        operation: Arc<dyn TaskOperation<A, T>>,
        arguments: A,
    ) -> Self {
        Self {
            id: id.into(),
            operation,
            arguments,
        }
    }
}

impl<A: fmt::Debug, T> fmt::Debug for TaskSpec<A, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskSpec")
            .field("id", &self.id)
            .field("arguments", &self.arguments)
            .finish_non_exhaustive()
    }
}
