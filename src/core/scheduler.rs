//! Bounded-concurrency batch scheduler.
//!
//! A [`Scheduler`] runs batches of opaque async operations with at most
//! `max_concurrent` of them in flight, a per-task timeout that starts at
//! admission (queue time is never charged against it), and per-task failure
//! isolation: every submitted task yields exactly one [`TaskResult`], in
//! submission order, whatever happens to its siblings.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::time::Duration;
//! use bounded_task_scheduler::core::{Scheduler, TaskSpec};
//!
//! let scheduler = Scheduler::new(3, Duration::from_secs(5))?;
//! let specs = (1..=4).map(|i| {
//!     TaskSpec::new(
//!         format!("task_{i}"),
//!         |ms: u64| async move {
//!             tokio::time::sleep(Duration::from_millis(ms)).await;
//!             anyhow::Ok(format!("slept {ms}ms"))
//!         },
//!         100 * i,
//!     )
//! });
//! for result in scheduler.schedule_tasks(specs).await {
//!     println!("{}: {:?}", result.task_id(), result.status());
//! }
//! ```

use std::any::Any;
use std::collections::HashSet;
use std::panic::AssertUnwindSafe;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::{Duration, Instant};

use futures::future::join_all;
use futures::FutureExt;
use parking_lot::Mutex;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};
use tokio::task::JoinError;
use tracing::{debug, error, info, warn};

use super::audit::{build_audit_event, AuditSink};
use super::error::{FailureReason, SchedulerError};
use super::result::{TaskResult, TaskStatus};
use super::spawn::Spawn;
use super::stats::{SchedulerCounters, SchedulerStats};
use super::task::{TaskId, TaskSpec};
use crate::config::SchedulerConfig;
use crate::runtime::TokioSpawner;

type SharedAuditSink = Arc<Mutex<dyn AuditSink>>;

/// Admission permit plus in-flight accounting, released together on drop.
///
/// `in_flight` is decremented before the permit goes back to the limiter, so
/// the counter can never exceed the ceiling.
struct InFlightGuard {
    counters: Arc<SchedulerCounters>,
    _permit: OwnedSemaphorePermit,
}

impl InFlightGuard {
    fn new(permit: OwnedSemaphorePermit, counters: Arc<SchedulerCounters>) -> Self {
        counters.enter();
        Self {
            counters,
            _permit: permit,
        }
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.counters.exit();
    }
}

/// Everything a single task unit needs, cloneable into spawned futures.
#[derive(Clone)]
struct TaskRunner {
    limiter: Arc<Semaphore>,
    task_timeout: Duration,
    counters: Arc<SchedulerCounters>,
    audit: Option<SharedAuditSink>,
}

impl TaskRunner {
    /// Count the task as handed over and record `pending`.
    ///
    /// Runs on the caller's side before any unit is spawned, so even a unit
    /// that never gets polled has been counted.
    fn submit(&self, task_id: &str) -> Instant {
        self.counters.submitted_tasks.fetch_add(1, Ordering::Relaxed);
        self.audit(task_id, TaskStatus::Pending, None);
        Instant::now()
    }

    async fn execute<A, T>(&self, spec: TaskSpec<A, T>, start: Instant) -> TaskResult<T>
    where
        A: Send + 'static,
        T: Send + 'static,
    {
        let TaskSpec {
            id,
            operation,
            arguments,
        } = spec;

        let permit = match Arc::clone(&self.limiter).acquire_owned().await {
            Ok(permit) => permit,
            Err(err) => {
                let reason = FailureReason::OrchestrationFault(format!(
                    "admission limiter unavailable: {err}"
                ));
                return self.finish(id, Err(reason), start);
            }
        };
        let _guard = InFlightGuard::new(permit, Arc::clone(&self.counters));
        self.audit(&id, TaskStatus::Running, None);
        info!(task_id = %id, "Starting task");

        // The timeout clock starts here, after admission.
        let invocation =
            match std::panic::catch_unwind(AssertUnwindSafe(|| operation.call(arguments))) {
                Ok(invocation) => invocation,
                Err(panic) => return self.finish(id, Err(panicked(&*panic)), start),
            };
        let outcome = match tokio::time::timeout(
            self.task_timeout,
            AssertUnwindSafe(invocation).catch_unwind(),
        )
        .await
        {
            Ok(Ok(Ok(value))) => Ok(value),
            Ok(Ok(Err(err))) => Err(FailureReason::OperationError(err)),
            Ok(Err(panic)) => Err(panicked(&*panic)),
            Err(_) => Err(FailureReason::Timeout {
                after: self.task_timeout,
            }),
        };

        self.finish(id, outcome, start)
    }

    fn finish<T>(
        &self,
        id: TaskId,
        outcome: Result<T, FailureReason>,
        start: Instant,
    ) -> TaskResult<T> {
        let elapsed = start.elapsed();
        match outcome {
            Ok(value) => {
                self.counters.completed_tasks.fetch_add(1, Ordering::Relaxed);
                info!(task_id = %id, elapsed = ?elapsed, "Task completed successfully");
                self.audit(&id, TaskStatus::Completed, None);
                TaskResult::completed(id, value, elapsed)
            }
            Err(reason) => self.fail(id, reason, elapsed),
        }
    }

    fn fail<T>(&self, id: TaskId, reason: FailureReason, elapsed: Duration) -> TaskResult<T> {
        self.counters.failed_tasks.fetch_add(1, Ordering::Relaxed);
        if reason.is_timeout() {
            self.counters.timed_out_tasks.fetch_add(1, Ordering::Relaxed);
            error!(task_id = %id, timeout = ?self.task_timeout, "Task timed out");
        } else {
            error!(task_id = %id, error = %reason, "Task failed");
        }
        self.audit(&id, TaskStatus::Failed, Some(reason.to_string()));
        TaskResult::failed(id, reason, elapsed)
    }

    fn audit(&self, task_id: &str, status: TaskStatus, detail: Option<String>) {
        if let Some(sink) = &self.audit {
            sink.lock().record(build_audit_event(task_id, status, detail));
        }
    }
}

fn panicked(payload: &(dyn Any + Send)) -> FailureReason {
    let message = payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "non-string panic payload".to_string());
    FailureReason::OperationError(anyhow::anyhow!("operation panicked: {message}"))
}

fn warn_duplicate_ids<A, T>(specs: &[TaskSpec<A, T>]) {
    let mut seen = HashSet::with_capacity(specs.len());
    for spec in specs {
        if !seen.insert(spec.id.as_str()) {
            warn!(task_id = %spec.id, "Duplicate task id in batch; ids are not deduplicated");
        }
    }
}

/// Bounded-concurrency scheduler with per-task timeout and failure isolation.
///
/// Cloning is cheap and clones share the same admission limiter, so every
/// caller holding a clone competes for the same `max_concurrent` permits.
pub struct Scheduler<S = TokioSpawner> {
    max_concurrent: usize,
    runner: TaskRunner,
    spawner: S,
}

impl<S: Clone> Clone for Scheduler<S> {
    fn clone(&self) -> Self {
        Self {
            max_concurrent: self.max_concurrent,
            runner: self.runner.clone(),
            spawner: self.spawner.clone(),
        }
    }
}

impl<S> std::fmt::Debug for Scheduler<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scheduler")
            .field("max_concurrent", &self.max_concurrent)
            .field("task_timeout", &self.runner.task_timeout)
            .field("available_permits", &self.runner.limiter.available_permits())
            .finish_non_exhaustive()
    }
}

impl Scheduler<TokioSpawner> {
    /// Create a scheduler bound to the current tokio runtime.
    ///
    /// # Errors
    ///
    /// - `SchedulerError::InvalidConfig` if `max_concurrent` is 0 or
    ///   `task_timeout` is zero. Values are never clamped.
    /// - `SchedulerError::NoRuntime` when called outside a tokio runtime.
    pub fn new(max_concurrent: usize, task_timeout: Duration) -> Result<Self, SchedulerError> {
        Self::with_spawner(max_concurrent, task_timeout, TokioSpawner::current()?)
    }

    /// Create a scheduler from validated configuration on the current runtime.
    ///
    /// # Errors
    ///
    /// Same as [`Scheduler::new`].
    pub fn from_config(cfg: &SchedulerConfig) -> Result<Self, SchedulerError> {
        Self::new(cfg.max_concurrent, cfg.task_timeout())
    }
}

impl<S: Spawn> Scheduler<S> {
    /// Create a scheduler that spawns its task units through `spawner`.
    ///
    /// # Errors
    ///
    /// Returns `SchedulerError::InvalidConfig` if `max_concurrent` is 0, above
    /// the limiter's maximum, or `task_timeout` is zero.
    pub fn with_spawner(
        max_concurrent: usize,
        task_timeout: Duration,
        spawner: S,
    ) -> Result<Self, SchedulerError> {
        if max_concurrent == 0 {
            return Err(SchedulerError::InvalidConfig(
                "max_concurrent must be at least 1".into(),
            ));
        }
        if max_concurrent > Semaphore::MAX_PERMITS {
            return Err(SchedulerError::InvalidConfig(format!(
                "max_concurrent must be at most {}",
                Semaphore::MAX_PERMITS
            )));
        }
        if task_timeout.is_zero() {
            return Err(SchedulerError::InvalidConfig(
                "task_timeout must be greater than 0".into(),
            ));
        }

        info!(
            max_concurrent = max_concurrent,
            task_timeout = ?task_timeout,
            "Scheduler initialized"
        );

        Ok(Self {
            max_concurrent,
            runner: TaskRunner {
                limiter: Arc::new(Semaphore::new(max_concurrent)),
                task_timeout,
                counters: Arc::new(SchedulerCounters::default()),
                audit: None,
            },
            spawner,
        })
    }

    /// Attach an audit sink that receives every task status transition.
    ///
    /// Keep a clone of the `Arc` to read the sink back.
    #[must_use]
    pub fn with_audit<A: AuditSink + 'static>(mut self, sink: Arc<Mutex<A>>) -> Self {
        let sink: SharedAuditSink = sink;
        self.runner.audit = Some(sink);
        self
    }

    /// Admission ceiling fixed at construction.
    #[must_use]
    pub const fn max_concurrent(&self) -> usize {
        self.max_concurrent
    }

    /// Per-task timeout fixed at construction.
    #[must_use]
    pub const fn task_timeout(&self) -> Duration {
        self.runner.task_timeout
    }

    /// Permits not currently held by a running operation.
    #[must_use]
    pub fn available_permits(&self) -> usize {
        self.runner.limiter.available_permits()
    }

    /// Get current scheduler statistics.
    #[must_use]
    pub fn stats(&self) -> SchedulerStats {
        self.runner
            .counters
            .snapshot(self.max_concurrent, self.available_permits())
    }

    /// Run one task under admission control and the per-task timeout.
    ///
    /// Waits for a permit without any deadline, then gives the operation up
    /// to `task_timeout` of execution time. Never panics or errors: every
    /// outcome, including a panic inside the operation, is returned as a
    /// [`TaskResult`]. The permit is released on every exit path.
    pub async fn run_one<A, T>(&self, spec: TaskSpec<A, T>) -> TaskResult<T>
    where
        A: Send + 'static,
        T: Send + 'static,
    {
        let start = self.runner.submit(&spec.id);
        self.runner.execute(spec, start).await
    }

    /// Run a batch concurrently and return one result per spec, in order.
    ///
    /// Each spec becomes an independently spawned unit; the admission limiter
    /// alone bounds how many run at once. Nothing fails fast: a unit that
    /// panics outside the guarded region or gets cancelled is reported as
    /// `FailureReason::OrchestrationFault` under its spec's id.
    ///
    /// Task ids are not required to be unique. Duplicates are logged and each
    /// still gets its own result at its own position.
    pub async fn schedule_tasks<A, T, I>(&self, specs: I) -> Vec<TaskResult<T>>
    where
        A: Send + 'static,
        T: Send + 'static,
        I: IntoIterator<Item = TaskSpec<A, T>>,
    {
        let specs: Vec<TaskSpec<A, T>> = specs.into_iter().collect();
        if specs.is_empty() {
            return Vec::new();
        }
        warn_duplicate_ids(&specs);

        let batch_start = Instant::now();
        debug!(batch_size = specs.len(), "Scheduling batch");

        let (ids, handles): (Vec<TaskId>, Vec<_>) = specs
            .into_iter()
            .map(|spec| {
                let id = spec.id.clone();
                let runner = self.runner.clone();
                let start = runner.submit(&id);
                let handle = self
                    .spawner
                    .spawn(async move { runner.execute(spec, start).await });
                (id, handle)
            })
            .unzip();

        let joined = join_all(handles).await;
        let results = self.gather(ids, joined, batch_start);

        debug!(
            batch_size = results.len(),
            failed = results.iter().filter(|r| r.is_failed()).count(),
            elapsed = ?batch_start.elapsed(),
            "Batch finished"
        );
        results
    }

    /// Pair each joined unit with its submission index, turning join faults
    /// into failed results.
    fn gather<T>(
        &self,
        ids: Vec<TaskId>,
        joined: Vec<Result<TaskResult<T>, JoinError>>,
        batch_start: Instant,
    ) -> Vec<TaskResult<T>> {
        ids.into_iter()
            .zip(joined)
            .map(|(id, outcome)| match outcome {
                Ok(result) => result,
                Err(err) => {
                    let kind = if err.is_panic() { "panicked" } else { "was cancelled" };
                    let reason =
                        FailureReason::OrchestrationFault(format!("task unit {kind}: {err}"));
                    self.runner.fail(id, reason, batch_start.elapsed())
                }
            })
            .collect()
    }
}
