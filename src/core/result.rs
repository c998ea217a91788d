//! Task lifecycle status and the immutable per-task outcome record.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::FailureReason;
use super::task::TaskId;

/// Status of a task in the scheduler lifecycle.
///
/// Transitions are strictly forward: `Pending -> Running -> Completed | Failed`.
/// A task that never gets admitted (limiter fault) goes straight from
/// `Pending` to `Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Submitted, waiting for an admission permit.
    Pending,
    /// Admitted, operation in flight.
    Running,
    /// Operation returned a value before the timeout.
    Completed,
    /// Operation errored, panicked, timed out, or could not be scheduled.
    Failed,
}

impl TaskStatus {
    /// Whether no further transitions can occur.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }
}

#[derive(Debug)]
enum Outcome<T> {
    Completed(T),
    Failed(FailureReason),
}

/// Outcome of exactly one submitted task.
///
/// Exactly one of [`value`](Self::value) / [`failure`](Self::failure) is
/// present, selected by [`status`](Self::status).
#[derive(Debug)]
pub struct TaskResult<T> {
    task_id: TaskId,
    outcome: Outcome<T>,
    elapsed: Duration,
}

impl<T> TaskResult<T> {
    /// Build a completed result.
    pub fn completed(task_id: impl Into<TaskId>, value: T, elapsed: Duration) -> Self {
        Self {
            task_id: task_id.into(),
            outcome: Outcome::Completed(value),
            elapsed,
        }
    }

    /// Build a failed result.
    pub fn failed(task_id: impl Into<TaskId>, reason: FailureReason, elapsed: Duration) -> Self {
        Self {
            task_id: task_id.into(),
            outcome: Outcome::Failed(reason),
            elapsed,
        }
    }

    /// Caller-chosen identifier copied from the task spec.
    #[must_use]
    pub fn task_id(&self) -> &str {
        &self.task_id
    }

    /// Terminal status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        match self.outcome {
            Outcome::Completed(_) => TaskStatus::Completed,
            Outcome::Failed(_) => TaskStatus::Failed,
        }
    }

    /// Returned value, present iff the task completed.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match &self.outcome {
            Outcome::Completed(value) => Some(value),
            Outcome::Failed(_) => None,
        }
    }

    /// Failure reason, present iff the task failed.
    #[must_use]
    pub const fn failure(&self) -> Option<&FailureReason> {
        match &self.outcome {
            Outcome::Completed(_) => None,
            Outcome::Failed(reason) => Some(reason),
        }
    }

    /// Wall-clock time from the admission attempt to the terminal state.
    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Shorthand for `status() == TaskStatus::Completed`.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        matches!(self.outcome, Outcome::Completed(_))
    }

    /// Shorthand for `status() == TaskStatus::Failed`.
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self.outcome, Outcome::Failed(_))
    }

    /// Consume the result and return the value or the failure reason.
    ///
    /// # Errors
    ///
    /// Returns the [`FailureReason`] if the task failed.
    pub fn into_value(self) -> Result<T, FailureReason> {
        match self.outcome {
            Outcome::Completed(value) => Ok(value),
            Outcome::Failed(reason) => Err(reason),
        }
    }
}
