//! Serializable views of batch outcomes for callers that report or persist them.

use serde::{Deserialize, Serialize};

use crate::core::{FailureReason, TaskResult, TaskStatus};

/// Failure category in a [`TaskStatusResponse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Per-task timeout expired.
    Timeout,
    /// The operation returned an error or panicked.
    OperationError,
    /// The scheduling machinery failed for this task.
    OrchestrationFault,
}

impl From<&FailureReason> for FailureKind {
    fn from(reason: &FailureReason) -> Self {
        match reason {
            FailureReason::Timeout { .. } => Self::Timeout,
            FailureReason::OperationError(_) => Self::OperationError,
            FailureReason::OrchestrationFault(_) => Self::OrchestrationFault,
        }
    }
}

/// Task status response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskStatusResponse {
    /// Task identifier.
    pub task_id: String,
    /// Terminal status.
    pub status: TaskStatus,
    /// Failure category, if failed.
    pub failure: Option<FailureKind>,
    /// Human-readable failure reason, if failed.
    pub reason: Option<String>,
    /// Elapsed wall-clock milliseconds.
    pub elapsed_ms: u64,
}

impl<T> From<&TaskResult<T>> for TaskStatusResponse {
    fn from(result: &TaskResult<T>) -> Self {
        let failure = result.failure();
        Self {
            task_id: result.task_id().to_string(),
            status: result.status(),
            failure: failure.map(FailureKind::from),
            reason: failure.map(ToString::to_string),
            elapsed_ms: u64::try_from(result.elapsed().as_millis()).unwrap_or(u64::MAX),
        }
    }
}

/// Summary of one `schedule_tasks` call, in submission order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    /// Number of tasks in the batch.
    pub total: usize,
    /// Tasks that completed.
    pub completed: usize,
    /// Tasks that failed for any reason.
    pub failed: usize,
    /// Subset of `failed` that timed out.
    pub timed_out: usize,
    /// Per-task entries, in submission order.
    pub tasks: Vec<TaskStatusResponse>,
}

impl BatchReport {
    /// Build a report from a batch of results.
    pub fn from_results<T>(results: &[TaskResult<T>]) -> Self {
        let tasks: Vec<TaskStatusResponse> = results.iter().map(TaskStatusResponse::from).collect();
        let completed = tasks
            .iter()
            .filter(|t| t.status == TaskStatus::Completed)
            .count();
        let timed_out = tasks
            .iter()
            .filter(|t| t.failure == Some(FailureKind::Timeout))
            .count();
        Self {
            total: tasks.len(),
            completed,
            failed: tasks.len() - completed,
            timed_out,
            tasks,
        }
    }

    /// Render the report as JSON.
    ///
    /// # Errors
    ///
    /// Returns the serializer error; not expected for this type.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
