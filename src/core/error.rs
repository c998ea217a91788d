//! Error types for scheduler construction and per-task failures.

use std::time::Duration;

use thiserror::Error;

/// Errors produced when building or configuring a scheduler.
///
/// These are programmer or deployment errors. Runtime task failures never
/// surface as `SchedulerError`; they are carried as [`FailureReason`] on a
/// failed [`TaskResult`](crate::core::TaskResult).
#[derive(Debug, Error)]
pub enum SchedulerError {
    /// Construction parameters are out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    /// No tokio runtime was available to bind the scheduler to.
    #[error("no tokio runtime available")]
    NoRuntime,
    /// Configuration could not be parsed.
    #[error("config error: {0}")]
    Config(String),
}

/// Why a task ended in the `Failed` state.
#[derive(Debug, Error)]
pub enum FailureReason {
    /// The operation did not finish within the per-task timeout.
    #[error("timed out after {}ms", .after.as_millis())]
    Timeout {
        /// The timeout that was exceeded.
        after: Duration,
    },
    /// The operation returned an error or panicked.
    #[error("operation failed: {0:#}")]
    OperationError(anyhow::Error),
    /// The scheduling machinery itself failed for this task.
    #[error("orchestration fault: {0}")]
    OrchestrationFault(String),
}

impl FailureReason {
    /// Returns `true` for [`FailureReason::Timeout`].
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }

    /// Returns `true` for [`FailureReason::OperationError`].
    #[must_use]
    pub const fn is_operation_error(&self) -> bool {
        matches!(self, Self::OperationError(_))
    }

    /// Returns `true` for [`FailureReason::OrchestrationFault`].
    #[must_use]
    pub const fn is_orchestration_fault(&self) -> bool {
        matches!(self, Self::OrchestrationFault(_))
    }

    /// The operation's own error, if this failure came from the operation.
    #[must_use]
    pub const fn cause(&self) -> Option<&anyhow::Error> {
        match self {
            Self::OperationError(err) => Some(err),
            _ => None,
        }
    }
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
