//! Core scheduling abstractions: tasks, results, and the scheduler engine.

pub mod audit;
pub mod error;
pub mod result;
pub mod scheduler;
pub mod spawn;
pub mod stats;
pub mod task;

pub use audit::{build_audit_event, AuditEvent, AuditSink, InMemoryAuditSink, TracingAuditSink};
pub use error::{AppResult, FailureReason, SchedulerError};
pub use result::{TaskResult, TaskStatus};
pub use scheduler::Scheduler;
pub use spawn::Spawn;
pub use stats::SchedulerStats;
pub use task::{TaskId, TaskOperation, TaskSpec};
