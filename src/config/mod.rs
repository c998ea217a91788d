//! Configuration model for the scheduler's ceiling and timeout.

pub mod scheduler;

pub use scheduler::{SchedulerConfig, DEFAULT_MAX_CONCURRENT, DEFAULT_TASK_TIMEOUT_MS};
