//! # Bounded Task Scheduler
//!
//! A bounded-concurrency scheduler for batches of independent async operations,
//! such as parallel tool calls or model requests issued by an agent.
//!
//! Given a batch of tasks, the scheduler runs them concurrently up to a fixed
//! ceiling, enforces a per-task timeout, isolates failures so one failing or
//! hung task never aborts the batch, and returns exactly one result per task
//! in submission order.
//!
//! ## Core Guarantees
//!
//! - **Completeness**: N tasks in, N results out, in the order submitted
//! - **Isolation**: errors, panics, and timeouts become data on the task's own result
//! - **Bounded concurrency**: never more than `max_concurrent` operations in flight
//! - **Fair timeouts**: the timeout measures execution time, not time spent queued
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::time::Duration;
//! use bounded_task_scheduler::core::{Scheduler, TaskSpec, TaskStatus};
//!
//! async fn sample_task(name: String) -> anyhow::Result<String> {
//!     tokio::time::sleep(Duration::from_secs(1)).await;
//!     Ok(format!("Result from {name}"))
//! }
//!
//! let scheduler = Scheduler::new(3, Duration::from_secs(5))?;
//! let results = scheduler
//!     .schedule_tasks(vec![
//!         TaskSpec::new("task_1", sample_task, "Task1".to_string()),
//!         TaskSpec::new("task_2", sample_task, "Task2".to_string()),
//!     ])
//!     .await;
//!
//! for result in &results {
//!     match result.status() {
//!         TaskStatus::Completed => println!("{}: {:?}", result.task_id(), result.value()),
//!         _ => println!("{}: {}", result.task_id(), result.failure().unwrap()),
//!     }
//! }
//! ```
//!
//! For complete examples, see `tests/scheduler_test.rs`.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Core scheduling abstractions: tasks, results, and the scheduler engine.
pub mod core;
/// Configuration model for the scheduler.
pub mod config;
/// Builders to construct schedulers from configuration.
pub mod builders;
/// Runtime adapters and report models.
pub mod runtime;
/// Shared utilities.
pub mod util;

pub use crate::core::{FailureReason, Scheduler, SchedulerError, TaskResult, TaskSpec, TaskStatus};
