//! Runtime adapters and caller-facing report models.

pub mod api;
pub mod tokio_spawner;

pub use api::{BatchReport, FailureKind, TaskStatusResponse};
pub use tokio_spawner::TokioSpawner;
