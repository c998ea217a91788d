//! Builders to construct a scheduler from configuration.

use crate::config::SchedulerConfig;
use crate::core::{Scheduler, SchedulerError, Spawn};
use crate::runtime::TokioSpawner;

/// Build a scheduler from configuration using the provided spawner.
///
/// # Errors
///
/// Returns `SchedulerError::InvalidConfig` if `cfg` fails validation.
pub fn build_scheduler<S: Spawn>(
    cfg: &SchedulerConfig,
    spawner: S,
) -> Result<Scheduler<S>, SchedulerError> {
    cfg.validate()
        .map_err(|e| SchedulerError::InvalidConfig(format!("config invalid: {e}")))?;
    Scheduler::with_spawner(cfg.max_concurrent, cfg.task_timeout(), spawner)
}

/// Parse JSON configuration and build a scheduler on the current runtime.
///
/// # Errors
///
/// - `SchedulerError::Config` for malformed JSON or out-of-range values.
/// - `SchedulerError::NoRuntime` outside a tokio runtime.
pub fn build_scheduler_from_json(input: &str) -> Result<Scheduler, SchedulerError> {
    let cfg = SchedulerConfig::from_json_str(input).map_err(SchedulerError::Config)?;
    build_scheduler(&cfg, TokioSpawner::current()?)
}
