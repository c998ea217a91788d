//! Tests for builder modules

use std::time::Duration;

use bounded_task_scheduler::builders::{build_scheduler, build_scheduler_from_json};
use bounded_task_scheduler::config::SchedulerConfig;
use bounded_task_scheduler::core::SchedulerError;
use bounded_task_scheduler::runtime::TokioSpawner;

#[tokio::test]
async fn test_build_scheduler_from_config() {
    let config = SchedulerConfig::new()
        .with_max_concurrent(4)
        .with_task_timeout(Duration::from_millis(750));

    let scheduler = build_scheduler(&config, TokioSpawner::current().unwrap()).unwrap();
    assert_eq!(scheduler.max_concurrent(), 4);
    assert_eq!(scheduler.task_timeout(), Duration::from_millis(750));
    assert_eq!(scheduler.available_permits(), 4);
}

#[tokio::test]
async fn test_build_scheduler_rejects_invalid_config() {
    let config = SchedulerConfig::new().with_max_concurrent(0);
    let err = build_scheduler(&config, TokioSpawner::current().unwrap()).unwrap_err();
    assert!(matches!(err, SchedulerError::InvalidConfig(_)));
}

#[tokio::test]
async fn test_build_scheduler_from_json() {
    let scheduler =
        build_scheduler_from_json(r#"{ "max_concurrent": 2, "task_timeout_ms": 100 }"#).unwrap();
    assert_eq!(scheduler.max_concurrent(), 2);
    assert_eq!(scheduler.task_timeout(), Duration::from_millis(100));
}

#[tokio::test]
async fn test_build_scheduler_from_bad_json() {
    let err = build_scheduler_from_json(r#"{ "task_timeout_ms": 0 }"#).unwrap_err();
    assert!(matches!(err, SchedulerError::Config(_)));
}
