//! Tests for configuration validation

use std::time::Duration;

use bounded_task_scheduler::config::{
    SchedulerConfig, DEFAULT_MAX_CONCURRENT, DEFAULT_TASK_TIMEOUT_MS,
};

#[test]
fn test_scheduler_config_defaults() {
    let config = SchedulerConfig::default();
    assert_eq!(config.max_concurrent, DEFAULT_MAX_CONCURRENT);
    assert_eq!(config.task_timeout_ms, DEFAULT_TASK_TIMEOUT_MS);
    assert_eq!(config.task_timeout(), Duration::from_secs(30));
    assert!(config.validate().is_ok());
}

#[test]
fn test_scheduler_config_invalid_max_concurrent() {
    let invalid = SchedulerConfig::new().with_max_concurrent(0);
    assert!(invalid.validate().is_err());
}

#[test]
fn test_scheduler_config_invalid_timeout() {
    let invalid = SchedulerConfig {
        max_concurrent: 4,
        task_timeout_ms: 0,
    };
    assert!(invalid.validate().is_err());
}

#[test]
fn test_scheduler_config_from_json() {
    let json = r#"{
        "max_concurrent": 3,
        "task_timeout_ms": 5000
    }"#;

    let config = SchedulerConfig::from_json_str(json).unwrap();
    assert_eq!(config.max_concurrent, 3);
    assert_eq!(config.task_timeout(), Duration::from_secs(5));
}

#[test]
fn test_scheduler_config_from_json_fills_defaults() {
    let config = SchedulerConfig::from_json_str(r#"{ "max_concurrent": 2 }"#).unwrap();
    assert_eq!(config.max_concurrent, 2);
    assert_eq!(config.task_timeout_ms, DEFAULT_TASK_TIMEOUT_MS);
}

#[test]
fn test_scheduler_config_from_json_rejects_invalid() {
    assert!(SchedulerConfig::from_json_str(r#"{ "max_concurrent": 0 }"#).is_err());
    assert!(SchedulerConfig::from_json_str("not json").is_err());
    assert!(SchedulerConfig::from_json_str(r#"{ "max_concurrent": -1 }"#).is_err());
}
