//! Tests for error types

use std::time::Duration;

use bounded_task_scheduler::core::{FailureReason, SchedulerError};

#[test]
fn test_invalid_config_error() {
    let err = SchedulerError::InvalidConfig("max_concurrent must be at least 1".to_string());
    assert_eq!(err.to_string(), "invalid config: max_concurrent must be at least 1");
}

#[test]
fn test_no_runtime_error() {
    let err = SchedulerError::NoRuntime;
    assert_eq!(err.to_string(), "no tokio runtime available");
}

#[test]
fn test_config_error() {
    let err = SchedulerError::Config("parse error: EOF".to_string());
    assert_eq!(err.to_string(), "config error: parse error: EOF");
}

#[test]
fn test_timeout_reason() {
    let reason = FailureReason::Timeout {
        after: Duration::from_secs(5),
    };
    assert!(reason.is_timeout());
    assert!(reason.cause().is_none());
    assert_eq!(reason.to_string(), "timed out after 5000ms");
}

#[test]
fn test_operation_error_keeps_context_chain() {
    let cause = anyhow::anyhow!("connection refused").context("calling model");
    let reason = FailureReason::OperationError(cause);
    assert_eq!(
        reason.to_string(),
        "operation failed: calling model: connection refused"
    );
}
