//! Tests for audit sink

use bounded_task_scheduler::core::{
    build_audit_event, AuditSink, InMemoryAuditSink, TaskStatus, TracingAuditSink,
};

#[test]
fn test_in_memory_audit_sink() {
    let mut sink = InMemoryAuditSink::new(10);

    let event = build_audit_event("task1", TaskStatus::Pending, None);
    sink.record(event.clone());
    assert_eq!(sink.events().len(), 1);

    let events = sink.events();
    assert_eq!(events[0].event_id, event.event_id);
    assert_eq!(events[0].task_id, "task1");
    assert_eq!(events[0].status, TaskStatus::Pending);
}

#[test]
fn test_audit_sink_overflow() {
    let mut sink = InMemoryAuditSink::new(2);

    sink.record(build_audit_event("task1", TaskStatus::Pending, None));
    sink.record(build_audit_event("task2", TaskStatus::Pending, None));
    sink.record(build_audit_event("task3", TaskStatus::Pending, None));

    let events = sink.events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].task_id, "task2"); // First one popped
    assert_eq!(events[1].task_id, "task3");
}

#[test]
fn test_zero_capacity_sink_drops_everything() {
    let mut sink = InMemoryAuditSink::new(0);
    sink.record(build_audit_event("task1", TaskStatus::Running, None));
    assert!(sink.events().is_empty());
}

#[test]
fn test_events_for_filters_by_task() {
    let mut sink = InMemoryAuditSink::new(10);
    sink.record(build_audit_event("a", TaskStatus::Pending, None));
    sink.record(build_audit_event("b", TaskStatus::Pending, None));
    sink.record(build_audit_event("a", TaskStatus::Running, None));

    let events = sink.events_for("a");
    assert_eq!(events.len(), 2);
    assert_eq!(events[1].status, TaskStatus::Running);
}

#[test]
fn test_build_audit_event() {
    let event = build_audit_event(
        "task1",
        TaskStatus::Failed,
        Some("timed out after 100ms".to_string()),
    );

    assert_eq!(event.task_id, "task1");
    assert_eq!(event.status, TaskStatus::Failed);
    assert_eq!(event.detail, Some("timed out after 100ms".to_string()));
    assert!(event.created_at_ms > 0);

    let other = build_audit_event("task1", TaskStatus::Failed, None);
    assert_ne!(event.event_id, other.event_id);
}

#[test]
fn test_tracing_sink_accepts_events() {
    let mut sink = TracingAuditSink;
    sink.record(build_audit_event("task1", TaskStatus::Completed, None));
}
