//! Task lifecycle audit sinks.
//!
//! The scheduler records one event per status transition when a sink is
//! attached: `pending` on submission, `running` on admission, then the
//! terminal status.

use std::collections::VecDeque;

use crate::core::TaskStatus;
use crate::util::clock::now_ms;

/// Audit event structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEvent {
    /// Event identifier.
    pub event_id: String,
    /// Related task identifier.
    pub task_id: String,
    /// Status the task transitioned into.
    pub status: TaskStatus,
    /// Timestamp milliseconds.
    pub created_at_ms: u128,
    /// Additional context, e.g. the failure reason.
    pub detail: Option<String>,
}

/// Audit sink abstraction.
pub trait AuditSink: Send {
    /// Record an audit event.
    fn record(&mut self, event: AuditEvent);
}

/// In-memory audit sink for testing and dev.
pub struct InMemoryAuditSink {
    events: VecDeque<AuditEvent>,
    max_events: usize,
}

impl InMemoryAuditSink {
    /// Create a new in-memory sink with a bounded buffer.
    #[must_use]
    pub fn new(max_events: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(max_events),
            max_events,
        }
    }

    /// Retrieve a snapshot of stored events.
    #[must_use]
    pub fn events(&self) -> Vec<AuditEvent> {
        self.events.iter().cloned().collect()
    }

    /// Events recorded for one task, oldest first.
    #[must_use]
    pub fn events_for(&self, task_id: &str) -> Vec<AuditEvent> {
        self.events
            .iter()
            .filter(|e| e.task_id == task_id)
            .cloned()
            .collect()
    }
}

impl AuditSink for InMemoryAuditSink {
    fn record(&mut self, event: AuditEvent) {
        if self.max_events == 0 {
            return;
        }
        if self.events.len() >= self.max_events {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }
}

/// Sink that forwards every event to `tracing` at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAuditSink;

impl AuditSink for TracingAuditSink {
    fn record(&mut self, event: AuditEvent) {
        tracing::debug!(
            event_id = %event.event_id,
            task_id = %event.task_id,
            status = ?event.status,
            detail = event.detail.as_deref().unwrap_or(""),
            "task lifecycle"
        );
    }
}

/// Helper to build an audit event with a fresh id and the current time.
pub fn build_audit_event(
    task_id: impl Into<String>,
    status: TaskStatus,
    detail: Option<String>,
) -> AuditEvent {
    AuditEvent {
        event_id: uuid::Uuid::new_v4().to_string(),
        task_id: task_id.into(),
        status,
        created_at_ms: now_ms(),
        detail,
    }
}
