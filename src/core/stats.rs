//! Lock-free counters describing scheduler utilization.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

/// Point-in-time view of scheduler utilization.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SchedulerStats {
    /// Admission ceiling.
    pub max_concurrent: usize,
    /// Operations currently holding a permit.
    pub in_flight: usize,
    /// Highest `in_flight` value ever observed.
    pub peak_in_flight: usize,
    /// Permits currently free.
    pub available_permits: usize,
    /// Total tasks handed to the scheduler.
    pub submitted_tasks: u64,
    /// Total tasks that completed.
    pub completed_tasks: u64,
    /// Total tasks that failed, timeouts included.
    pub failed_tasks: u64,
    /// Subset of `failed_tasks` that hit the per-task timeout.
    pub timed_out_tasks: u64,
}

/// Internal counters shared by every running unit (thread-safe).
#[derive(Debug, Default)]
pub(crate) struct SchedulerCounters {
    pub in_flight: AtomicUsize,
    pub peak_in_flight: AtomicUsize,
    pub submitted_tasks: AtomicU64,
    pub completed_tasks: AtomicU64,
    pub failed_tasks: AtomicU64,
    pub timed_out_tasks: AtomicU64,
}

impl SchedulerCounters {
    /// Mark one more operation as in flight and track the peak.
    pub fn enter(&self) {
        let now = self.in_flight.fetch_add(1, Ordering::AcqRel) + 1;
        self.peak_in_flight.fetch_max(now, Ordering::AcqRel);
    }

    /// Mark one operation as no longer in flight.
    pub fn exit(&self) {
        self.in_flight.fetch_sub(1, Ordering::AcqRel);
    }

    /// Get a snapshot of current statistics.
    pub fn snapshot(&self, max_concurrent: usize, available_permits: usize) -> SchedulerStats {
        SchedulerStats {
            max_concurrent,
            in_flight: self.in_flight.load(Ordering::Acquire),
            peak_in_flight: self.peak_in_flight.load(Ordering::Acquire),
            available_permits,
            submitted_tasks: self.submitted_tasks.load(Ordering::Relaxed),
            completed_tasks: self.completed_tasks.load(Ordering::Relaxed),
            failed_tasks: self.failed_tasks.load(Ordering::Relaxed),
            timed_out_tasks: self.timed_out_tasks.load(Ordering::Relaxed),
        }
    }
}
