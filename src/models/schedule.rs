//! Timeline (solution) model.
//!
//! A timeline is the ordered list of dispatch slices a policy produced.
//! Non-preemptive policies emit one slice per job; Round-Robin may emit
//! several slices for the same job.

use serde::{Deserialize, Serialize};

use super::{JobId, Ticks};

/// One dispatch slice: `job_id` ran on the CPU during `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Dispatched job.
    pub job_id: JobId,
    /// Slice start (ticks).
    pub start: Ticks,
    /// Slice end (ticks).
    pub end: Ticks,
    /// Burst left on the job after this slice.
    pub remaining: Ticks,
}

impl ScheduleEntry {
    /// Creates a new slice.
    pub fn new(job_id: JobId, start: Ticks, end: Ticks, remaining: Ticks) -> Self {
        Self {
            job_id,
            start,
            end,
            remaining,
        }
    }

    /// Slice length (end - start).
    #[inline]
    pub fn duration(&self) -> Ticks {
        self.end - self.start
    }

    /// Whether the job finished with this slice.
    #[inline]
    pub fn is_final(&self) -> bool {
        self.remaining == 0
    }
}

/// An ordered sequence of dispatch slices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Slices in dispatch order.
    pub entries: Vec<ScheduleEntry>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a slice.
    pub fn push(&mut self, entry: ScheduleEntry) {
        self.entries.push(entry);
    }

    /// Makespan: end of the last slice.
    pub fn makespan(&self) -> Ticks {
        self.entries.iter().map(|e| e.end).max().unwrap_or(0)
    }

    /// All slices for a job ID, in dispatch order.
    ///
    /// The ID-keyed queries below merge jobs that share an ID. Per-job
    /// accounting for such jobs lives in the policy result's outcomes.
    pub fn slices_for_job(&self, job_id: JobId) -> Vec<&ScheduleEntry> {
        self.entries.iter().filter(|e| e.job_id == job_id).collect()
    }

    /// Total CPU time granted to a job ID.
    pub fn dispatched_ticks(&self, job_id: JobId) -> Ticks {
        self.slices_for_job(job_id)
            .iter()
            .map(|e| e.duration())
            .sum()
    }

    /// Completion time for a job ID (end of its last slice).
    pub fn completion_time(&self, job_id: JobId) -> Option<Ticks> {
        self.slices_for_job(job_id).iter().map(|e| e.end).max()
    }

    /// Job IDs in first-dispatch order, without repeats.
    pub fn dispatch_order(&self) -> Vec<JobId> {
        let mut order: Vec<JobId> = Vec::new();
        for entry in &self.entries {
            if !order.contains(&entry.job_id) {
                order.push(entry.job_id);
            }
        }
        order
    }

    /// Number of slices.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the timeline has no slices.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScheduleEntry> {
        self.entries.iter()
    }
}
