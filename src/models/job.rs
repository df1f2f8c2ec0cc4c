//! Job models.
//!
//! A [`JobRecord`] is the immutable descriptor read from a job source.
//! A [`Job`] is the working copy a single scheduling policy mutates; every
//! ready queue owns its own `Job` values cloned from the same record.
//!
//! # Time Representation
//! All times are integer ticks relative to the simulation start (t=0).
//! Every job arrives at t=0.

use serde::{Deserialize, Serialize};

/// Job identifier as given by the source. Not checked for uniqueness.
pub type JobId = u32;

/// Simulated CPU time units.
pub type Ticks = u64;

/// A job descriptor as delivered by the job source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    /// Job identifier.
    pub id: JobId,
    /// CPU time units required to complete.
    pub burst_time: Ticks,
    /// Memory requirement (MB).
    pub memory_mb: u32,
}

impl JobRecord {
    /// Creates a new record.
    pub fn new(id: JobId, burst_time: Ticks, memory_mb: u32) -> Self {
        Self {
            id,
            burst_time,
            memory_mb,
        }
    }
}

/// Informational lifecycle state of a [`Job`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobState {
    New,
    Ready,
    Running,
    Done,
}

impl std::fmt::Display for JobState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobState::New => write!(f, "new"),
            JobState::Ready => write!(f, "ready"),
            JobState::Running => write!(f, "running"),
            JobState::Done => write!(f, "done"),
        }
    }
}

/// A job inside one policy's ready queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    /// Job identifier (copied from the record).
    pub id: JobId,
    /// Burst still to be dispatched. Decremented by preemptive policies.
    pub remaining_burst: Ticks,
    /// Burst from the record. Baseline for waiting-time metrics.
    pub original_burst: Ticks,
    /// Memory requirement (MB).
    pub memory_mb: u32,
    /// Arrival time. Always 0 in this simulation.
    pub arrival_time: Ticks,
    /// Position in admission order (0-indexed). Used for stable tie-breaks.
    pub arrival_seq: usize,
    /// Lifecycle state. Not consulted by any dispatch decision.
    pub state: JobState,
}

impl Job {
    /// Creates a fresh job from a record.
    pub fn from_record(record: &JobRecord, arrival_seq: usize) -> Self {
        Self {
            id: record.id,
            remaining_burst: record.burst_time,
            original_burst: record.burst_time,
            memory_mb: record.memory_mb,
            arrival_time: 0,
            arrival_seq,
            state: JobState::New,
        }
    }

    /// Whether all burst has been dispatched.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.remaining_burst == 0
    }

    /// Runs the job for at most `limit` ticks and returns the ticks consumed.
    pub fn run_for(&mut self, limit: Ticks) -> Ticks {
        let slice = limit.min(self.remaining_burst);
        self.remaining_burst -= slice;
        self.state = if self.is_finished() {
            JobState::Done
        } else {
            JobState::Running
        };
        slice
    }
}
