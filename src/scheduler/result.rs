//! Output of one policy run.

use serde::{Deserialize, Serialize};

use super::metrics::{JobOutcome, PolicyMetrics};
use super::Policy;
use crate::models::Timeline;

/// Timeline and metrics produced by one scheduling run.
///
/// Built once when the run completes and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmResult {
    /// Policy that produced this result.
    pub policy: Policy,
    /// Dispatch slices in order.
    pub timeline: Timeline,
    /// Mean turnaround over admitted jobs.
    pub average_turnaround: f64,
    /// Mean waiting over admitted jobs.
    pub average_waiting: f64,
    /// Per-job accounting, in completion order.
    pub outcomes: Vec<JobOutcome>,
}

impl AlgorithmResult {
    /// Finalizes a run from its timeline and per-job outcomes.
    pub fn new(policy: Policy, timeline: Timeline, outcomes: Vec<JobOutcome>) -> Self {
        let metrics = PolicyMetrics::calculate(&outcomes);
        Self {
            policy,
            timeline,
            average_turnaround: metrics.average_turnaround,
            average_waiting: metrics.average_waiting,
            outcomes,
        }
    }

    /// Display name of the policy ("FCFS", "RR3", ...).
    pub fn policy_name(&self) -> String {
        self.policy.to_string()
    }

    /// Number of jobs the run completed.
    pub fn job_count(&self) -> usize {
        self.outcomes.len()
    }
}
