//! Per-policy performance metrics.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | completion - arrival |
//! | Waiting | turnaround - original burst |
//! | Average turnaround | mean turnaround over admitted jobs |
//! | Average waiting | mean waiting over admitted jobs |
//!
//! For non-preemptive policies waiting equals the job's start time. For
//! Round-Robin the mean of per-job waiting equals
//! `(sum of turnaround - sum of burst) / n`, the aggregate slack of the run.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne, "Operating System Concepts", Ch. 5.2

use serde::{Deserialize, Serialize};

use crate::models::{Job, JobId, Ticks};

/// Final accounting for one job in one policy run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobOutcome {
    pub job_id: JobId,
    pub burst: Ticks,
    pub completion: Ticks,
    pub turnaround: Ticks,
    pub waiting: Ticks,
}

impl JobOutcome {
    /// Builds the outcome of a job that finished at `completion`.
    pub fn new(job: &Job, completion: Ticks) -> Self {
        let turnaround = completion.saturating_sub(job.arrival_time);
        Self {
            job_id: job.id,
            burst: job.original_burst,
            completion,
            turnaround,
            waiting: turnaround.saturating_sub(job.original_burst),
        }
    }
}

/// Aggregate metrics of one policy run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolicyMetrics {
    pub average_turnaround: f64,
    pub average_waiting: f64,
    /// Latest completion time.
    pub makespan: Ticks,
}

impl PolicyMetrics {
    /// Computes averages over the given outcomes.
    ///
    /// An empty run reports zero for every metric.
    pub fn calculate(outcomes: &[JobOutcome]) -> Self {
        if outcomes.is_empty() {
            return Self {
                average_turnaround: 0.0,
                average_waiting: 0.0,
                makespan: 0,
            };
        }

        let n = outcomes.len() as f64;
        // Turnarounds sum to up to n x makespan, which can exceed Ticks
        let total_turnaround: u128 = outcomes.iter().map(|o| u128::from(o.turnaround)).sum();
        let total_burst: u128 = outcomes.iter().map(|o| u128::from(o.burst)).sum();
        let total_waiting = total_turnaround - total_burst;

        Self {
            average_turnaround: total_turnaround as f64 / n,
            average_waiting: total_waiting as f64 / n,
            makespan: outcomes.iter().map(|o| o.completion).max().unwrap_or(0),
        }
    }
}
