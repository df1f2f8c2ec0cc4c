//! Built-in dispatching rules.
//!
//! All rules return lower scores for jobs that should run first.

use super::{DispatchingRule, RuleScore};
use crate::models::Job;

/// First In First Out.
///
/// Dispatches jobs in admission order. With every job arriving at t=0 the
/// admission sequence is the only arrival signal.
#[derive(Debug, Clone, Copy)]
pub struct Fifo;

impl DispatchingRule for Fifo {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn evaluate(&self, job: &Job) -> RuleScore {
        job.arrival_seq as f64
    }

    fn description(&self) -> &'static str {
        "First In First Out"
    }
}

/// Shortest Processing Time.
///
/// Prioritizes jobs with the smaller original burst.
/// Minimizes average waiting time on a single CPU.
///
/// The score is exact for bursts up to 2^53, which covers every burst
/// within [`BURST_TIME_LIMIT`](crate::config::BURST_TIME_LIMIT).
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on single machine.
#[derive(Debug, Clone, Copy)]
pub struct Spt;

impl DispatchingRule for Spt {
    fn name(&self) -> &'static str {
        "SPT"
    }

    fn evaluate(&self, job: &Job) -> RuleScore {
        job.original_burst as f64
    }

    fn description(&self) -> &'static str {
        "Shortest Processing Time"
    }
}
