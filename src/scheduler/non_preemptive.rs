//! Non-preemptive run-to-completion scheduler (FCFS, SJF).
//!
//! # Algorithm
//!
//! 1. Collect the whole ready queue.
//! 2. Order it with the rule engine (FIFO for FCFS, SPT + FIFO for SJF).
//! 3. Dispatch each job once for its full burst, back to back from t=0.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for dispatch.

use std::collections::VecDeque;

use super::metrics::JobOutcome;
use super::{AlgorithmResult, Policy, SchedulingAlgorithm};
use crate::dispatching::{rules, RuleEngine};
use crate::models::{Job, JobState, ScheduleEntry, Ticks, Timeline};

/// Runs every job to completion in rule-engine order.
///
/// # Example
///
/// ```
/// use std::collections::VecDeque;
/// use cpu_sched::models::{Job, JobRecord};
/// use cpu_sched::scheduler::{NonPreemptiveScheduler, SchedulingAlgorithm};
///
/// let queue: VecDeque<Job> = [(1, 24), (2, 3), (3, 3)]
///     .iter()
///     .enumerate()
///     .map(|(seq, &(id, burst))| Job::from_record(&JobRecord::new(id, burst, 10), seq))
///     .collect();
///
/// let result = NonPreemptiveScheduler::sjf().run(queue);
/// assert_eq!(result.timeline.dispatch_order(), vec![2, 3, 1]);
/// assert!((result.average_waiting - 3.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct NonPreemptiveScheduler {
    policy: Policy,
    rule_engine: RuleEngine,
}

impl NonPreemptiveScheduler {
    /// First-Come-First-Served: strict queue order.
    pub fn fcfs() -> Self {
        Self {
            policy: Policy::Fcfs,
            rule_engine: RuleEngine::new().with_rule(rules::Fifo),
        }
    }

    /// Shortest-Job-First: ascending burst, arrival order on ties.
    pub fn sjf() -> Self {
        Self {
            policy: Policy::Sjf,
            rule_engine: RuleEngine::new()
                .with_rule(rules::Spt)
                .with_tie_breaker(rules::Fifo),
        }
    }

    /// Returns queue indices in dispatch order.
    fn dispatch_order(&self, jobs: &[Job]) -> Vec<usize> {
        self.rule_engine.sort_indices(jobs)
    }
}

impl SchedulingAlgorithm for NonPreemptiveScheduler {
    fn policy(&self) -> Policy {
        self.policy
    }

    fn run(&self, queue: VecDeque<Job>) -> AlgorithmResult {
        let mut jobs: Vec<Job> = queue.into();
        let order = self.dispatch_order(&jobs);

        let mut timeline = Timeline::new();
        let mut outcomes = Vec::with_capacity(jobs.len());
        let mut clock: Ticks = 0;

        for idx in order {
            let job = &mut jobs[idx];
            let start = clock;
            let burst = job.remaining_burst;
            job.state = JobState::Running;
            clock += job.run_for(burst);

            tracing::trace!(policy = %self.policy, job_id = job.id, start, end = clock, "Dispatched");
            timeline.push(ScheduleEntry::new(job.id, start, clock, job.remaining_burst));
            outcomes.push(JobOutcome::new(job, clock));
        }

        AlgorithmResult::new(self.policy, timeline, outcomes)
    }
}
