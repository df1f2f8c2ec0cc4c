//! Preemptive Round-Robin scheduler.
//!
//! # Algorithm
//!
//! Pop the head job, run it for `min(quantum, remaining)` ticks and record
//! the slice. A job with burst left goes back to the tail; a finished job
//! records its completion time on the run's own clock.

use std::collections::VecDeque;

use super::metrics::JobOutcome;
use super::{AlgorithmResult, Policy, SchedulingAlgorithm};
use crate::models::{Job, JobState, ScheduleEntry, Ticks, Timeline};

/// Round-Robin with a fixed time quantum.
///
/// # Example
///
/// ```
/// use std::collections::VecDeque;
/// use cpu_sched::models::{Job, JobRecord};
/// use cpu_sched::scheduler::{RoundRobinScheduler, SchedulingAlgorithm};
///
/// let queue = VecDeque::from(vec![Job::from_record(&JobRecord::new(1, 5, 10), 0)]);
/// let result = RoundRobinScheduler::new(3).run(queue);
///
/// let slices: Vec<_> = result.timeline.iter().map(|e| (e.start, e.end, e.remaining)).collect();
/// assert_eq!(slices, vec![(0, 3, 2), (3, 5, 0)]);
/// assert_eq!(result.average_waiting, 0.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RoundRobinScheduler {
    quantum: Ticks,
}

impl RoundRobinScheduler {
    /// Creates a scheduler with the given quantum.
    ///
    /// A zero quantum is rejected by config validation before any run.
    pub fn new(quantum: Ticks) -> Self {
        Self { quantum }
    }
}

impl SchedulingAlgorithm for RoundRobinScheduler {
    fn policy(&self) -> Policy {
        Policy::RoundRobin {
            quantum: self.quantum,
        }
    }

    fn run(&self, mut queue: VecDeque<Job>) -> AlgorithmResult {
        let policy = self.policy();
        let mut timeline = Timeline::new();
        let mut outcomes = Vec::with_capacity(queue.len());
        let mut clock: Ticks = 0;

        // Zero quantum would never make progress
        let quantum = self.quantum.max(1);

        while let Some(mut job) = queue.pop_front() {
            let start = clock;
            clock += job.run_for(quantum);

            tracing::trace!(
                policy = %policy,
                job_id = job.id,
                start,
                end = clock,
                remaining = job.remaining_burst,
                "Dispatched"
            );
            timeline.push(ScheduleEntry::new(job.id, start, clock, job.remaining_burst));

            if job.is_finished() {
                outcomes.push(JobOutcome::new(&job, clock));
            } else {
                job.state = JobState::Ready;
                queue.push_back(job);
            }
        }

        AlgorithmResult::new(policy, timeline, outcomes)
    }
}
