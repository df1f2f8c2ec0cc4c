//! Policy ranking.
//!
//! Picks exactly one winner per metric: the first policy, in lineup order
//! (FCFS, SJF, RR(q1), RR(q2), ...), whose average equals the minimum.
//! Averages of one simulation share the same job count, so equal totals
//! produce bit-identical averages and exact comparison is safe.

use serde::Serialize;

use crate::scheduler::{AlgorithmResult, Policy};

/// Policy ranking by average turnaround and by average waiting time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ranking {
    /// Lowest average turnaround. `None` only when there are no results.
    pub best_turnaround: Option<Policy>,
    /// Lowest average waiting. `None` only when there are no results.
    pub best_waiting: Option<Policy>,
    /// All policies, ascending average turnaround, lineup order on ties.
    pub by_turnaround: Vec<Policy>,
    /// All policies, ascending average waiting, lineup order on ties.
    pub by_waiting: Vec<Policy>,
}

impl Ranking {
    /// Ranks results given in lineup order.
    ///
    /// # Example
    /// ```
    /// use std::collections::VecDeque;
    /// use cpu_sched::comparator::Ranking;
    /// use cpu_sched::models::{Job, JobRecord};
    /// use cpu_sched::scheduler::{NonPreemptiveScheduler, Policy, SchedulingAlgorithm};
    ///
    /// let queue: VecDeque<Job> = [(1, 24), (2, 3), (3, 3)]
    ///     .iter()
    ///     .enumerate()
    ///     .map(|(seq, &(id, burst))| Job::from_record(&JobRecord::new(id, burst, 10), seq))
    ///     .collect();
    /// let results = vec![
    ///     NonPreemptiveScheduler::fcfs().run(queue.clone()),
    ///     NonPreemptiveScheduler::sjf().run(queue),
    /// ];
    ///
    /// let ranking = Ranking::from_results(&results);
    /// assert_eq!(ranking.best_turnaround, Some(Policy::Sjf));
    /// assert_eq!(ranking.best_waiting, Some(Policy::Sjf));
    /// ```
    pub fn from_results(results: &[AlgorithmResult]) -> Self {
        let by_turnaround = rank_by(results, |r| r.average_turnaround);
        let by_waiting = rank_by(results, |r| r.average_waiting);

        Self {
            best_turnaround: by_turnaround.first().copied(),
            best_waiting: by_waiting.first().copied(),
            by_turnaround,
            by_waiting,
        }
    }
}

fn rank_by(results: &[AlgorithmResult], metric: impl Fn(&AlgorithmResult) -> f64) -> Vec<Policy> {
    let mut order: Vec<&AlgorithmResult> = results.iter().collect();
    // Stable: ties keep lineup order
    order.sort_by(|a, b| metric(a).total_cmp(&metric(b)));
    order.into_iter().map(|r| r.policy).collect()
}
