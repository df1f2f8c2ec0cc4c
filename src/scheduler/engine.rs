//! Runs every configured policy against its own ready queue.

use super::{
    AlgorithmResult, NonPreemptiveScheduler, Policy, RoundRobinScheduler, SchedulingAlgorithm,
};
use crate::config::SimulationConfig;
use crate::intake::ReadyQueueSet;

/// The policy lineup of one simulation.
#[derive(Debug)]
pub struct SchedulingEngine {
    algorithms: Vec<Box<dyn SchedulingAlgorithm>>,
}

impl SchedulingEngine {
    /// Builds the lineup FCFS, SJF, then one Round-Robin per quantum.
    pub fn new(config: &SimulationConfig) -> Self {
        let algorithms = Policy::lineup(&config.round_robin_quanta)
            .into_iter()
            .map(Self::algorithm_for)
            .collect();
        Self { algorithms }
    }

    fn algorithm_for(policy: Policy) -> Box<dyn SchedulingAlgorithm> {
        match policy {
            Policy::Fcfs => Box::new(NonPreemptiveScheduler::fcfs()),
            Policy::Sjf => Box::new(NonPreemptiveScheduler::sjf()),
            Policy::RoundRobin { quantum } => Box::new(RoundRobinScheduler::new(quantum)),
        }
    }

    /// Policies in comparison order.
    pub fn policies(&self) -> Vec<Policy> {
        self.algorithms.iter().map(|a| a.policy()).collect()
    }

    /// Runs each algorithm on its own queue, in lineup order.
    ///
    /// A policy with no queue in `ready` runs on an empty queue.
    pub fn run_all(&self, mut ready: ReadyQueueSet) -> Vec<AlgorithmResult> {
        self.algorithms
            .iter()
            .map(|algorithm| {
                let policy = algorithm.policy();
                let queue = ready.take(policy).unwrap_or_default();
                let result = algorithm.run(queue);
                tracing::info!(
                    policy = %policy,
                    jobs = result.job_count(),
                    slices = result.timeline.len(),
                    avg_turnaround = result.average_turnaround,
                    avg_waiting = result.average_waiting,
                    "Policy run complete"
                );
                result
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::JobRecord;

    fn textbook_ready(policies: &[Policy]) -> ReadyQueueSet {
        let mut ready = ReadyQueueSet::new(policies);
        for record in [
            JobRecord::new(1, 24, 10),
            JobRecord::new(2, 3, 5),
            JobRecord::new(3, 3, 5),
        ] {
            ready.admit(&record);
        }
        ready
    }

    #[test]
    fn test_reference_lineup() {
        let engine = SchedulingEngine::new(&SimulationConfig::default());
        assert_eq!(engine.policies(), Policy::lineup(&[3, 5]));
    }

    #[test]
    fn test_run_all_textbook() {
        let engine = SchedulingEngine::new(&SimulationConfig::default());
        let results = engine.run_all(textbook_ready(&engine.policies()));

        assert_eq!(results.len(), 4);
        let names: Vec<String> = results.iter().map(|r| r.policy_name()).collect();
        assert_eq!(names, vec!["FCFS", "SJF", "RR3", "RR5"]);

        assert!((results[0].average_turnaround - 27.0).abs() < 1e-10);
        assert!((results[1].average_turnaround - 13.0).abs() < 1e-10);
        for result in &results {
            assert_eq!(result.job_count(), 3);
            for id in 1..=3 {
                let expected = if id == 1 { 24 } else { 3 };
                assert_eq!(result.timeline.dispatched_ticks(id), expected);
            }
        }
    }

    #[test]
    fn test_missing_queue_runs_empty() {
        let engine = SchedulingEngine::new(&SimulationConfig::default());
        let results = engine.run_all(textbook_ready(&[Policy::Fcfs]));

        assert_eq!(results[0].job_count(), 3);
        assert_eq!(results[1].job_count(), 0);
        assert_eq!(results[1].average_waiting, 0.0);
    }
}
