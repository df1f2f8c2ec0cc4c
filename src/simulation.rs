//! End-to-end simulation run.
//!
//! Three tasks cooperate:
//!
//! 1. **feed** reads the source and pushes valid records into the
//!    admission queue, then closes it.
//! 2. **distribution** drains the admission queue into one ready queue per
//!    policy. Its join handle resolves to the completed [`ReadyQueueSet`].
//! 3. **scheduling** awaits that handle before running any policy, so no
//!    algorithm can observe a partially populated queue.
//!
//! Results are then ranked by the [`Ranking`] comparator.

use std::path::PathBuf;

use serde::Serialize;

use crate::comparator::Ranking;
use crate::config::SimulationConfig;
use crate::error::{Result, SimError};
use crate::intake::{admission, distribute, FeedReport, JobFeed};
use crate::models::JobRecord;
use crate::scheduler::{AlgorithmResult, Policy, SchedulingEngine};
use crate::validation::validate_config;

/// Where job records come from.
#[derive(Debug, Clone)]
pub enum JobSource {
    /// A job file with one `id, burst, memory` line per job.
    File(PathBuf),
    /// The same line format, already in memory.
    Text(String),
    /// Already-parsed records.
    Records(Vec<JobRecord>),
}

/// Everything one run produced.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    pub config: SimulationConfig,
    pub feed: FeedReport,
    /// One result per policy, in lineup order.
    pub results: Vec<AlgorithmResult>,
    pub ranking: Ranking,
}

impl SimulationReport {
    /// Result for a policy, if it was part of the lineup.
    pub fn result(&self, policy: Policy) -> Option<&AlgorithmResult> {
        self.results.iter().find(|r| r.policy == policy)
    }
}

/// A configured simulation.
///
/// # Example
/// ```
/// use cpu_sched::config::SimulationConfig;
/// use cpu_sched::scheduler::Policy;
/// use cpu_sched::simulation::{JobSource, Simulation};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> cpu_sched::error::Result<()> {
/// let sim = Simulation::new(SimulationConfig::default())?;
/// let report = sim
///     .run(JobSource::Text("1, 24, 10\n2, 3, 5\n3, 3, 5\n".to_string()))
///     .await?;
///
/// assert_eq!(report.ranking.best_waiting, Some(Policy::Sjf));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Simulation {
    config: SimulationConfig,
}

impl Simulation {
    /// Validates `config` and creates a simulation.
    pub fn new(config: SimulationConfig) -> Result<Self> {
        validate_config(&config).map_err(|errors| {
            let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            SimError::InvalidConfig(messages.join("; "))
        })?;
        Ok(Self { config })
    }

    /// Runs intake, all policies and the ranking.
    pub async fn run(&self, source: JobSource) -> Result<SimulationReport> {
        let config = self.config.clone();
        tracing::info!(
            memory_ceiling_mb = config.memory_ceiling_mb,
            max_records = config.max_records,
            quanta = ?config.round_robin_quanta,
            "Starting simulation"
        );

        let (sender, receiver) = admission::channel(config.max_records, config.memory_ceiling_mb);

        let feed = JobFeed::new(&config);
        let feed_task = tokio::spawn(async move {
            match source {
                JobSource::File(path) => feed.feed_file(&path, sender).await,
                JobSource::Text(text) => feed.feed_lines(text.as_bytes(), sender).await,
                JobSource::Records(records) => feed.feed_records(records, sender).await,
            }
        });

        let engine = SchedulingEngine::new(&config);
        let distribution_task = tokio::spawn(distribute(receiver, engine.policies()));

        let scheduling_task = tokio::spawn(async move {
            let ready = distribution_task.await??;
            Ok::<_, SimError>(engine.run_all(ready))
        });

        // Scheduling first: a distribution failure closes the queue, and the
        // feed would otherwise report only the resulting QueueClosed.
        let results = scheduling_task.await??;
        let feed_report = feed_task.await??;

        let ranking = Ranking::from_results(&results);
        tracing::info!(
            best_turnaround = ?ranking.best_turnaround,
            best_waiting = ?ranking.best_waiting,
            "Simulation complete"
        );

        Ok(SimulationReport {
            config,
            feed: feed_report,
            results,
            ranking,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_rejected() {
        let err = Simulation::new(SimulationConfig::default().with_quanta(vec![0])).unwrap_err();
        match err {
            SimError::InvalidConfig(msg) => assert!(msg.contains("quantum")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_run_records() {
        let sim = Simulation::new(SimulationConfig::default()).unwrap();
        let report = sim
            .run(JobSource::Records(vec![JobRecord::new(1, 5, 10)]))
            .await
            .unwrap();

        assert_eq!(report.feed.admitted, 1);
        assert_eq!(report.results.len(), 4);
        let rr3 = report.result(Policy::RoundRobin { quantum: 3 }).unwrap();
        assert_eq!(rr3.timeline.len(), 2);
        assert_eq!(rr3.average_waiting, 0.0);
    }

    #[tokio::test]
    async fn test_source_unavailable_propagates() {
        let sim = Simulation::new(SimulationConfig::default()).unwrap();
        let err = sim
            .run(JobSource::File(PathBuf::from("/nonexistent/cpu-sched/job.txt")))
            .await
            .unwrap_err();
        assert!(matches!(err, SimError::SourceUnavailable { .. }));
    }
}
