//! Scheduling algorithms and per-policy metrics.
//!
//! Each algorithm consumes one ready queue and produces one
//! [`AlgorithmResult`]: an ordered timeline plus average turnaround and
//! waiting time.
//!
//! # Algorithms
//!
//! | Policy | Scheduler | Preemptive |
//! |--------|-----------|------------|
//! | FCFS | [`NonPreemptiveScheduler::fcfs`] | no |
//! | SJF | [`NonPreemptiveScheduler::sjf`] | no |
//! | RR(q) | [`RoundRobinScheduler::new`] | yes |
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne, "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

mod engine;
pub mod metrics;
mod non_preemptive;
mod policy;
mod result;
mod round_robin;

pub use engine::SchedulingEngine;
pub use metrics::{JobOutcome, PolicyMetrics};
pub use non_preemptive::NonPreemptiveScheduler;
pub use policy::Policy;
pub use result::AlgorithmResult;
pub use round_robin::RoundRobinScheduler;

use std::collections::VecDeque;
use std::fmt::Debug;

use crate::models::Job;

/// A scheduling discipline that turns a ready queue into a timeline.
///
/// Implementations own the queue they are given; no state survives a run.
/// Clocks are plain [`Ticks`](crate::models::Ticks): queues must respect
/// [`RECORD_LIMIT`](crate::config::RECORD_LIMIT) and bursts
/// [`BURST_TIME_LIMIT`](crate::config::BURST_TIME_LIMIT), as the job feed
/// guarantees.
pub trait SchedulingAlgorithm: Send + Sync + Debug {
    /// Policy this algorithm implements.
    fn policy(&self) -> Policy;

    /// Dispatches every job in `queue` to completion.
    fn run(&self, queue: VecDeque<Job>) -> AlgorithmResult;
}
