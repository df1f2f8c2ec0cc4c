//! Dispatching rules and rule engine for non-preemptive scheduling.
//!
//! A non-preemptive policy is fully described by the order in which it
//! dispatches jobs. That order comes from a [`RuleEngine`]: a primary
//! rule plus optional tie-breakers.
//!
//! # Usage
//!
//! ```
//! use cpu_sched::dispatching::{rules, RuleEngine};
//! use cpu_sched::models::{Job, JobRecord};
//!
//! let jobs = vec![
//!     Job::from_record(&JobRecord::new(1, 24, 10), 0),
//!     Job::from_record(&JobRecord::new(2, 3, 5), 1),
//! ];
//! let engine = RuleEngine::new()
//!     .with_rule(rules::Spt)
//!     .with_tie_breaker(rules::Fifo);
//! assert_eq!(engine.sort_indices(&jobs), vec![1, 0]);
//! ```

mod engine;
pub mod rules;

pub use engine::RuleEngine;

use crate::models::Job;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = higher priority (dispatched first).
pub type RuleScore = f64;

/// A dispatching rule that evaluates job priority.
///
/// # Score Convention
/// **Lower score = higher priority.**
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SPT", "FIFO").
    fn name(&self) -> &'static str;

    /// Evaluates the priority of a job. Lower = dispatched earlier.
    fn evaluate(&self, job: &Job) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
