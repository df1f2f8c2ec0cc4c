//! Scheduling policy identifiers.

use serde::{Deserialize, Serialize};

use crate::models::Ticks;

/// A scheduling policy evaluated by the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Policy {
    /// First-Come-First-Served, non-preemptive.
    Fcfs,
    /// Shortest-Job-First, non-preemptive.
    Sjf,
    /// Preemptive Round-Robin with a fixed quantum.
    RoundRobin { quantum: Ticks },
}

impl Policy {
    /// Policy lineup in the fixed comparison order: FCFS, SJF, then one
    /// Round-Robin per quantum in the given order.
    pub fn lineup(quanta: &[Ticks]) -> Vec<Policy> {
        let mut policies = vec![Policy::Fcfs, Policy::Sjf];
        policies.extend(quanta.iter().map(|&quantum| Policy::RoundRobin { quantum }));
        policies
    }

    pub fn is_preemptive(&self) -> bool {
        matches!(self, Policy::RoundRobin { .. })
    }
}

impl std::fmt::Display for Policy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Policy::Fcfs => write!(f, "FCFS"),
            Policy::Sjf => write!(f, "SJF"),
            Policy::RoundRobin { quantum } => write!(f, "RR{quantum}"),
        }
    }
}
