//! Simulation configuration.
//!
//! The reference setup is a 8192 MB memory ceiling, Round-Robin quanta of
//! 3 and 5, and at most 30 admitted records per run.
//!
//! Burst times and record counts are both capped at the 32-bit range, so a
//! scheduling clock (at most records x burst) always fits in [`Ticks`].

use serde::{Deserialize, Serialize};

use crate::models::Ticks;

pub const DEFAULT_MEMORY_CEILING_MB: u32 = 8192;
pub const DEFAULT_MAX_RECORDS: usize = 30;
pub const DEFAULT_ROUND_ROBIN_QUANTA: [Ticks; 2] = [3, 5];
pub const DEFAULT_MAX_BURST_TIME: Ticks = 100_000;

/// Largest accepted `max_burst_time`.
pub const BURST_TIME_LIMIT: Ticks = u32::MAX as Ticks;
/// Largest accepted `max_records`.
pub const RECORD_LIMIT: usize = u32::MAX as usize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// System memory ceiling (MB). Records above it are never admitted.
    pub memory_ceiling_mb: u32,
    /// One Round-Robin run per quantum, in this order.
    pub round_robin_quanta: Vec<Ticks>,
    /// Maximum number of records admitted per run.
    pub max_records: usize,
    /// Longest accepted burst time. Longer records are malformed.
    ///
    /// Round-Robin emits one slice per quantum, so this also bounds the
    /// timeline size.
    pub max_burst_time: Ticks,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            memory_ceiling_mb: DEFAULT_MEMORY_CEILING_MB,
            round_robin_quanta: DEFAULT_ROUND_ROBIN_QUANTA.to_vec(),
            max_records: DEFAULT_MAX_RECORDS,
            max_burst_time: DEFAULT_MAX_BURST_TIME,
        }
    }
}

impl SimulationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_memory_ceiling(mut self, memory_ceiling_mb: u32) -> Self {
        self.memory_ceiling_mb = memory_ceiling_mb;
        self
    }

    pub fn with_quanta(mut self, quanta: Vec<Ticks>) -> Self {
        self.round_robin_quanta = quanta;
        self
    }

    pub fn with_max_records(mut self, max_records: usize) -> Self {
        self.max_records = max_records;
        self
    }

    pub fn with_max_burst_time(mut self, max_burst_time: Ticks) -> Self {
        self.max_burst_time = max_burst_time;
        self
    }
}
