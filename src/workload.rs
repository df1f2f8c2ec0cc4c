//! Synthetic workloads.
//!
//! Generates reproducible job lists for demos and stress runs, and renders
//! records in the job-file line format read by the feed.

use std::fmt::Write;

use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::models::{JobId, JobRecord, Ticks};

/// Parameters for [`generate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadSpec {
    /// Number of records.
    pub count: usize,
    /// Bursts are drawn from `1..=max_burst`.
    pub max_burst: Ticks,
    /// Memory is drawn from `1..=max_memory_mb`. Values above the ceiling
    /// produce records the feed will reject.
    pub max_memory_mb: u32,
    /// RNG seed; the same parameters always yield the same records.
    pub seed: u64,
}

impl Default for WorkloadSpec {
    fn default() -> Self {
        Self {
            count: 30,
            max_burst: 30,
            max_memory_mb: 8192,
            seed: 0,
        }
    }
}

/// Generates `spec.count` records with IDs `1..=count`.
pub fn generate(spec: &WorkloadSpec) -> Vec<JobRecord> {
    let mut rng = StdRng::seed_from_u64(spec.seed);
    let max_burst = spec.max_burst.max(1);
    let max_memory = spec.max_memory_mb.max(1);

    (1..=spec.count)
        .map(|i| {
            JobRecord::new(
                i as JobId,
                rng.random_range(1..=max_burst),
                rng.random_range(1..=max_memory),
            )
        })
        .collect()
}

/// Renders records as `id, burst, memory` lines.
pub fn to_lines(records: &[JobRecord]) -> String {
    let mut out = String::new();
    for r in records {
        let _ = writeln!(out, "{}, {}, {}", r.id, r.burst_time, r.memory_mb);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{parse_record_line, RecordLimits};

    #[test]
    fn test_generate_is_reproducible() {
        let spec = WorkloadSpec {
            seed: 42,
            ..Default::default()
        };
        assert_eq!(generate(&spec), generate(&spec));
    }

    #[test]
    fn test_generate_respects_bounds() {
        let spec = WorkloadSpec {
            count: 200,
            max_burst: 7,
            max_memory_mb: 100,
            seed: 1,
        };
        let records = generate(&spec);

        assert_eq!(records.len(), 200);
        for (i, r) in records.iter().enumerate() {
            assert_eq!(r.id as usize, i + 1);
            assert!((1..=7).contains(&r.burst_time));
            assert!((1..=100).contains(&r.memory_mb));
        }
    }

    #[test]
    fn test_lines_parse_back() {
        let records = generate(&WorkloadSpec::default());
        let text = to_lines(&records);

        let parsed: Vec<JobRecord> = text
            .lines()
            .enumerate()
            .map(|(i, line)| parse_record_line(line, i + 1, &RecordLimits::default()).unwrap())
            .collect();
        assert_eq!(parsed, records);
    }

    #[test]
    fn test_empty_workload() {
        let spec = WorkloadSpec {
            count: 0,
            ..Default::default()
        };
        assert!(generate(&spec).is_empty());
        assert_eq!(to_lines(&[]), "");
    }
}
