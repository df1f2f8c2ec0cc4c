//! Input validation for job records and simulation settings.
//!
//! Record checks run inside the job feed, one record at a time, so a bad
//! record is reported and skipped without aborting the feed:
//! - Field count and integer syntax (`id, burst, memory`)
//! - Burst time in `(0, max_burst_time]`
//! - Memory requirement in `(0, ceiling]`
//!
//! Configuration checks run once before a simulation starts and collect
//! every problem at once.

use std::collections::HashSet;

use crate::config::{SimulationConfig, BURST_TIME_LIMIT, RECORD_LIMIT};
use crate::error::RecordError;
use crate::models::{JobId, JobRecord, Ticks};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A configuration validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of configuration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Memory ceiling is zero.
    InvalidCeiling,
    /// A Round-Robin quantum is zero.
    InvalidQuantum,
    /// The same quantum is configured twice.
    DuplicateQuantum,
    /// Record limit is zero or above [`RECORD_LIMIT`].
    InvalidRecordLimit,
    /// Burst limit is zero or above [`BURST_TIME_LIMIT`].
    InvalidBurstLimit,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates simulation settings.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_config(config: &SimulationConfig) -> ValidationResult {
    let mut errors = Vec::new();

    if config.memory_ceiling_mb == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidCeiling,
            "Memory ceiling must be positive",
        ));
    }

    if config.max_records == 0 || config.max_records > RECORD_LIMIT {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidRecordLimit,
            format!(
                "Record limit must be in 1..={RECORD_LIMIT}, got {}",
                config.max_records
            ),
        ));
    }

    if config.max_burst_time == 0 || config.max_burst_time > BURST_TIME_LIMIT {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidBurstLimit,
            format!(
                "Burst time limit must be in 1..={BURST_TIME_LIMIT}, got {}",
                config.max_burst_time
            ),
        ));
    }

    let mut seen = HashSet::new();
    for &quantum in &config.round_robin_quanta {
        if quantum == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidQuantum,
                "Round-Robin quantum must be positive",
            ));
        } else if !seen.insert(quantum) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateQuantum,
                format!("Duplicate Round-Robin quantum: {quantum}"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Bounds every admitted record must respect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordLimits {
    pub memory_ceiling_mb: u32,
    pub max_burst_time: Ticks,
}

impl RecordLimits {
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self {
            memory_ceiling_mb: config.memory_ceiling_mb,
            max_burst_time: config.max_burst_time,
        }
    }
}

impl Default for RecordLimits {
    fn default() -> Self {
        Self::from_config(&SimulationConfig::default())
    }
}

/// Checks a parsed record against `limits`.
///
/// `line` is the 1-based source position, used only for reporting.
pub fn validate_record(
    record: &JobRecord,
    line: usize,
    limits: &RecordLimits,
) -> Result<(), RecordError> {
    check_fields(
        record.id,
        i128::from(record.burst_time),
        i64::from(record.memory_mb),
        line,
        limits,
    )
    .map(|_| ())
}

/// Parses one `id, burst, memory` line into a validated record.
pub fn parse_record_line(
    text: &str,
    line: usize,
    limits: &RecordLimits,
) -> Result<JobRecord, RecordError> {
    let parts: Vec<&str> = text.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(RecordError::Malformed {
            line,
            reason: format!("expected 3 fields (id, burst, memory), found {}", parts.len()),
        });
    }

    let id: JobId = parse_field(parts[0], "id", line)?;
    let burst: i64 = parse_field(parts[1], "burst time", line)?;
    let memory: i64 = parse_field(parts[2], "memory", line)?;

    let (burst_time, memory_mb) = check_fields(id, i128::from(burst), memory, line, limits)?;

    Ok(JobRecord::new(id, burst_time, memory_mb))
}

fn parse_field<T: std::str::FromStr>(
    raw: &str,
    field: &str,
    line: usize,
) -> Result<T, RecordError> {
    raw.parse().map_err(|_| RecordError::Malformed {
        line,
        reason: format!("invalid {field} '{raw}'"),
    })
}

/// Returns the checked burst time and memory requirement.
fn check_fields(
    id: JobId,
    burst: i128,
    memory: i64,
    line: usize,
    limits: &RecordLimits,
) -> Result<(Ticks, u32), RecordError> {
    let burst_time = Ticks::try_from(burst)
        .ok()
        .filter(|&b| b > 0)
        .ok_or_else(|| RecordError::Malformed {
            line,
            reason: format!("job {id}: burst time must be positive, got {burst}"),
        })?;
    if burst_time > limits.max_burst_time {
        return Err(RecordError::Malformed {
            line,
            reason: format!(
                "job {id}: burst time {burst_time} exceeds limit {}",
                limits.max_burst_time
            ),
        });
    }
    if memory <= 0 {
        return Err(RecordError::Malformed {
            line,
            reason: format!("job {id}: memory must be positive, got {memory}"),
        });
    }
    let memory_mb = u32::try_from(memory)
        .ok()
        .filter(|&m| m <= limits.memory_ceiling_mb)
        .ok_or(RecordError::MemorySizeExceeded {
            id,
            requested_mb: memory.unsigned_abs(),
            ceiling_mb: limits.memory_ceiling_mb,
        })?;
    Ok((burst_time, memory_mb))
}
