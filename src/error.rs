//! Error types for job intake and simulation runs.
//!
//! Record-level failures ([`RecordError`]) are recoverable: the feed logs
//! them, records them in its report and moves on to the next record.
//! Everything in [`SimError`] is fatal to the run that raised it.

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

use crate::models::JobId;

/// A single job record that could not be admitted.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RecordError {
    #[error("Malformed record at line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    #[error("Job {id} requests {requested_mb}MB, maximum size of memory is {ceiling_mb}MB")]
    MemorySizeExceeded {
        id: JobId,
        requested_mb: u64,
        ceiling_mb: u32,
    },
}

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Job source unavailable: {path}: {source}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read job source: {0}")]
    SourceRead(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Admission rejected: {0}")]
    Admission(#[from] RecordError),

    #[error("Admission queue closed by consumer")]
    QueueClosed,

    #[error("Task cancelled: {0}")]
    Cancelled(String),

    #[error("Task failed: {0}")]
    TaskFailed(String),
}

impl From<tokio::task::JoinError> for SimError {
    fn from(err: tokio::task::JoinError) -> Self {
        if err.is_cancelled() {
            SimError::Cancelled(err.to_string())
        } else {
            SimError::TaskFailed(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, SimError>;
