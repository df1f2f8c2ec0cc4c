//! Admission queue: the hand-off between the job feed and distribution.
//!
//! A bounded `mpsc` channel split into an [`AdmissionSender`] (held by the
//! feed) and an [`AdmissionReceiver`] (held by the distribution task).
//! Dropping or closing the sender is the end-of-input signal; once the
//! buffer drains, [`AdmissionReceiver::take`] returns `Ok(None)` instead of
//! waiting.
//!
//! # Memory gate
//!
//! The budget is a static ceiling: it is checked on both ends but never
//! consumed on admission nor restored on completion. Since nothing can ever
//! free budget, a record that does not fit is an error rather than a wait.

use tokio::sync::mpsc;

use crate::error::{RecordError, Result, SimError};
use crate::models::JobRecord;

/// Creates a connected sender/receiver pair.
///
/// `capacity` bounds the number of buffered records; it is clamped to 1.
pub fn channel(capacity: usize, ceiling_mb: u32) -> (AdmissionSender, AdmissionReceiver) {
    let (tx, rx) = mpsc::channel(capacity.max(1));
    (
        AdmissionSender { tx, ceiling_mb },
        AdmissionReceiver {
            rx,
            ceiling_mb,
            released: 0,
        },
    )
}

/// Producer half, owned by the job feed.
#[derive(Debug)]
pub struct AdmissionSender {
    tx: mpsc::Sender<JobRecord>,
    ceiling_mb: u32,
}

impl AdmissionSender {
    /// Appends a record and wakes the consumer.
    ///
    /// Waits while the buffer is full. Fails if the record exceeds the
    /// memory ceiling or the consumer has gone away.
    pub async fn push(&self, record: JobRecord) -> Result<()> {
        check_budget(&record, self.ceiling_mb)?;
        self.tx
            .send(record)
            .await
            .map_err(|_| SimError::QueueClosed)?;
        tracing::debug!(job_id = record.id, memory_mb = record.memory_mb, "Record queued for admission");
        Ok(())
    }

    /// Signals end-of-input. Buffered records are still delivered.
    pub fn close(self) {
        tracing::debug!("Admission input closed");
    }
}

/// Consumer half, owned by the distribution task.
#[derive(Debug)]
pub struct AdmissionReceiver {
    rx: mpsc::Receiver<JobRecord>,
    ceiling_mb: u32,
    released: usize,
}

impl AdmissionReceiver {
    /// Removes and returns the head record, waiting while the buffer is
    /// empty.
    ///
    /// Returns `Ok(None)` once the sender is closed and the buffer is
    /// drained.
    pub async fn take(&mut self) -> Result<Option<JobRecord>> {
        let Some(record) = self.rx.recv().await else {
            tracing::debug!(released = self.released, "Admission queue drained");
            return Ok(None);
        };
        check_budget(&record, self.ceiling_mb)?;
        self.released += 1;
        Ok(Some(record))
    }
}

fn check_budget(record: &JobRecord, ceiling_mb: u32) -> std::result::Result<(), RecordError> {
    if record.memory_mb > ceiling_mb {
        return Err(RecordError::MemorySizeExceeded {
            id: record.id,
            requested_mb: u64::from(record.memory_mb),
            ceiling_mb,
        });
    }
    Ok(())
}
