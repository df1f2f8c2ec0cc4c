//! Per-policy ready queues.
//!
//! Every admitted record is cloned into one [`Job`] per policy so a policy
//! that mutates its jobs (Round-Robin decrements remaining burst) cannot be
//! observed by any other policy.

use std::collections::VecDeque;

use super::admission::AdmissionReceiver;
use crate::error::Result;
use crate::models::{Job, JobRecord, JobState};
use crate::scheduler::Policy;

/// One independent ready queue per policy, all in admission order.
#[derive(Debug, Clone, Default)]
pub struct ReadyQueueSet {
    queues: Vec<(Policy, VecDeque<Job>)>,
    admitted: usize,
}

impl ReadyQueueSet {
    /// Creates empty queues for the given policies.
    pub fn new(policies: &[Policy]) -> Self {
        Self {
            queues: policies.iter().map(|&p| (p, VecDeque::new())).collect(),
            admitted: 0,
        }
    }

    /// Clones `record` into every queue.
    pub fn admit(&mut self, record: &JobRecord) {
        let seq = self.admitted;
        for (_, queue) in &mut self.queues {
            let mut job = Job::from_record(record, seq);
            job.state = JobState::Ready;
            queue.push_back(job);
        }
        self.admitted += 1;
    }

    /// The ready queue of a policy, if configured.
    pub fn queue(&self, policy: Policy) -> Option<&VecDeque<Job>> {
        self.queues
            .iter()
            .find(|(p, _)| *p == policy)
            .map(|(_, q)| q)
    }

    /// Hands a policy's queue over to its scheduler, leaving it empty.
    pub fn take(&mut self, policy: Policy) -> Option<VecDeque<Job>> {
        self.queues
            .iter_mut()
            .find(|(p, _)| *p == policy)
            .map(|(_, q)| std::mem::take(q))
    }

    /// Number of records admitted so far.
    pub fn admitted(&self) -> usize {
        self.admitted
    }
}

/// Drains the admission queue into a fresh [`ReadyQueueSet`].
///
/// Resolves only after the feed has closed its sender and every buffered
/// record has been distributed, so the returned set is complete.
pub async fn distribute(
    mut receiver: AdmissionReceiver,
    policies: Vec<Policy>,
) -> Result<ReadyQueueSet> {
    let mut ready = ReadyQueueSet::new(&policies);
    while let Some(record) = receiver.take().await? {
        ready.admit(&record);
        tracing::debug!(job_id = record.id, admitted = ready.admitted(), "Job admitted to ready queues");
    }
    tracing::info!(admitted = ready.admitted(), "Distribution complete");
    Ok(ready)
}
