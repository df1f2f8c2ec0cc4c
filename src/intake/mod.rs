//! Job intake pipeline.
//!
//! ```text
//! job source ──▶ JobFeed ──▶ AdmissionQueue ──▶ distribute ──▶ ReadyQueueSet
//!                (validate)   (bounded, gated)                (one queue per policy)
//! ```
//!
//! The feed is the sole producer. [`distribute`] is the sole consumer and
//! resolves only once the feed has closed and the queue is drained, which
//! is the signal that every ready queue is complete.

pub mod admission;
mod feed;
mod ready;

pub use admission::{AdmissionReceiver, AdmissionSender};
pub use feed::{FeedReport, JobFeed};
pub use ready::{distribute, ReadyQueueSet};
