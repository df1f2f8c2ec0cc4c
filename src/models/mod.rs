//! Simulation domain models.
//!
//! Provides the data types shared by intake, scheduling and ranking.
//!
//! # Domain Mappings
//!
//! | cpu-sched | Operating system |
//! |-----------|------------------|
//! | JobRecord | Job descriptor on disk |
//! | Job | Process control block |
//! | ScheduleEntry | CPU dispatch slice |
//! | Timeline | Gantt chart |

mod job;
mod schedule;

pub use job::{Job, JobId, JobRecord, JobState, Ticks};
pub use schedule::{ScheduleEntry, Timeline};
