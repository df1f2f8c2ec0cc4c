//! CPU scheduling simulator.
//!
//! Ingests a bounded list of job descriptors, admits them through a
//! memory-gated queue into one ready queue per policy, runs
//! First-Come-First-Served, Shortest-Job-First and Round-Robin (one run per
//! configured quantum), and ranks the policies by average turnaround and
//! average waiting time.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `JobRecord`, `Job`, `ScheduleEntry`, `Timeline`
//! - **`intake`**: Job feed, admission queue, per-policy ready queues
//! - **`dispatching`**: Dispatching rules (FIFO, SPT) and the rule engine
//! - **`scheduler`**: FCFS/SJF/Round-Robin algorithms and metrics
//! - **`comparator`**: Deterministic policy ranking
//! - **`simulation`**: Task orchestration for a full run
//! - **`validation`**: Record and configuration checks
//! - **`workload`**: Reproducible synthetic job lists
//!
//! # Data Flow
//!
//! ```text
//! source → JobFeed → AdmissionQueue → ReadyQueueSet → SchedulingEngine → Ranking
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne, "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod comparator;
pub mod config;
pub mod dispatching;
pub mod error;
pub mod intake;
pub mod models;
pub mod scheduler;
pub mod simulation;
pub mod validation;
pub mod workload;
