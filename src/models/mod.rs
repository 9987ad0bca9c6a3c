//! Simulation domain models.
//!
//! Inputs ([`Process`], [`ProcessSet`]) are kept apart from run outputs
//! ([`Timeline`], [`ScheduledProcess`], [`Metrics`]): a run reads the
//! inputs and builds new output records, never writing timing back.
//!
//! # Glossary
//!
//! | Term | Meaning |
//! |------|---------|
//! | Burst time | CPU time a process needs, uninterrupted |
//! | Arrival time | Instant a process becomes eligible to run |
//! | Waiting time | Time ready but not running (start - arrival) |
//! | Turnaround time | Arrival to completion |

mod discipline;
mod metrics;
mod process;
mod process_set;
mod timeline;

pub use discipline::{Discipline, ParseDisciplineError};
pub use metrics::Metrics;
pub use process::Process;
pub use process_set::{EditField, ProcessSet};
pub use timeline::{ScheduledProcess, Timeline};
