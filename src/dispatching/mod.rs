//! Dispatching rules and queue ordering.
//!
//! Each [`Discipline`] maps to a [`DispatchingRule`] that reduces a process
//! to an integer key; [`QueueOrder`] sorts or ranks processes by that key
//! and a final [`TieBreaker`].
//!
//! # Usage
//!
//! ```
//! use u_cpusched::dispatching::{QueueOrder, TieBreaker};
//! use u_cpusched::models::{Discipline, ProcessSet};
//!
//! let set = ProcessSet::reference();
//! let order = QueueOrder::new(Discipline::Sjf).with_tie_breaker(TieBreaker::ById);
//! let queue: Vec<u32> = order.sort(set.processes()).iter().map(|p| p.id).collect();
//! assert_eq!(queue, vec![2, 4, 1, 3]);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne, "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

mod order;
pub mod rules;

pub use order::{QueueOrder, TieBreaker};

use crate::models::{Discipline, Process};
use std::fmt::Debug;

/// Key returned by a dispatching rule.
///
/// Lower keys = dispatched earlier.
pub type RuleKey = i64;

/// A rule reducing a process to its dispatch key.
///
/// # Key Convention
/// **Lower key = higher priority.** Every built-in discipline sorts
/// ascending on a single process attribute.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "FCFS", "SJF").
    fn name(&self) -> &'static str;

    /// Dispatch key of a process.
    fn key(&self, process: &Process) -> RuleKey;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

impl Discipline {
    /// The dispatching rule implementing this discipline.
    pub fn rule(self) -> &'static dyn DispatchingRule {
        match self {
            Self::Fcfs => &rules::Fcfs,
            Self::Sjf => &rules::Sjf,
            Self::Priority => &rules::Priority,
        }
    }
}
