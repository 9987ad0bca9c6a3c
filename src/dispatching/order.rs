//! Queue ordering for a discipline.
//!
//! Combines a discipline's dispatching rule with an explicit final
//! tie-breaking strategy, so equal keys never resolve by accident.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::RuleKey;
use crate::models::{Discipline, Process};

/// How ties are broken when two processes share a dispatch key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreaker {
    /// Keep process-set order (stable sort).
    #[default]
    InputOrder,
    /// Ascending process id.
    ById,
}

/// Total rank of a process: rule key, tie-break id, set position.
pub(crate) type Rank = (RuleKey, u32, usize);

/// Orders processes for one discipline.
///
/// # Example
/// ```
/// use u_cpusched::dispatching::QueueOrder;
/// use u_cpusched::models::{Discipline, ProcessSet};
///
/// let set = ProcessSet::reference();
/// let order = QueueOrder::new(Discipline::Fcfs);
/// assert_eq!(order.sort_indices(set.processes()), vec![0, 2, 3, 1]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueOrder {
    discipline: Discipline,
    tie_breaker: TieBreaker,
}

impl QueueOrder {
    /// Creates an ordering with the default (input order) tie-breaker.
    pub fn new(discipline: Discipline) -> Self {
        Self {
            discipline,
            tie_breaker: TieBreaker::default(),
        }
    }

    /// Sets the final tie-breaking strategy.
    pub fn with_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// The discipline being ordered for.
    pub fn discipline(&self) -> Discipline {
        self.discipline
    }

    /// The final tie-breaking strategy.
    pub fn tie_breaker(&self) -> TieBreaker {
        self.tie_breaker
    }

    /// Compares two processes; `Less` means `a` is dispatched first.
    pub fn compare(&self, a: &Process, b: &Process) -> Ordering {
        let rule = self.discipline.rule();
        rule.key(a)
            .cmp(&rule.key(b))
            .then_with(|| match self.tie_breaker {
                TieBreaker::InputOrder => Ordering::Equal,
                TieBreaker::ById => a.id.cmp(&b.id),
            })
    }

    /// Returns indices into `processes` in dispatch order.
    ///
    /// The sort is stable, so `InputOrder` ties keep their set order.
    pub fn sort_indices(&self, processes: &[Process]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..processes.len()).collect();
        indices.sort_by(|&a, &b| self.compare(&processes[a], &processes[b]));
        indices
    }

    /// Returns the processes in dispatch order without touching the input.
    pub fn sort<'a>(&self, processes: &'a [Process]) -> Vec<&'a Process> {
        self.sort_indices(processes)
            .into_iter()
            .map(|i| &processes[i])
            .collect()
    }

    /// Rank of the process at `index`, consistent with [`Self::compare`]
    /// followed by set position.
    pub(crate) fn rank(&self, process: &Process, index: usize) -> Rank {
        let secondary = match self.tie_breaker {
            TieBreaker::InputOrder => 0,
            TieBreaker::ById => process.id,
        };
        (self.discipline.rule().key(process), secondary, index)
    }
}
