//! Cross-discipline comparison.
//!
//! Keeps the most recent [`Metrics`] per discipline. Entries are only ever
//! inserted or replaced; a discipline that has not been run has no entry
//! and reports as not available rather than as a number.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{Discipline, Metrics};

/// One comparison row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonEntry {
    /// The discipline.
    pub discipline: Discipline,
    /// Its latest metrics, if it has been run.
    pub metrics: Option<Metrics>,
}

/// Discipline → latest metrics.
///
/// ```
/// use u_cpusched::comparison::Comparison;
/// use u_cpusched::models::{Discipline, Metrics};
///
/// let mut cmp = Comparison::new();
/// cmp.record(Discipline::Fcfs, Metrics { avg_waiting_time: 7.5, avg_turnaround_time: 13.5 });
/// assert!(cmp.get(Discipline::Fcfs).is_some());
/// assert!(cmp.get(Discipline::Sjf).is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    results: BTreeMap<Discipline, Metrics>,
}

impl Comparison {
    /// Creates an empty comparison.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a discipline's metrics, replacing any earlier entry.
    pub fn record(&mut self, discipline: Discipline, metrics: Metrics) {
        self.results.insert(discipline, metrics);
    }

    /// Latest metrics for a discipline.
    pub fn get(&self, discipline: Discipline) -> Option<&Metrics> {
        self.results.get(&discipline)
    }

    /// One row per discipline, in FCFS, SJF, Priority order.
    pub fn entries(&self) -> [ComparisonEntry; 3] {
        Discipline::ALL.map(|discipline| ComparisonEntry {
            discipline,
            metrics: self.results.get(&discipline).copied(),
        })
    }

    /// Disciplines that have been run, in reporting order.
    pub fn recorded(&self) -> impl Iterator<Item = (Discipline, &Metrics)> {
        self.results.iter().map(|(d, m)| (*d, m))
    }

    /// Number of disciplines with an entry.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether no discipline has been recorded.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.results.clear();
    }
}

fn cell(value: Option<f64>) -> String {
    value.map_or_else(|| "N/A".to_string(), |v| format!("{v:.2}"))
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<10} {:>17} {:>20}",
            "Algorithm", "Avg. Waiting Time", "Avg. Turnaround Time"
        )?;
        for entry in self.entries() {
            writeln!(
                f,
                "{:<10} {:>17} {:>20}",
                entry.discipline.label(),
                cell(entry.metrics.map(|m| m.avg_waiting_time)),
                cell(entry.metrics.map(|m| m.avg_turnaround_time)),
            )?;
        }
        Ok(())
    }
}
