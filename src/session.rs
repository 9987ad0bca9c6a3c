//! Simulator session.
//!
//! Owns the process set, an engine and the comparison for one sitting.
//! Edits and recorded runs take `&mut self`, so an edit is always visible
//! to the next run and two runs can never interleave.

use log::debug;

use crate::comparison::{Comparison, ComparisonEntry};
use crate::error::Result;
use crate::models::{Discipline, EditField, Metrics, ProcessSet};
use crate::scheduler::{EngineConfig, ScheduleOutcome, SchedulingEngine};

/// One simulator session.
///
/// # Example
///
/// ```
/// use u_cpusched::models::Discipline;
/// use u_cpusched::session::Session;
///
/// let mut session = Session::new();
/// session.run(Discipline::Fcfs)?;
/// session.set_burst_time(2, 1)?;
/// let outcome = session.run(Discipline::Sjf)?;
///
/// assert_eq!(outcome.timeline.entry_for(2).unwrap().burst_time, 1);
/// assert!(session.comparison().get(Discipline::Priority).is_none());
/// # Ok::<(), u_cpusched::SimulatorError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    processes: ProcessSet,
    engine: SchedulingEngine,
    comparison: Comparison,
}

impl Session {
    /// Starts a session on the reference scenario.
    pub fn new() -> Self {
        Self::with_processes(ProcessSet::reference())
    }

    /// Starts a session on the given processes.
    pub fn with_processes(processes: ProcessSet) -> Self {
        Self {
            processes,
            engine: SchedulingEngine::new(),
            comparison: Comparison::new(),
        }
    }

    /// Replaces the engine configuration. Recorded comparisons are kept.
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.engine = SchedulingEngine::with_config(config);
        self
    }

    /// The current process set.
    pub fn processes(&self) -> &ProcessSet {
        &self.processes
    }

    /// The engine in use.
    pub fn engine(&self) -> &SchedulingEngine {
        &self.engine
    }

    /// Schedules the current process set without recording the result.
    pub fn compute_schedule(&self, discipline: Discipline) -> Result<ScheduleOutcome> {
        self.engine.compute_schedule(self.processes.processes(), discipline)
    }

    /// Schedules the current process set and records its metrics.
    ///
    /// A run that yields no metrics (empty set) leaves any earlier entry for
    /// the discipline in place, as does a run that fails.
    pub fn run(&mut self, discipline: Discipline) -> Result<ScheduleOutcome> {
        let outcome = self.compute_schedule(discipline)?;
        if let Some(metrics) = outcome.metrics {
            self.record_comparison(discipline, metrics);
        }
        Ok(outcome)
    }

    /// Records metrics for a discipline, replacing any earlier entry.
    pub fn record_comparison(&mut self, discipline: Discipline, metrics: Metrics) {
        debug!("recording comparison for {discipline}");
        self.comparison.record(discipline, metrics);
    }

    /// The comparison so far.
    pub fn comparison(&self) -> &Comparison {
        &self.comparison
    }

    /// One comparison row per discipline.
    pub fn comparison_entries(&self) -> [ComparisonEntry; 3] {
        self.comparison.entries()
    }

    /// Sets a process's burst time; see [`ProcessSet::set_burst_time`].
    pub fn set_burst_time(&mut self, id: u32, value: i64) -> Result<()> {
        self.processes.set_burst_time(id, value)
    }

    /// Sets a process's priority; see [`ProcessSet::set_priority`].
    pub fn set_priority(&mut self, id: u32, value: i32) -> Result<()> {
        self.processes.set_priority(id, value)
    }

    /// Applies a raw text edit; see [`ProcessSet::apply_raw_edit`].
    pub fn apply_raw_edit(&mut self, id: u32, field: EditField, raw: &str) -> Result<()> {
        self.processes.apply_raw_edit(id, field, raw)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
