//! Process set: the simulation input.
//!
//! The set is the only shared mutable state in the simulator. It is built
//! once (usually from the reference seed) and afterwards changes only
//! through the what-if edit entry points below. Rejected edits are no-ops.

use std::fmt;

use log::warn;
use serde::{Deserialize, Serialize};

use super::Process;
use crate::error::{Result, SimulatorError};
use crate::validation::{schedule_horizon, validate_processes};

/// Reference scenario: (id, name, arrival, burst, priority, color).
const REFERENCE_SEED: [(u32, &str, u64, u64, i32, &str); 4] = [
    (1, "P1", 0, 6, 3, "#3b82f6"),
    (2, "P2", 7, 4, 1, "#22c55e"),
    (3, "P3", 1, 9, 4, "#f97316"),
    (4, "P4", 3, 5, 2, "#a855f7"),
];

/// Process attribute that can be edited between runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditField {
    /// Total CPU time (must stay > 0).
    BurstTime,
    /// Scheduling priority (must stay > 0).
    Priority,
}

impl fmt::Display for EditField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BurstTime => f.write_str("burst time"),
            Self::Priority => f.write_str("priority"),
        }
    }
}

/// Ordered collection of processes.
///
/// Order is significant: it is the order stable sorts fall back to when
/// two processes share a dispatching key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSet {
    processes: Vec<Process>,
}

impl ProcessSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from processes, rejecting duplicate ids and zero bursts.
    pub fn from_processes(processes: Vec<Process>) -> Result<Self> {
        validate_processes(&processes).map_err(SimulatorError::InvalidProcessSet)?;
        Ok(Self { processes })
    }

    /// Wraps processes already known to be valid.
    pub(crate) fn from_trusted(processes: Vec<Process>) -> Self {
        debug_assert!(validate_processes(&processes).is_ok());
        Self { processes }
    }

    /// The four-process reference scenario.
    ///
    /// ```
    /// use u_cpusched::models::ProcessSet;
    ///
    /// let set = ProcessSet::reference();
    /// assert_eq!(set.len(), 4);
    /// assert_eq!(set.get(2).unwrap().arrival_time, 7);
    /// ```
    pub fn reference() -> Self {
        let processes = REFERENCE_SEED
            .iter()
            .map(|&(id, name, arrival, burst, priority, color)| {
                Process::new(id)
                    .with_name(name)
                    .with_arrival(arrival)
                    .with_burst(burst)
                    .with_priority(priority)
                    .with_color(color)
            })
            .collect();
        Self { processes }
    }

    /// Processes in set order.
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// Iterates processes in set order.
    pub fn iter(&self) -> std::slice::Iter<'_, Process> {
        self.processes.iter()
    }

    /// Finds a process by id.
    pub fn get(&self, id: u32) -> Option<&Process> {
        self.processes.iter().find(|p| p.id == id)
    }

    /// Number of processes.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether the set has no processes.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Sets a process's burst time.
    ///
    /// Rejects non-positive values, unknown ids and bursts that would push
    /// a completion time past `u64::MAX`, leaving the set unchanged.
    pub fn set_burst_time(&mut self, id: u32, value: i64) -> Result<()> {
        let result = match u64::try_from(value) {
            Ok(burst) if burst > 0 => self.replace_burst(id, burst),
            _ => Err(SimulatorError::InvalidBurstTime { id, value }),
        };
        Self::log_rejection(result)
    }

    /// Sets a process's priority.
    ///
    /// Rejects non-positive values and unknown ids, leaving the set unchanged.
    pub fn set_priority(&mut self, id: u32, value: i32) -> Result<()> {
        let result = if value > 0 {
            self.get_mut(id).map(|p| p.priority = value)
        } else {
            Err(SimulatorError::InvalidPriority { id, value })
        };
        Self::log_rejection(result)
    }

    /// Applies an edit given as raw text, as typed into an input field.
    ///
    /// Surrounding whitespace is ignored; the rest must be a whole decimal
    /// integer. Text with a fractional part or trailing characters (`3.7`,
    /// `12abc`) is malformed and never truncated to its leading digits.
    ///
    /// ```
    /// use u_cpusched::models::{EditField, ProcessSet};
    ///
    /// let mut set = ProcessSet::reference();
    /// assert!(set.apply_raw_edit(1, EditField::BurstTime, " 2 ").is_ok());
    /// assert!(set.apply_raw_edit(1, EditField::BurstTime, "abc").is_err());
    /// assert_eq!(set.get(1).unwrap().burst_time, 2);
    /// ```
    pub fn apply_raw_edit(&mut self, id: u32, field: EditField, raw: &str) -> Result<()> {
        let malformed = || SimulatorError::MalformedValue {
            field,
            raw: raw.to_string(),
        };
        let value: i64 = match raw.trim().parse() {
            Ok(v) => v,
            Err(_) => return Self::log_rejection(Err(malformed())),
        };
        match field {
            EditField::BurstTime => self.set_burst_time(id, value),
            EditField::Priority => match i32::try_from(value) {
                Ok(priority) => self.set_priority(id, priority),
                Err(_) => Self::log_rejection(Err(malformed())),
            },
        }
    }

    /// Applies a batch of raw edits, returning the rejected ones.
    ///
    /// Valid edits are applied even when others in the batch fail.
    pub fn apply_raw_edits<'a, I>(&mut self, edits: I) -> Vec<SimulatorError>
    where
        I: IntoIterator<Item = (u32, EditField, &'a str)>,
    {
        edits
            .into_iter()
            .filter_map(|(id, field, raw)| self.apply_raw_edit(id, field, raw).err())
            .collect()
    }

    fn replace_burst(&mut self, id: u32, burst: u64) -> Result<()> {
        let previous = std::mem::replace(&mut self.get_mut(id)?.burst_time, burst);
        if schedule_horizon(&self.processes).is_none() {
            self.get_mut(id)?.burst_time = previous;
            return Err(SimulatorError::HorizonOverflow);
        }
        Ok(())
    }

    fn get_mut(&mut self, id: u32) -> Result<&mut Process> {
        self.processes
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(SimulatorError::UnknownProcess(id))
    }

    fn log_rejection(result: Result<()>) -> Result<()> {
        if let Err(ref err) = result {
            warn!("edit rejected: {err}");
        }
        result
    }
}

impl<'a> IntoIterator for &'a ProcessSet {
    type Item = &'a Process;
    type IntoIter = std::slice::Iter<'a, Process>;

    fn into_iter(self) -> Self::IntoIter {
        self.processes.iter()
    }
}
