//! Timeline (run output) model.
//!
//! A timeline is the execution order produced by one run of one discipline.
//! Each entry is a fresh [`ScheduledProcess`] snapshot, so derived timing
//! never lands on the input [`Process`] and cannot leak between runs.

use serde::{Deserialize, Serialize};

use super::{Discipline, Process};

/// A process as executed in one run: its identity and input attributes
/// plus the timing derived by that run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledProcess {
    /// Process identifier.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Display color.
    pub color: String,
    /// Arrival time at the moment of the run.
    pub arrival_time: u64,
    /// Burst time at the moment of the run.
    pub burst_time: u64,
    /// Priority at the moment of the run.
    pub priority: i32,
    /// Instant the CPU was handed to this process.
    pub start_time: u64,
    /// `start_time + burst_time`.
    pub completion_time: u64,
    /// `completion_time - arrival_time`.
    pub turnaround_time: u64,
    /// `start_time - arrival_time`.
    pub waiting_time: u64,
}

impl ScheduledProcess {
    /// Snapshots `process` as dispatched at `start_time`.
    ///
    /// `start_time` must not precede the arrival time, and
    /// `start_time + burst_time` must fit in `u64`. The engine guarantees
    /// both: it idles the clock forward first and refuses sets whose
    /// [`schedule_horizon`](crate::validation::schedule_horizon) overflows.
    pub fn dispatched(process: &Process, start_time: u64) -> Self {
        debug_assert!(start_time >= process.arrival_time);
        let completion_time = start_time + process.burst_time;
        Self {
            id: process.id,
            name: process.name.clone(),
            color: process.color.clone(),
            arrival_time: process.arrival_time,
            burst_time: process.burst_time,
            priority: process.priority,
            start_time,
            completion_time,
            turnaround_time: completion_time - process.arrival_time,
            waiting_time: start_time - process.arrival_time,
        }
    }
}

/// The execution order and timing of one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Discipline that produced this timeline.
    pub discipline: Discipline,
    /// Entries in execution order (ascending start time).
    pub entries: Vec<ScheduledProcess>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new(discipline: Discipline) -> Self {
        Self {
            discipline,
            entries: Vec::new(),
        }
    }

    /// Appends an entry. Entries must be pushed in execution order.
    pub fn push(&mut self, entry: ScheduledProcess) {
        debug_assert!(self
            .entries
            .last()
            .map_or(true, |prev| prev.completion_time <= entry.start_time));
        self.entries.push(entry);
    }

    /// Iterates entries in execution order.
    pub fn iter(&self) -> std::slice::Iter<'_, ScheduledProcess> {
        self.entries.iter()
    }

    /// Number of scheduled processes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was scheduled.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Process ids in execution order.
    pub fn order(&self) -> Vec<u32> {
        self.entries.iter().map(|e| e.id).collect()
    }

    /// Finds the entry for a process.
    pub fn entry_for(&self, id: u32) -> Option<&ScheduledProcess> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Latest completion time, 0 for an empty timeline.
    pub fn makespan(&self) -> u64 {
        self.entries.last().map_or(0, |e| e.completion_time)
    }

    /// Total time the CPU spent running processes.
    pub fn busy_time(&self) -> u64 {
        self.entries.iter().map(|e| e.burst_time).sum()
    }

    /// Total time the CPU sat idle between t=0 and the makespan.
    pub fn idle_time(&self) -> u64 {
        self.makespan() - self.busy_time()
    }

    /// Idle intervals `[from, to)` between t=0 and the makespan.
    pub fn idle_gaps(&self) -> Vec<(u64, u64)> {
        let mut gaps = Vec::new();
        let mut clock = 0;
        for e in &self.entries {
            if e.start_time > clock {
                gaps.push((clock, e.start_time));
            }
            clock = e.completion_time;
        }
        gaps
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a ScheduledProcess;
    type IntoIter = std::slice::Iter<'a, ScheduledProcess>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_timeline() -> Timeline {
        let mut t = Timeline::new(Discipline::Sjf);
        t.push(ScheduledProcess::dispatched(
            &Process::new(2).with_arrival(7).with_burst(4),
            7,
        ));
        t.push(ScheduledProcess::dispatched(
            &Process::new(4).with_arrival(3).with_burst(5),
            11,
        ));
        t
    }

    #[test]
    fn test_dispatched_fields() {
        let p = Process::new(3).with_arrival(1).with_burst(9).with_priority(4);
        let s = ScheduledProcess::dispatched(&p, 6);
        assert_eq!(s.start_time, 6);
        assert_eq!(s.completion_time, 15);
        assert_eq!(s.turnaround_time, 14);
        assert_eq!(s.waiting_time, 5);
        assert_eq!(s.priority, 4);
    }

    #[test]
    fn test_timeline_queries() {
        let t = sample_timeline();
        assert_eq!(t.len(), 2);
        assert_eq!(t.order(), vec![2, 4]);
        assert_eq!(t.entry_for(4).unwrap().waiting_time, 8);
        assert!(t.entry_for(1).is_none());
        assert_eq!(t.makespan(), 16);
    }

    #[test]
    fn test_idle_accounting() {
        let t = sample_timeline();
        assert_eq!(t.busy_time(), 9);
        assert_eq!(t.idle_time(), 7);
        assert_eq!(t.idle_gaps(), vec![(0, 7)]);
    }

    #[test]
    fn test_empty_timeline() {
        let t = Timeline::new(Discipline::Fcfs);
        assert!(t.is_empty());
        assert_eq!(t.makespan(), 0);
        assert_eq!(t.idle_time(), 0);
        assert!(t.idle_gaps().is_empty());
    }
}
