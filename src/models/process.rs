//! Process model.
//!
//! A process is the unit of work handed to the CPU. It carries identity,
//! the scheduling attributes read by the dispatching rules, and a cosmetic
//! color tag for whatever draws the timeline.
//!
//! # Time Representation
//! All times are abstract integer ticks relative to the simulation epoch
//! (t=0). Arrival times are non-negative by construction; burst times must
//! be strictly positive (enforced by [`crate::validation`] and by the
//! process-set edit entry points).

use serde::{Deserialize, Serialize};

/// A process to be scheduled on the single simulated CPU.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub id: u32,
    /// Display name (e.g. "P1").
    pub name: String,
    /// Instant the process becomes ready.
    pub arrival_time: u64,
    /// Total CPU time required.
    pub burst_time: u64,
    /// Scheduling priority (lower value = serviced earlier).
    pub priority: i32,
    /// Display color, no computational role.
    pub color: String,
}

impl Process {
    /// Creates a process with the given id, arriving at t=0 with a
    /// one-tick burst.
    pub fn new(id: u32) -> Self {
        Self {
            id,
            name: format!("P{id}"),
            arrival_time: 0,
            burst_time: 1,
            priority: 0,
            color: String::new(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the arrival time.
    pub fn with_arrival(mut self, arrival_time: u64) -> Self {
        self.arrival_time = arrival_time;
        self
    }

    /// Sets the burst time.
    pub fn with_burst(mut self, burst_time: u64) -> Self {
        self.burst_time = burst_time;
        self
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the display color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_builder() {
        let p = Process::new(2)
            .with_name("P2")
            .with_arrival(7)
            .with_burst(4)
            .with_priority(1)
            .with_color("#22c55e");

        assert_eq!(p.id, 2);
        assert_eq!(p.name, "P2");
        assert_eq!(p.arrival_time, 7);
        assert_eq!(p.burst_time, 4);
        assert_eq!(p.priority, 1);
        assert_eq!(p.color, "#22c55e");
    }

    #[test]
    fn test_process_defaults() {
        let p = Process::new(9);
        assert_eq!(p.name, "P9");
        assert_eq!(p.arrival_time, 0);
        assert_eq!(p.burst_time, 1);
        assert!(p.color.is_empty());
    }
}
