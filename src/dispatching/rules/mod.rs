//! Built-in dispatching rules.
//!
//! - **FCFS**: arrival time
//! - **SJF**: burst time
//! - **PRIORITY**: priority value
//!
//! # Key Convention
//! All rules return lower keys for processes dispatched first.

use super::{DispatchingRule, RuleKey};
use crate::models::Process;

fn saturating_key(ticks: u64) -> RuleKey {
    RuleKey::try_from(ticks).unwrap_or(RuleKey::MAX)
}

/// First-Come-First-Served.
///
/// Dispatches in order of arrival. Simple and fair in arrival order, but
/// one long early job delays everything behind it (the convoy effect).
#[derive(Debug, Clone, Copy)]
pub struct Fcfs;

impl DispatchingRule for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn key(&self, process: &Process) -> RuleKey {
        saturating_key(process.arrival_time)
    }

    fn description(&self) -> &'static str {
        "First-Come-First-Served"
    }
}

/// Shortest-Job-First (non-preemptive).
///
/// Dispatches the shortest burst first. Minimizes mean waiting time among
/// non-preemptive disciplines when all jobs are available together.
#[derive(Debug, Clone, Copy)]
pub struct Sjf;

impl DispatchingRule for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn key(&self, process: &Process) -> RuleKey {
        saturating_key(process.burst_time)
    }

    fn description(&self) -> &'static str {
        "Shortest-Job-First"
    }
}

/// Priority (non-preemptive).
///
/// Dispatches the lowest priority value first. Low-priority jobs can starve
/// while higher-priority work keeps arriving.
#[derive(Debug, Clone, Copy)]
pub struct Priority;

impl DispatchingRule for Priority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn key(&self, process: &Process) -> RuleKey {
        RuleKey::from(process.priority)
    }

    fn description(&self) -> &'static str {
        "Priority Scheduling"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_process(id: u32, arrival: u64, burst: u64, priority: i32) -> Process {
        Process::new(id)
            .with_arrival(arrival)
            .with_burst(burst)
            .with_priority(priority)
    }

    #[test]
    fn test_fcfs_key() {
        let early = make_process(1, 0, 9, 5);
        let late = make_process(2, 7, 1, 1);
        assert!(Fcfs.key(&early) < Fcfs.key(&late));
    }

    #[test]
    fn test_sjf_key() {
        let short = make_process(1, 7, 4, 5);
        let long = make_process(2, 0, 9, 1);
        assert!(Sjf.key(&short) < Sjf.key(&long));
    }

    #[test]
    fn test_priority_key() {
        let urgent = make_process(1, 9, 9, 1);
        let relaxed = make_process(2, 0, 1, 4);
        assert!(Priority.key(&urgent) < Priority.key(&relaxed));
        assert_eq!(Priority.key(&make_process(3, 0, 1, -2)), -2);
    }

    #[test]
    fn test_key_saturates() {
        let huge = make_process(1, u64::MAX, 1, 0);
        assert_eq!(Fcfs.key(&huge), RuleKey::MAX);
    }

    #[test]
    fn test_rule_names() {
        assert_eq!(Fcfs.name(), "FCFS");
        assert_eq!(Sjf.description(), "Shortest-Job-First");
        assert_eq!(Priority.name(), "PRIORITY");
    }
}
