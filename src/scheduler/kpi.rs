//! Timeline performance indicators.
//!
//! Extends the two headline [`Metrics`](crate::models::Metrics) with the
//! other classic single-CPU measures.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Latest completion time |
//! | Idle Time | Makespan minus total burst |
//! | CPU Utilization | Total burst / makespan |
//! | Throughput | Processes completed per time unit |
//! | Max Waiting | Longest single wait |
//! | Max Turnaround | Longest single turnaround |

use serde::{Deserialize, Serialize};

use crate::models::Timeline;

/// Timeline performance indicators.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimelineKpi {
    /// Latest completion time.
    pub makespan: u64,
    /// Time the CPU sat idle before the makespan.
    pub idle_time: u64,
    /// Fraction of the makespan spent running (0.0..=1.0).
    pub cpu_utilization: f64,
    /// Processes completed per time unit.
    pub throughput: f64,
    /// Longest waiting time of any process.
    pub max_waiting_time: u64,
    /// Longest turnaround time of any process.
    pub max_turnaround_time: u64,
}

impl TimelineKpi {
    /// Computes KPIs from a timeline.
    ///
    /// Returns `None` for an empty timeline. Every scheduled process has a
    /// positive burst, so a non-empty timeline has a positive makespan.
    pub fn calculate(timeline: &Timeline) -> Option<Self> {
        if timeline.is_empty() {
            return None;
        }
        let makespan = timeline.makespan();
        let horizon = makespan as f64;

        Some(Self {
            makespan,
            idle_time: timeline.idle_time(),
            cpu_utilization: timeline.busy_time() as f64 / horizon,
            throughput: timeline.len() as f64 / horizon,
            max_waiting_time: timeline.iter().map(|e| e.waiting_time).max().unwrap_or(0),
            max_turnaround_time: timeline
                .iter()
                .map(|e| e.turnaround_time)
                .max()
                .unwrap_or(0),
        })
    }

    /// Whether the run meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_waiting: u64, min_utilization: f64) -> bool {
        self.max_waiting_time <= max_waiting && self.cpu_utilization >= min_utilization
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Discipline, ProcessSet};
    use crate::scheduler::SchedulingEngine;

    fn run(discipline: Discipline) -> Timeline {
        let set = ProcessSet::reference();
        SchedulingEngine::new()
            .compute_schedule(set.processes(), discipline)
            .unwrap()
            .timeline
    }

    #[test]
    fn test_kpi_fcfs_reference() {
        let kpi = TimelineKpi::calculate(&run(Discipline::Fcfs)).unwrap();
        assert_eq!(kpi.makespan, 24);
        assert_eq!(kpi.idle_time, 0);
        assert!((kpi.cpu_utilization - 1.0).abs() < 1e-10);
        assert!((kpi.throughput - 4.0 / 24.0).abs() < 1e-10);
        assert_eq!(kpi.max_waiting_time, 13);
        assert_eq!(kpi.max_turnaround_time, 17);
    }

    #[test]
    fn test_kpi_sjf_reference_idle() {
        let kpi = TimelineKpi::calculate(&run(Discipline::Sjf)).unwrap();
        assert_eq!(kpi.makespan, 31);
        assert_eq!(kpi.idle_time, 7);
        assert!((kpi.cpu_utilization - 24.0 / 31.0).abs() < 1e-10);
        assert_eq!(kpi.max_waiting_time, 21);
    }

    #[test]
    fn test_kpi_empty() {
        assert!(TimelineKpi::calculate(&Timeline::new(Discipline::Fcfs)).is_none());
    }

    #[test]
    fn test_meets_thresholds() {
        let kpi = TimelineKpi::calculate(&run(Discipline::Fcfs)).unwrap();
        assert!(kpi.meets_thresholds(13, 1.0));
        assert!(!kpi.meets_thresholds(12, 0.0));
        assert!(!kpi.meets_thresholds(100, 1.5));
    }
}
