//! Run summary metrics.

use serde::{Deserialize, Serialize};

use super::Timeline;

/// Average waiting and turnaround time over one run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Mean of `start - arrival`.
    pub avg_waiting_time: f64,
    /// Mean of `completion - arrival`.
    pub avg_turnaround_time: f64,
}

impl Metrics {
    /// Aggregates a timeline.
    ///
    /// Returns `None` for an empty timeline: there is no meaningful average,
    /// and reporting zero would read as an optimal schedule.
    pub fn from_timeline(timeline: &Timeline) -> Option<Self> {
        if timeline.is_empty() {
            return None;
        }
        let count = timeline.len() as f64;
        // u128: n values each up to u64::MAX cannot overflow the sums
        let (waiting, turnaround) = timeline.iter().fold((0u128, 0u128), |(w, t), e| {
            (w + u128::from(e.waiting_time), t + u128::from(e.turnaround_time))
        });
        Some(Self {
            avg_waiting_time: waiting as f64 / count,
            avg_turnaround_time: turnaround as f64 / count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Discipline, Process, ScheduledProcess};

    #[test]
    fn test_metrics_average() {
        let mut t = Timeline::new(Discipline::Fcfs);
        t.push(ScheduledProcess::dispatched(&Process::new(1).with_burst(6), 0));
        t.push(ScheduledProcess::dispatched(
            &Process::new(3).with_arrival(1).with_burst(9),
            6,
        ));

        let m = Metrics::from_timeline(&t).unwrap();
        // waiting (0 + 5) / 2, turnaround (6 + 14) / 2
        assert!((m.avg_waiting_time - 2.5).abs() < 1e-10);
        assert!((m.avg_turnaround_time - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_metrics_empty_is_absent() {
        assert!(Metrics::from_timeline(&Timeline::new(Discipline::Sjf)).is_none());
    }

    #[test]
    fn test_metrics_sums_beyond_u64() {
        let start = 1u64 << 63;
        let mut t = Timeline::new(Discipline::Fcfs);
        t.push(ScheduledProcess::dispatched(&Process::new(1), start));
        t.push(ScheduledProcess::dispatched(&Process::new(2), start + 1));

        // waiting 2^63 + (2^63 + 1) exceeds u64::MAX
        let m = Metrics::from_timeline(&t).unwrap();
        assert!((m.avg_waiting_time / 2f64.powi(63) - 1.0).abs() < 1e-10);
        assert!((m.avg_turnaround_time / 2f64.powi(63) - 1.0).abs() < 1e-10);
    }
}
