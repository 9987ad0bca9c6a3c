//! Single-CPU non-preemptive scheduling engine.
//!
//! # Algorithm
//!
//! Static sort (default):
//! 1. Order a copy of the process set by the discipline's key.
//! 2. Walk the queue once with a clock starting at t=0.
//! 3. If the next process has not arrived, idle the clock to its arrival.
//! 4. Run it to completion; the clock advances to its completion time.
//!
//! Ready queue:
//! 1. Admit every process with `arrival <= clock` into a min-heap keyed by
//!    the discipline's rank.
//! 2. If the heap is empty, idle the clock to the next arrival.
//! 3. Otherwise pop the best process and run it to completion.
//!
//! Both passes refuse a set whose latest arrival plus total burst overflows
//! `u64`, which bounds every completion time either pass can produce.
//!
//! # Complexity
//! Static: O(n log n) sort plus an O(n) pass. Ready queue: O(n log n).

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

use super::{DispatchMode, EngineConfig};
use crate::dispatching::QueueOrder;
use crate::error::{Result, SimulatorError};
use crate::models::{Discipline, Metrics, Process, ScheduledProcess, Timeline};
use crate::validation::schedule_horizon;

/// Result of one scheduling run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleOutcome {
    /// Execution order and timing.
    pub timeline: Timeline,
    /// Averages over the timeline; `None` when nothing was scheduled.
    pub metrics: Option<Metrics>,
}

/// Stateless scheduling engine.
///
/// Reads the processes it is given and returns fresh output records;
/// the input is never modified.
///
/// # Example
///
/// ```
/// use u_cpusched::models::{Discipline, ProcessSet};
/// use u_cpusched::scheduler::SchedulingEngine;
///
/// let set = ProcessSet::reference();
/// let outcome = SchedulingEngine::new().compute_schedule(set.processes(), Discipline::Fcfs)?;
/// assert_eq!(outcome.timeline.order(), vec![1, 3, 4, 2]);
/// assert_eq!(outcome.metrics.unwrap().avg_waiting_time, 7.5);
/// # Ok::<(), u_cpusched::SimulatorError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct SchedulingEngine {
    config: EngineConfig,
}

impl SchedulingEngine {
    /// Creates an engine with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with the given configuration.
    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Current configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Schedules `processes` under `discipline`.
    ///
    /// An empty input yields an empty timeline and absent metrics.
    ///
    /// # Errors
    /// [`SimulatorError::HorizonOverflow`] if some completion time could
    /// exceed `u64::MAX`.
    pub fn compute_schedule(
        &self,
        processes: &[Process],
        discipline: Discipline,
    ) -> Result<ScheduleOutcome> {
        if schedule_horizon(processes).is_none() {
            warn!("{discipline}: schedule horizon overflows, nothing dispatched");
            return Err(SimulatorError::HorizonOverflow);
        }

        let order = QueueOrder::new(discipline).with_tie_breaker(self.config.tie_breaker);
        let timeline = match self.config.dispatch_mode {
            DispatchMode::StaticSort => static_pass(processes, &order),
            DispatchMode::ReadyQueue => ready_queue_pass(processes, &order),
        };
        let metrics = Metrics::from_timeline(&timeline);

        match metrics {
            Some(m) => debug!(
                "{discipline} ({:?}): {} processes, avg waiting {:.2}, avg turnaround {:.2}",
                self.config.dispatch_mode,
                timeline.len(),
                m.avg_waiting_time,
                m.avg_turnaround_time
            ),
            None => debug!("{discipline}: empty process set, no metrics"),
        }

        Ok(ScheduleOutcome { timeline, metrics })
    }
}

fn dispatch(timeline: &mut Timeline, process: &Process, clock: &mut u64) {
    if *clock < process.arrival_time {
        trace!("cpu idle {}..{}", clock, process.arrival_time);
        *clock = process.arrival_time;
    }
    let entry = ScheduledProcess::dispatched(process, *clock);
    trace!(
        "dispatch {} at {} until {}",
        entry.name,
        entry.start_time,
        entry.completion_time
    );
    *clock = entry.completion_time;
    timeline.push(entry);
}

fn static_pass(processes: &[Process], order: &QueueOrder) -> Timeline {
    let mut timeline = Timeline::new(order.discipline());
    let mut clock = 0;
    for i in order.sort_indices(processes) {
        dispatch(&mut timeline, &processes[i], &mut clock);
    }
    timeline
}

fn ready_queue_pass(processes: &[Process], order: &QueueOrder) -> Timeline {
    let mut timeline = Timeline::new(order.discipline());
    let mut by_arrival: Vec<usize> = (0..processes.len()).collect();
    by_arrival.sort_by_key(|&i| (processes[i].arrival_time, i));
    let mut pending = by_arrival.into_iter().peekable();
    let mut ready = BinaryHeap::new();
    let mut clock = 0;

    loop {
        while let Some(i) = pending.next_if(|&i| processes[i].arrival_time <= clock) {
            ready.push(Reverse(order.rank(&processes[i], i)));
        }
        match ready.pop() {
            Some(Reverse((_, _, i))) => dispatch(&mut timeline, &processes[i], &mut clock),
            None => match pending.peek() {
                Some(&next) => clock = processes[next].arrival_time,
                None => break,
            },
        }
    }
    timeline
}
