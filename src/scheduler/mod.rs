//! Scheduling engine and run indicators.
//!
//! # Algorithm
//!
//! `SchedulingEngine` simulates one CPU running each process to completion
//! in the order its discipline dictates. By default the order is fixed by a
//! single up-front sort; `DispatchMode::ReadyQueue` instead picks the best
//! already-arrived process at each dispatch point.
//!
//! # KPI
//!
//! `TimelineKpi` computes makespan, idle time, utilization, throughput and
//! worst-case waiting/turnaround for a timeline.

mod config;
mod engine;
mod kpi;

pub use config::{DispatchMode, EngineConfig};
pub use engine::{ScheduleOutcome, SchedulingEngine};
pub use kpi::TimelineKpi;
