//! Non-preemptive CPU scheduling simulator.
//!
//! Simulates how a single processor would run a fixed set of processes
//! under First-Come-First-Served, Shortest-Job-First and Priority
//! scheduling, and compares the disciplines by average waiting and
//! turnaround time.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `ProcessSet`, `Discipline`,
//!   `ScheduledProcess`, `Timeline`, `Metrics`
//! - **`dispatching`**: Per-discipline rules and queue ordering with
//!   explicit tie-breaking
//! - **`scheduler`**: The scheduling engine, its configuration and KPIs
//! - **`comparison`**: Discipline → latest metrics bookkeeping
//! - **`session`**: Process set + engine + comparison behind one interface
//! - **`validation`**: Input integrity checks (duplicate IDs, zero bursts,
//!   time overflow)
//! - **`workload`**: Random process-set generation
//!
//! # Example
//!
//! ```
//! use u_cpusched::models::Discipline;
//! use u_cpusched::session::Session;
//!
//! let mut session = Session::new();
//! for discipline in Discipline::ALL {
//!     session.run(discipline)?;
//! }
//! let fcfs = session.comparison().get(Discipline::Fcfs).unwrap();
//! assert_eq!(fcfs.avg_waiting_time, 7.5);
//! # Ok::<(), u_cpusched::SimulatorError>(())
//! ```
//!
//! # Logging
//!
//! Runs are reported through the `log` facade (`debug` per run, `trace`
//! per dispatch, `warn` per rejected edit). No logger is installed here.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne, "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod comparison;
pub mod dispatching;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod session;
pub mod validation;
pub mod workload;

pub use error::{Result, SimulatorError};
