//! Error types for the simulator.

use thiserror::Error;

use crate::models::EditField;
use crate::validation::ValidationError;

/// Result type alias for simulator operations.
pub type Result<T> = std::result::Result<T, SimulatorError>;

/// Errors raised at the process-set mutation boundary and by the engine.
///
/// A rejected edit leaves the process set exactly as it was.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulatorError {
    /// Burst time must be strictly positive.
    #[error("invalid burst time {value} for process {id}: must be > 0")]
    InvalidBurstTime { id: u32, value: i64 },

    /// Priority must be strictly positive.
    #[error("invalid priority {value} for process {id}: must be > 0")]
    InvalidPriority { id: u32, value: i32 },

    /// Latest arrival plus total burst time does not fit in `u64`.
    #[error("schedule horizon exceeds the representable time range")]
    HorizonOverflow,

    /// No process with the given id exists in the set.
    #[error("unknown process id: {0}")]
    UnknownProcess(u32),

    /// A raw edit value could not be parsed as an integer.
    #[error("malformed {field} value: {raw:?}")]
    MalformedValue { field: EditField, raw: String },

    /// The processes handed to a process set failed validation.
    #[error("invalid process set: {} problem(s)", .0.len())]
    InvalidProcessSet(Vec<ValidationError>),
}
