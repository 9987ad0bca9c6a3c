//! Input validation for process sets.
//!
//! Checks structural integrity of processes before they become a
//! [`ProcessSet`](crate::models::ProcessSet). Detects:
//! - Duplicate process IDs
//! - Zero burst times
//! - Completion times that cannot be represented
//!
//! Every problem is reported, not just the first.

use std::collections::HashSet;
use std::fmt;

use crate::models::Process;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two processes share the same ID.
    DuplicateId,
    /// A process needs no CPU time.
    ZeroBurst,
    /// Latest arrival plus total burst overflows `u64`.
    HorizonOverflow,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates processes for scheduling.
///
/// Checks:
/// 1. No duplicate process IDs
/// 2. Every burst time is positive
/// 3. Every completion time fits in `u64` (see [`schedule_horizon`])
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for p in processes {
        if !ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.burst_time == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroBurst,
                format!("Process '{}' has zero burst time", p.name),
            ));
        }
    }

    if schedule_horizon(processes).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::HorizonOverflow,
            "Latest arrival plus total burst time exceeds the time range",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Upper bound on any completion time: latest arrival plus total burst.
///
/// Holds for every dispatch order, since the clock only idles forward to an
/// arrival and otherwise advances by bursts. `None` if it overflows `u64`.
pub fn schedule_horizon(processes: &[Process]) -> Option<u64> {
    let latest_arrival = processes.iter().map(|p| p.arrival_time).max().unwrap_or(0);
    processes
        .iter()
        .try_fold(latest_arrival, |acc, p| acc.checked_add(p.burst_time))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProcessSet;

    #[test]
    fn test_reference_is_valid() {
        let set = ProcessSet::reference();
        assert!(validate_processes(set.processes()).is_ok());
    }

    #[test]
    fn test_empty_is_valid() {
        assert!(validate_processes(&[]).is_ok());
    }

    #[test]
    fn test_duplicate_id() {
        let processes = vec![Process::new(1), Process::new(2), Process::new(1)];
        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateId);
    }

    #[test]
    fn test_zero_burst() {
        let processes = vec![Process::new(1).with_burst(0)];
        let errors = validate_processes(&processes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::ZeroBurst && e.message.contains("P1")));
    }

    #[test]
    fn test_schedule_horizon() {
        let set = ProcessSet::reference();
        // latest arrival 7, total burst 24
        assert_eq!(schedule_horizon(set.processes()), Some(31));
        assert_eq!(schedule_horizon(&[]), Some(0));
    }

    #[test]
    fn test_horizon_overflow() {
        let processes = vec![
            Process::new(1).with_arrival(u64::MAX - 1).with_burst(5),
            Process::new(2).with_burst(3),
        ];
        assert!(schedule_horizon(&processes).is_none());

        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::HorizonOverflow);
    }

    #[test]
    fn test_horizon_at_limit_is_valid() {
        let processes = vec![Process::new(1).with_arrival(u64::MAX - 5).with_burst(5)];
        assert_eq!(schedule_horizon(&processes), Some(u64::MAX));
        assert!(validate_processes(&processes).is_ok());
    }

    #[test]
    fn test_multiple_errors() {
        let processes = vec![Process::new(1).with_burst(0), Process::new(1)];
        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
