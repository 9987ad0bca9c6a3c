//! Scheduling disciplines.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A non-preemptive ordering discipline.
///
/// Declaration order (FCFS, SJF, Priority) is the order comparisons are
/// reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Discipline {
    /// First-Come-First-Served: ascending arrival time.
    Fcfs,
    /// Shortest-Job-First: ascending burst time.
    Sjf,
    /// Priority: ascending priority value.
    Priority,
}

impl Discipline {
    /// All disciplines in reporting order.
    pub const ALL: [Discipline; 3] = [Self::Fcfs, Self::Sjf, Self::Priority];

    /// Lowercase identifier (`fcfs`, `sjf`, `priority`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fcfs => "fcfs",
            Self::Sjf => "sjf",
            Self::Priority => "priority",
        }
    }

    /// Short uppercase label for tables.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::Sjf => "SJF",
            Self::Priority => "PRIORITY",
        }
    }
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing a [`Discipline`] identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown discipline: {0:?}")]
pub struct ParseDisciplineError(pub String);

impl FromStr for Discipline {
    type Err = ParseDisciplineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fcfs" => Ok(Self::Fcfs),
            "sjf" => Ok(Self::Sjf),
            "priority" => Ok(Self::Priority),
            _ => Err(ParseDisciplineError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        for d in Discipline::ALL {
            assert_eq!(d.to_string().parse::<Discipline>(), Ok(d));
        }
        assert_eq!("SJF".parse::<Discipline>(), Ok(Discipline::Sjf));
        assert_eq!(" Priority ".parse::<Discipline>(), Ok(Discipline::Priority));
        assert!("rr".parse::<Discipline>().is_err());
    }

    #[test]
    fn test_labels() {
        assert_eq!(Discipline::Fcfs.label(), "FCFS");
        assert_eq!(Discipline::Priority.label(), "PRIORITY");
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Discipline::Sjf).unwrap();
        assert_eq!(json, "\"sjf\"");
        let back: Discipline = serde_json::from_str("\"priority\"").unwrap();
        assert_eq!(back, Discipline::Priority);
    }
}
