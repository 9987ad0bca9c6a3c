//! Random workload generation.
//!
//! Builds valid process sets for what-if experiments beyond the reference
//! scenario. Generation is driven entirely by the caller's RNG, so a seeded
//! RNG reproduces the same set.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::{Process, ProcessSet};

/// Display colors assigned in rotation.
const PALETTE: [&str; 8] = [
    "#3b82f6", "#22c55e", "#f97316", "#a855f7", "#ef4444", "#eab308", "#14b8a6", "#ec4899",
];

/// Bounds for generated process attributes (all inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadSpec {
    /// Latest arrival time.
    pub max_arrival: u64,
    /// Shortest burst; values below 1 are raised to 1.
    pub min_burst: u64,
    /// Longest burst.
    pub max_burst: u64,
    /// Most urgent priority value.
    pub min_priority: i32,
    /// Least urgent priority value.
    pub max_priority: i32,
}

impl Default for WorkloadSpec {
    fn default() -> Self {
        Self {
            max_arrival: 10,
            min_burst: 1,
            max_burst: 10,
            min_priority: 1,
            max_priority: 5,
        }
    }
}

/// Generates `count` processes with ids `1..=count` and names `P1`, `P2`, ...
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use u_cpusched::workload::{generate, WorkloadSpec};
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let set = generate(6, &WorkloadSpec::default(), &mut rng);
/// assert_eq!(set.len(), 6);
/// assert!(set.iter().all(|p| p.burst_time >= 1));
/// ```
pub fn generate<R: Rng>(count: usize, spec: &WorkloadSpec, rng: &mut R) -> ProcessSet {
    let min_burst = spec.min_burst.max(1);
    let max_burst = spec.max_burst.max(min_burst);
    let max_priority = spec.max_priority.max(spec.min_priority);

    let processes = (1..=count)
        .map(|n| {
            let id = u32::try_from(n).unwrap_or(u32::MAX);
            Process::new(id)
                .with_arrival(rng.random_range(0..=spec.max_arrival))
                .with_burst(rng.random_range(min_burst..=max_burst))
                .with_priority(rng.random_range(spec.min_priority..=max_priority))
                .with_color(PALETTE[(n - 1) % PALETTE.len()])
        })
        .collect();
    ProcessSet::from_trusted(processes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_processes;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_within_bounds() {
        let spec = WorkloadSpec {
            max_arrival: 20,
            min_burst: 3,
            max_burst: 7,
            min_priority: -2,
            max_priority: 2,
        };
        let mut rng = StdRng::seed_from_u64(1);
        let set = generate(50, &spec, &mut rng);

        assert_eq!(set.len(), 50);
        assert!(validate_processes(set.processes()).is_ok());
        for p in &set {
            assert!(p.arrival_time <= 20);
            assert!((3..=7).contains(&p.burst_time));
            assert!((-2..=2).contains(&p.priority));
        }
    }

    #[test]
    fn test_generate_is_reproducible() {
        let spec = WorkloadSpec::default();
        let a = generate(8, &spec, &mut StdRng::seed_from_u64(99));
        let b = generate(8, &spec, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_names_and_colors() {
        let set = generate(9, &WorkloadSpec::default(), &mut StdRng::seed_from_u64(3));
        let first = set.get(1).unwrap();
        assert_eq!(first.name, "P1");
        assert_eq!(first.color, PALETTE[0]);
        assert_eq!(set.get(9).unwrap().color, PALETTE[0]);
    }

    #[test]
    fn test_degenerate_spec_is_clamped() {
        let spec = WorkloadSpec {
            max_arrival: 0,
            min_burst: 0,
            max_burst: 0,
            min_priority: 4,
            max_priority: 1,
        };
        let set = generate(5, &spec, &mut StdRng::seed_from_u64(5));
        for p in &set {
            assert_eq!(p.arrival_time, 0);
            assert_eq!(p.burst_time, 1);
            assert_eq!(p.priority, 4);
        }
    }

    #[test]
    fn test_generate_zero() {
        let set = generate(0, &WorkloadSpec::default(), &mut StdRng::seed_from_u64(0));
        assert!(set.is_empty());
    }
}
