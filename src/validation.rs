//! Input validation for scheduling runs.
//!
//! Checks the structural constraints the scheduler relies on before any
//! time is simulated:
//! - Process count within `1..=max`
//! - Non-empty, unique ids that do not collide with the idle label
//! - Non-negative arrival times
//! - Positive burst times
//!
//! The count is checked first; after that processes are checked in input
//! order and the first offending one is reported.

use std::collections::HashSet;

use crate::error::{Result, SimulationError};
use crate::models::{Process, IDLE_LABEL};

/// Validates a process list against a maximum count.
///
/// # Returns
/// `Ok(())` if all checks pass, otherwise the error for the first offending
/// process.
pub fn validate_processes(processes: &[Process], max_processes: usize) -> Result<()> {
    validate_count(processes.len(), max_processes)?;

    let mut ids = HashSet::new();
    for (index, process) in processes.iter().enumerate() {
        if process.id.is_empty() {
            return Err(SimulationError::EmptyId { index });
        }
        if process.id == IDLE_LABEL {
            return Err(SimulationError::ReservedId {
                id: process.id.clone(),
            });
        }
        if !ids.insert(process.id.as_str()) {
            return Err(SimulationError::DuplicateId {
                id: process.id.clone(),
            });
        }
        if process.arrival < 0 {
            return Err(SimulationError::NegativeArrival {
                id: process.id.clone(),
                arrival: process.arrival,
            });
        }
        if process.burst <= 0 {
            return Err(SimulationError::NonPositiveBurst {
                id: process.id.clone(),
                burst: process.burst,
            });
        }
    }

    Ok(())
}

/// Checks a process count against `1..=max_processes`.
pub fn validate_count(count: usize, max_processes: usize) -> Result<()> {
    if count == 0 || count > max_processes {
        return Err(SimulationError::InvalidCount {
            count,
            max: max_processes,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_processes() -> Vec<Process> {
        vec![
            Process::new("P1", 0, 8),
            Process::new("P2", 1, 4),
            Process::new("P3", 2, 9),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_processes(&sample_processes(), 100).is_ok());
    }

    #[test]
    fn test_empty_list() {
        let err = validate_processes(&[], 100).unwrap_err();
        assert!(matches!(err, SimulationError::InvalidCount { count: 0, max: 100 }));
    }

    #[test]
    fn test_too_many_processes() {
        let err = validate_processes(&sample_processes(), 2).unwrap_err();
        assert!(matches!(err, SimulationError::InvalidCount { count: 3, max: 2 }));
    }

    #[test]
    fn test_zero_burst() {
        let mut procs = sample_processes();
        procs[1].burst = 0;
        let err = validate_processes(&procs, 100).unwrap_err();
        match err {
            SimulationError::NonPositiveBurst { id, burst } => {
                assert_eq!(id, "P2");
                assert_eq!(burst, 0);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_negative_burst() {
        let procs = vec![Process::new("P1", 0, -3)];
        assert!(matches!(
            validate_processes(&procs, 100),
            Err(SimulationError::NonPositiveBurst { burst: -3, .. })
        ));
    }

    #[test]
    fn test_negative_arrival() {
        let procs = vec![Process::new("P1", -1, 3)];
        assert!(matches!(
            validate_processes(&procs, 100),
            Err(SimulationError::NegativeArrival { arrival: -1, .. })
        ));
    }

    #[test]
    fn test_duplicate_id() {
        let procs = vec![Process::new("P1", 0, 3), Process::new("P1", 1, 2)];
        assert!(matches!(
            validate_processes(&procs, 100),
            Err(SimulationError::DuplicateId { ref id }) if id == "P1"
        ));
    }

    #[test]
    fn test_empty_and_reserved_ids() {
        let procs = vec![Process::new("P1", 0, 3), Process::new("", 0, 3)];
        assert!(matches!(
            validate_processes(&procs, 100),
            Err(SimulationError::EmptyId { index: 1 })
        ));

        let procs = vec![Process::new(IDLE_LABEL, 0, 3)];
        assert!(matches!(
            validate_processes(&procs, 100),
            Err(SimulationError::ReservedId { .. })
        ));
    }

    #[test]
    fn test_first_offender_reported() {
        let procs = vec![
            Process::new("P1", 0, 3),
            Process::new("P2", 0, 0),
            Process::new("P3", -5, 0),
        ];
        assert!(matches!(
            validate_processes(&procs, 100),
            Err(SimulationError::NonPositiveBurst { ref id, .. }) if id == "P2"
        ));
    }
}
