//! Per-process scheduling result.

use serde::{Deserialize, Serialize};

use super::Process;
use crate::error::{Result, SimulationError};

/// Outcome of dispatching one process.
///
/// SJF here is non-preemptive, so every process runs in exactly one
/// contiguous slot starting at `start`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessResult {
    /// Process identifier.
    #[serde(rename = "pid")]
    pub id: String,
    /// Arrival time.
    pub arrival: i64,
    /// CPU service time.
    pub burst: i64,
    /// Dispatch time.
    #[serde(rename = "startTime")]
    pub start: i64,
    /// `start + burst`.
    #[serde(rename = "completionTime")]
    pub completion: i64,
    /// `start - arrival`.
    #[serde(rename = "waitingTime")]
    pub waiting: i64,
    /// `completion - arrival`.
    #[serde(rename = "turnaroundTime")]
    pub turnaround: i64,
}

impl ProcessResult {
    /// Result for `process` dispatched at `start`.
    ///
    /// # Errors
    /// `TimeOverflow` if `start + burst` does not fit in `i64`.
    pub fn dispatched(process: &Process, start: i64) -> Result<Self> {
        let completion = start.checked_add(process.burst).ok_or_else(|| {
            SimulationError::TimeOverflow {
                id: process.id.clone(),
            }
        })?;
        Ok(Self {
            id: process.id.clone(),
            arrival: process.arrival,
            burst: process.burst,
            start,
            completion,
            waiting: start - process.arrival,
            turnaround: completion - process.arrival,
        })
    }

    /// Whether `turnaround == waiting + burst` and `waiting >= 0`.
    pub fn is_consistent(&self) -> bool {
        self.waiting >= 0
            && self.turnaround == self.waiting + self.burst
            && self.completion == self.start + self.burst
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatched_derivations() {
        let p = Process::new("P3", 2, 9);
        let r = ProcessResult::dispatched(&p, 18).unwrap();
        assert_eq!(r.completion, 27);
        assert_eq!(r.waiting, 16);
        assert_eq!(r.turnaround, 25);
        assert!(r.is_consistent());
    }

    #[test]
    fn test_completion_overflow() {
        let p = Process::new("P1", i64::MAX - 1, 2);
        let err = ProcessResult::dispatched(&p, i64::MAX - 1).unwrap_err();
        assert!(matches!(err, SimulationError::TimeOverflow { ref id } if id == "P1"));

        let r = ProcessResult::dispatched(&Process::new("P1", i64::MAX - 1, 1), i64::MAX - 1)
            .unwrap();
        assert_eq!(r.completion, i64::MAX);
        assert!(r.is_consistent());
    }

    #[test]
    fn test_inconsistent_result() {
        let mut r = ProcessResult::dispatched(&Process::new("P1", 5, 2), 5).unwrap();
        assert!(r.is_consistent());
        r.waiting = -1;
        assert!(!r.is_consistent());
    }

    #[test]
    fn test_serde_field_names() {
        let r = ProcessResult::dispatched(&Process::new("P1", 0, 5), 0).unwrap();
        let value = serde_json::to_value(&r).unwrap();
        assert_eq!(value["pid"], "P1");
        assert_eq!(value["startTime"], 0);
        assert_eq!(value["completionTime"], 5);
        assert_eq!(value["waitingTime"], 0);
        assert_eq!(value["turnaroundTime"], 5);
    }
}
