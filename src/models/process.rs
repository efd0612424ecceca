//! Process model.
//!
//! A process is a unit of CPU work known before the simulation starts:
//! it becomes ready at its arrival time and needs `burst` time units of
//! uninterrupted CPU service.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

use serde::{Deserialize, Serialize};

/// A process to be scheduled.
///
/// # Time Representation
/// Times are abstract integer units relative to t=0. The consumer decides
/// what a unit means (ms, ticks, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier (e.g. `"P1"`).
    #[serde(rename = "pid")]
    pub id: String,
    /// Time at which the process becomes ready.
    pub arrival: i64,
    /// Required CPU service time.
    pub burst: i64,
}

impl Process {
    /// Creates a new process.
    pub fn new(id: impl Into<String>, arrival: i64, burst: i64) -> Self {
        Self {
            id: id.into(),
            arrival,
            burst,
        }
    }

    /// Creates a process with the conventional id for its 0-based input
    /// position (`P1`, `P2`, ...).
    pub fn at_position(index: usize, arrival: i64, burst: i64) -> Self {
        Self::new(default_id(index), arrival, burst)
    }

    /// Whether the process has arrived by `time`.
    #[inline]
    pub fn is_ready_at(&self, time: i64) -> bool {
        self.arrival <= time
    }
}

/// Conventional id for the process at 0-based input position `index`.
pub fn default_id(index: usize) -> String {
    format!("P{}", index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_new() {
        let p = Process::new("A", 3, 7);
        assert_eq!(p.id, "A");
        assert_eq!(p.arrival, 3);
        assert_eq!(p.burst, 7);
    }

    #[test]
    fn test_default_ids_are_one_based() {
        assert_eq!(default_id(0), "P1");
        assert_eq!(default_id(9), "P10");
        assert_eq!(Process::at_position(1, 0, 4).id, "P2");
    }

    #[test]
    fn test_is_ready_at() {
        let p = Process::new("P1", 5, 1);
        assert!(!p.is_ready_at(4));
        assert!(p.is_ready_at(5));
        assert!(p.is_ready_at(6));
    }

    #[test]
    fn test_serde_field_names() {
        let p = Process::new("P1", 0, 5);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"{"pid":"P1","arrival":0,"burst":5}"#);
    }
}
