//! Schedule (solution) model.
//!
//! A schedule is the complete output of one scheduling pass: the CPU
//! timeline and one result per input process.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

use serde::{Deserialize, Serialize};

use super::{ProcessResult, Timeline, TimelineSlot};

/// A complete single-CPU schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// CPU slots in start order, idle gaps included.
    pub timeline: Timeline,
    /// One result per process, in arrival order (ties by id).
    pub results: Vec<ProcessResult>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a dispatch: appends the run slot and the result.
    pub fn add_dispatch(&mut self, result: ProcessResult) {
        self.timeline
            .push(TimelineSlot::running(result.id.clone(), result.start, result.completion));
        self.results.push(result);
    }

    /// Records an idle gap.
    pub fn add_idle(&mut self, start: i64, end: i64) {
        self.timeline.push(TimelineSlot::idle(start, end));
    }

    /// Makespan: end of the last slot (0 when empty).
    pub fn makespan(&self) -> i64 {
        self.timeline.last_end().unwrap_or(0)
    }

    /// Finds the result for a process.
    pub fn result_for(&self, id: &str) -> Option<&ProcessResult> {
        self.results.iter().find(|r| r.id == id)
    }

    /// Puts results in arrival order, ties by id.
    pub(crate) fn sort_results(&mut self) {
        self.results
            .sort_by(|a, b| (a.arrival, &a.id).cmp(&(b.arrival, &b.id)));
    }

    /// Number of results.
    pub fn result_count(&self) -> usize {
        self.results.len()
    }

    /// Process ids in the order they were dispatched.
    pub fn dispatch_order(&self) -> Vec<&str> {
        self.timeline.dispatch_order()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Process;

    fn sample_schedule() -> Schedule {
        let mut s = Schedule::new();
        s.add_dispatch(ProcessResult::dispatched(&Process::new("P1", 0, 3), 0).unwrap());
        s.add_idle(3, 5);
        s.add_dispatch(ProcessResult::dispatched(&Process::new("P2", 5, 2), 5).unwrap());
        s
    }

    #[test]
    fn test_schedule_makespan() {
        assert_eq!(sample_schedule().makespan(), 7);
        assert_eq!(Schedule::new().makespan(), 0);
    }

    #[test]
    fn test_add_dispatch_records_slot() {
        let s = sample_schedule();
        assert_eq!(s.timeline.len(), 3);
        assert_eq!(s.result_count(), 2);
        let slot = s.timeline.slot_for_process("P2").unwrap();
        assert_eq!((slot.start, slot.end), (5, 7));
    }

    #[test]
    fn test_result_for() {
        let s = sample_schedule();
        assert_eq!(s.result_for("P1").map(|r| r.completion), Some(3));
        assert!(s.result_for("P9").is_none());
    }

    #[test]
    fn test_sort_results_by_arrival() {
        let mut s = Schedule::new();
        s.add_dispatch(ProcessResult::dispatched(&Process::new("B", 1, 1), 0).unwrap());
        s.add_dispatch(ProcessResult::dispatched(&Process::new("A", 1, 1), 1).unwrap());
        s.add_dispatch(ProcessResult::dispatched(&Process::new("C", 0, 1), 2).unwrap());
        s.sort_results();
        let ids: Vec<&str> = s.results.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["C", "A", "B"]);
        // Timeline keeps dispatch order
        assert_eq!(s.dispatch_order(), vec!["B", "A", "C"]);
    }

    #[test]
    fn test_dispatch_order() {
        assert_eq!(sample_schedule().dispatch_order(), vec!["P1", "P2"]);
    }
}
