//! Non-preemptive Shortest-Job-First scheduler.
//!
//! # Algorithm
//!
//! 1. Order processes by (arrival, id) once, for deterministic scanning.
//! 2. Start the clock at the earliest arrival.
//! 3. Collect the ready set (undispatched, arrived by now).
//! 4. Empty ready set: emit one idle slot up to the next arrival and jump.
//! 5. Otherwise pick the winner by the rule engine (burst, arrival, id)
//!    and run it to completion.
//!
//! # Complexity
//! O(n²) where n = processes.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.2

use crate::config::DEFAULT_MAX_PROCESSES;
use crate::dispatching::RuleEngine;
use crate::error::{Result, SimulationError};
use crate::models::{Process, ProcessResult, Schedule};
use crate::validation::validate_processes;

/// Non-preemptive single-CPU scheduler driven by a rule engine.
///
/// Uses [`RuleEngine::sjf`] by default. The scheduler performs no I/O and
/// emits no log events.
///
/// # Example
///
/// ```
/// use sjf_schedule::models::Process;
/// use sjf_schedule::scheduler::SjfScheduler;
///
/// let processes = vec![Process::new("P1", 0, 3), Process::new("P2", 5, 2)];
/// let schedule = SjfScheduler::new().schedule(&processes).unwrap();
///
/// assert_eq!(schedule.timeline.len(), 3); // P1, IDLE, P2
/// assert_eq!(schedule.makespan(), 7);
/// ```
#[derive(Debug, Clone)]
pub struct SjfScheduler {
    rule_engine: RuleEngine,
    max_processes: usize,
}

impl SjfScheduler {
    /// Creates a scheduler with the SJF rule chain and the default limit.
    pub fn new() -> Self {
        Self {
            rule_engine: RuleEngine::sjf(),
            max_processes: DEFAULT_MAX_PROCESSES,
        }
    }

    /// Sets the maximum accepted process count.
    pub fn with_max_processes(mut self, max_processes: usize) -> Self {
        self.max_processes = max_processes;
        self
    }

    /// Replaces the selection rules.
    ///
    /// An engine without rules dispatches ready processes first-come
    /// first-served.
    pub fn with_rule_engine(mut self, engine: RuleEngine) -> Self {
        self.rule_engine = engine;
        self
    }

    /// Maximum accepted process count.
    pub fn max_processes(&self) -> usize {
        self.max_processes
    }

    /// Validates the processes and runs one scheduling pass.
    ///
    /// # Errors
    /// Any validation error for the input, `TimeOverflow` if a completion
    /// time does not fit in `i64`, or `EmptyTimeline` if the pass produced
    /// no slot.
    pub fn schedule(&self, processes: &[Process]) -> Result<Schedule> {
        validate_processes(processes, self.max_processes)?;

        let mut order: Vec<&Process> = processes.iter().collect();
        order.sort_by(|a, b| (a.arrival, &a.id).cmp(&(b.arrival, &b.id)));

        let mut current_time = match order.first() {
            Some(first) => first.arrival,
            None => {
                return Err(SimulationError::InvalidCount {
                    count: 0,
                    max: self.max_processes,
                })
            }
        };

        let mut dispatched = vec![false; order.len()];
        let mut remaining = order.len();
        let mut schedule = Schedule::new();

        while remaining > 0 {
            let ready: Vec<usize> = (0..order.len())
                .filter(|&i| !dispatched[i] && order[i].is_ready_at(current_time))
                .collect();
            let candidates: Vec<&Process> = ready.iter().map(|&i| order[i]).collect();

            match self.rule_engine.select_best(&candidates) {
                Some(pick) => {
                    let idx = ready[pick];
                    let result = ProcessResult::dispatched(order[idx], current_time)?;
                    current_time = result.completion;
                    schedule.add_dispatch(result);
                    dispatched[idx] = true;
                    remaining -= 1;
                }
                None => {
                    let next_arrival = order
                        .iter()
                        .zip(&dispatched)
                        .filter(|(_, done)| !**done)
                        .map(|(p, _)| p.arrival)
                        .min();

                    match next_arrival {
                        Some(next) => {
                            schedule.add_idle(current_time, next);
                            current_time = next;
                        }
                        None => break,
                    }
                }
            }
        }

        if schedule.timeline.is_empty() {
            return Err(SimulationError::EmptyTimeline {
                processes: processes.len(),
            });
        }

        schedule.sort_results();
        Ok(schedule)
    }
}

impl Default for SjfScheduler {
    fn default() -> Self {
        Self::new()
    }
}
