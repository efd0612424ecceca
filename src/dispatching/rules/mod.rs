//! Built-in dispatching rules.
//!
//! # Score Convention
//! All rules return lower scores for higher priority processes.
//!
//! # References
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

use super::{DispatchingRule, RuleScore};
use crate::models::Process;

/// Shortest Processing Time.
///
/// Prioritizes processes with shorter bursts. Minimizes average waiting
/// time among the processes ready at a decision point.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on single machine.
#[derive(Debug, Clone, Copy)]
pub struct Spt;

impl DispatchingRule for Spt {
    fn name(&self) -> &'static str {
        "SPT"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        process.burst
    }

    fn description(&self) -> &'static str {
        "Shortest Processing Time"
    }
}

/// First In First Out.
///
/// Prioritizes processes by arrival time.
#[derive(Debug, Clone, Copy)]
pub struct Fifo;

impl DispatchingRule for Fifo {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        process.arrival
    }

    fn description(&self) -> &'static str {
        "First In First Out"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spt() {
        let short = Process::new("short", 0, 1);
        let long = Process::new("long", 0, 5);
        assert!(Spt.evaluate(&short) < Spt.evaluate(&long));
        assert_eq!(Spt.description(), "Shortest Processing Time");
    }

    #[test]
    fn test_fifo() {
        let first = Process::new("first", 1, 2);
        let second = Process::new("second", 3, 2);
        assert!(Fifo.evaluate(&first) < Fifo.evaluate(&second));
        assert_eq!(Fifo.name(), "FIFO");
    }
}
