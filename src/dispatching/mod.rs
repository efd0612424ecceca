//! Dispatching rules and rule engine.
//!
//! A dispatching rule scores a ready process; the rule engine chains rules
//! into a single total order used to pick the next process to run.
//! Shortest-Job-First is the chain `SPT → FIFO → by id`.
//!
//! # Usage
//!
//! ```
//! use sjf_schedule::dispatching::{rules, RuleEngine, TieBreaker};
//! use sjf_schedule::models::Process;
//!
//! let engine = RuleEngine::new()
//!     .with_rule(rules::Spt)
//!     .with_tie_breaker(rules::Fifo)
//!     .with_final_tie_breaker(TieBreaker::ById);
//!
//! let a = Process::new("A", 0, 4);
//! let b = Process::new("B", 0, 2);
//! assert_eq!(engine.select_best(&[&a, &b]), Some(1));
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

mod engine;
pub mod rules;

pub use engine::{RuleEngine, TieBreaker};

use crate::models::Process;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = higher priority (dispatched first).
pub type RuleScore = i64;

/// A dispatching rule that evaluates process priority.
///
/// # Score Convention
/// **Lower score = higher priority.** Rules return smaller values for
/// processes that should run first.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SPT", "FIFO").
    fn name(&self) -> &'static str;

    /// Evaluates the priority of a process.
    fn evaluate(&self, process: &Process) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
