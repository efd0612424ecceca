//! Rule engine for multi-level dispatching.
//!
//! Composes dispatching rules into one comparator: rules are applied in
//! sequence, each later rule only consulted on a tie, and a final
//! tie-breaker settles whatever is left.
//!
//! # Reference
//! Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

use std::cmp::Ordering;
use std::sync::Arc;

use super::{rules, DispatchingRule, RuleScore};
use crate::models::Process;

/// How ties are broken after all rules are exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TieBreaker {
    /// Leave the tie (sorting keeps input order).
    #[default]
    NextRule,
    /// Deterministic by process id (lexicographic).
    ById,
}

/// A composable rule engine for process prioritization.
///
/// # Example
/// ```
/// use sjf_schedule::dispatching::RuleEngine;
/// use sjf_schedule::models::Process;
///
/// let engine = RuleEngine::sjf();
/// let procs = vec![
///     Process::new("P2", 0, 4),
///     Process::new("P1", 0, 4),
///     Process::new("P3", 0, 1),
/// ];
/// let order: Vec<&str> = engine
///     .sort_indices(&procs)
///     .into_iter()
///     .map(|i| procs[i].id.as_str())
///     .collect();
/// assert_eq!(order, vec!["P3", "P1", "P2"]);
/// ```
#[derive(Clone)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
    tie_breaker: TieBreaker,
}

impl RuleEngine {
    /// Creates an empty rule engine.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            tie_breaker: TieBreaker::NextRule,
        }
    }

    /// Shortest-Job-First: burst, then arrival, then id.
    pub fn sjf() -> Self {
        Self::new()
            .with_rule(rules::Spt)
            .with_tie_breaker(rules::Fifo)
            .with_final_tie_breaker(TieBreaker::ById)
    }

    /// Adds a primary rule.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Adds a tie-breaking rule, consulted only when all earlier rules tie.
    pub fn with_tie_breaker<R: DispatchingRule + 'static>(self, rule: R) -> Self {
        self.with_rule(rule)
    }

    /// Sets the final tie-breaking strategy.
    pub fn with_final_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// Names of the configured rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Compares two processes: `Less` means `a` is dispatched first.
    pub fn compare(&self, a: &Process, b: &Process) -> Ordering {
        for rule in &self.rules {
            match rule.evaluate(a).cmp(&rule.evaluate(b)) {
                Ordering::Equal => continue,
                decided => return decided,
            }
        }

        // All rules tied → final tie-breaker
        match self.tie_breaker {
            TieBreaker::NextRule => Ordering::Equal,
            TieBreaker::ById => a.id.cmp(&b.id),
        }
    }

    /// Sorts processes by priority (highest priority first).
    ///
    /// Returns indices into the original slice. The sort is stable, so
    /// full ties keep input order.
    pub fn sort_indices(&self, processes: &[Process]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..processes.len()).collect();
        indices.sort_by(|&a, &b| self.compare(&processes[a], &processes[b]));
        indices
    }

    /// Returns the index of the highest-priority candidate, or `None` when
    /// there are no candidates. On a full tie the earliest candidate wins.
    pub fn select_best(&self, candidates: &[&Process]) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (i, candidate) in candidates.iter().enumerate() {
            best = match best {
                Some(b) if self.compare(candidate, candidates[b]) != Ordering::Less => Some(b),
                _ => Some(i),
            };
        }
        best
    }

    /// Evaluates a single process and returns scores from each rule.
    pub fn evaluate(&self, process: &Process) -> Vec<RuleScore> {
        self.rules.iter().map(|r| r.evaluate(process)).collect()
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .field("tie_breaker", &self.tie_breaker)
            .finish()
    }
}
