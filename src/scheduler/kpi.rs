//! Schedule quality metrics (KPIs).
//!
//! Computes aggregate performance indicators from a completed schedule.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting | Σ(start − arrival) / n |
//! | Avg Turnaround | Σ(completion − arrival) / n |
//! | CPU Utilization | 100 × busy / (last end − first start) |
//! | Throughput | n / (last end − first start) |
//! | Makespan | End of the last slot |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2:
//! Scheduling Criteria

use serde::Serialize;

use crate::error::{Result, SimulationError};
use crate::models::{ProcessResult, Schedule, Timeline};

/// Schedule performance indicators.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleKpi {
    /// Mean waiting time.
    #[serde(rename = "avgWaitingTime")]
    pub avg_waiting: f64,
    /// Mean turnaround time.
    #[serde(rename = "avgTurnaroundTime")]
    pub avg_turnaround: f64,
    /// Busy share of the observed span, in percent (0.0..=100.0).
    pub cpu_utilization: f64,
    /// Longest waiting time of any process.
    pub max_waiting: i64,
    /// Completed processes per time unit over the observed span.
    pub throughput: f64,
    /// End of the last slot.
    pub makespan: i64,
    /// Time spent running processes.
    pub busy_time: i64,
    /// Time the CPU sat idle inside the span.
    pub idle_time: i64,
}

impl ScheduleKpi {
    /// Computes KPIs from a completed schedule.
    pub fn calculate(schedule: &Schedule) -> Result<Self> {
        Self::from_parts(&schedule.results, &schedule.timeline)
    }

    /// Computes KPIs from results and timeline.
    ///
    /// # Errors
    /// `NoResults` if there are no results, `EmptyTimeline` if the
    /// timeline has no slots, `TimeOverflow` if a waiting or turnaround
    /// total does not fit in `i64`.
    pub fn from_parts(results: &[ProcessResult], timeline: &Timeline) -> Result<Self> {
        if results.is_empty() {
            return Err(SimulationError::NoResults);
        }
        if timeline.is_empty() {
            return Err(SimulationError::EmptyTimeline {
                processes: results.len(),
            });
        }

        let n = results.len() as f64;
        let (total_waiting, total_turnaround) = totals(results)?;
        let max_waiting = results.iter().map(|r| r.waiting).max().unwrap_or(0);

        let span = timeline.span();
        let busy_time = timeline.busy_time();

        // Zero span cannot occur with positive bursts
        let (cpu_utilization, throughput) = if span == 0 {
            (0.0, 0.0)
        } else {
            (
                100.0 * busy_time as f64 / span as f64,
                n / span as f64,
            )
        };

        Ok(Self {
            avg_waiting: total_waiting as f64 / n,
            avg_turnaround: total_turnaround as f64 / n,
            cpu_utilization,
            max_waiting,
            throughput,
            makespan: timeline.last_end().unwrap_or(0),
            busy_time,
            idle_time: timeline.idle_time(),
        })
    }
}

/// Waiting and turnaround totals; names the process at which a sum overflows.
fn totals(results: &[ProcessResult]) -> Result<(i64, i64)> {
    results.iter().try_fold((0i64, 0i64), |(waiting, turnaround), r| {
        match (
            waiting.checked_add(r.waiting),
            turnaround.checked_add(r.turnaround),
        ) {
            (Some(w), Some(t)) => Ok((w, t)),
            _ => Err(SimulationError::TimeOverflow { id: r.id.clone() }),
        }
    })
}
