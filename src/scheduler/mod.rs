//! SJF scheduling and KPI evaluation.
//!
//! # Algorithm
//!
//! `SjfScheduler` runs a single non-preemptive pass: at every decision
//! point it dispatches the ready process with the smallest burst (ties by
//! arrival, then id) and inserts one idle slot per gap when nothing is
//! ready.
//!
//! # KPI
//!
//! `ScheduleKpi` computes average waiting time, average turnaround time,
//! and CPU utilization over the observed span.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3-4

mod kpi;
mod sjf;

pub use kpi::ScheduleKpi;
pub use sjf::SjfScheduler;

use crate::config::SimulatorConfig;
use crate::error::Result;
use crate::models::{Process, Schedule};

/// Output of one complete simulation run.
#[derive(Debug, Clone, PartialEq)]
pub struct Simulation {
    /// Timeline and per-process results.
    pub schedule: Schedule,
    /// Aggregate metrics.
    pub kpi: ScheduleKpi,
}

/// Schedules `processes` and computes KPIs in one step.
///
/// # Example
///
/// ```
/// use sjf_schedule::config::SimulatorConfig;
/// use sjf_schedule::models::Process;
/// use sjf_schedule::scheduler::simulate;
///
/// let processes = vec![Process::new("P1", 0, 3), Process::new("P2", 5, 2)];
/// let sim = simulate(&processes, &SimulatorConfig::default()).unwrap();
///
/// assert!((sim.kpi.cpu_utilization - 500.0 / 7.0).abs() < 1e-10);
/// ```
pub fn simulate(processes: &[Process], config: &SimulatorConfig) -> Result<Simulation> {
    let schedule = SjfScheduler::new()
        .with_max_processes(config.max_processes)
        .schedule(processes)?;
    let kpi = ScheduleKpi::calculate(&schedule)?;
    Ok(Simulation { schedule, kpi })
}
