//! JSON report.

use serde::{Serialize, Serializer};

use super::two_decimals;
use crate::error::Result;
use crate::models::{ProcessResult, Timeline};
use crate::scheduler::Simulation;

/// Borrowed view of a simulation, shaped for structured consumers.
///
/// ```text
/// {
///   "timeline": [{"pid": "P1", "start": 0, "end": 3}, ...],
///   "details": [{"pid", "arrival", "burst", "startTime", "completionTime",
///                "waitingTime", "turnaroundTime"}, ...],
///   "avgWaitingTime": 0.0,
///   "avgTurnaroundTime": 2.5,
///   "cpuUtilization": 71.43
/// }
/// ```
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonReport<'a> {
    timeline: &'a Timeline,
    details: &'a [ProcessResult],
    #[serde(serialize_with = "serialize_rounded")]
    avg_waiting_time: f64,
    #[serde(serialize_with = "serialize_rounded")]
    avg_turnaround_time: f64,
    #[serde(serialize_with = "serialize_rounded")]
    cpu_utilization: f64,
}

impl<'a> JsonReport<'a> {
    /// Builds the report view.
    pub fn new(simulation: &'a Simulation) -> Self {
        Self {
            timeline: &simulation.schedule.timeline,
            details: &simulation.schedule.results,
            avg_waiting_time: simulation.kpi.avg_waiting,
            avg_turnaround_time: simulation.kpi.avg_turnaround,
            cpu_utilization: simulation.kpi.cpu_utilization,
        }
    }
}

fn serialize_rounded<S>(value: &f64, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_f64(two_decimals(*value))
}

/// Renders the simulation as pretty-printed JSON.
pub fn render_json(simulation: &Simulation) -> Result<String> {
    Ok(serde_json::to_string_pretty(&JsonReport::new(simulation))?)
}
