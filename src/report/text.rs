//! Console report.

use std::fmt;

use crate::scheduler::Simulation;

/// Borrowed view of a simulation, rendered as the console report through
/// [`fmt::Display`].
///
/// ```text
/// Gantt Chart:
/// | P1 (0 -> 3) | IDLE (3 -> 5) | P2 (5 -> 7) |
///
/// Process Details:
/// PID  Arr  Burst  Start  Comp  Wait  Turn     (tab separated)
/// ...
///
/// Average Waiting Time: 0.00
/// Average Turnaround Time: 2.50
/// CPU Utilization: 71.43%
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TextReport<'a> {
    simulation: &'a Simulation,
}

impl<'a> TextReport<'a> {
    /// Builds the report view.
    pub fn new(simulation: &'a Simulation) -> Self {
        Self { simulation }
    }
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let schedule = &self.simulation.schedule;
        let kpi = &self.simulation.kpi;

        writeln!(f, "Gantt Chart:")?;
        for slot in schedule.timeline.slots() {
            write!(f, "| {} ({} -> {}) ", slot.occupant.as_str(), slot.start, slot.end)?;
        }
        writeln!(f, "|")?;

        writeln!(f)?;
        writeln!(f, "Process Details:")?;
        writeln!(f, "PID\tArr\tBurst\tStart\tComp\tWait\tTurn")?;
        for r in &schedule.results {
            writeln!(
                f,
                "{}\t{}\t{}\t{}\t{}\t{}\t{}",
                r.id, r.arrival, r.burst, r.start, r.completion, r.waiting, r.turnaround
            )?;
        }

        writeln!(f)?;
        writeln!(f, "Average Waiting Time: {:.2}", kpi.avg_waiting)?;
        writeln!(f, "Average Turnaround Time: {:.2}", kpi.avg_turnaround)?;
        writeln!(f, "CPU Utilization: {:.2}%", kpi.cpu_utilization)
    }
}

/// Renders the Gantt chart, the per-process table, and the averages.
pub fn render_text(simulation: &Simulation) -> String {
    TextReport::new(simulation).to_string()
}
