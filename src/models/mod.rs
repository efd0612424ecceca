//! Scheduling domain models.
//!
//! Input and output types of a single-CPU simulation run.
//!
//! | Type | Role |
//! |------|------|
//! | `Process` | Input: id, arrival, burst |
//! | `TimelineSlot` / `Timeline` | Output: Gantt chart, idle gaps included |
//! | `ProcessResult` | Output: start, completion, waiting, turnaround |
//! | `Schedule` | Output: timeline + results of one run |

mod process;
mod result;
mod schedule;
mod timeline;

pub use process::{default_id, Process};
pub use result::ProcessResult;
pub use schedule::Schedule;
pub use timeline::{Occupant, Timeline, TimelineSlot, IDLE_LABEL};
