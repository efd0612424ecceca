//! Non-preemptive Shortest-Job-First CPU scheduling simulator.
//!
//! Simulates a single CPU over a fixed, fully known set of processes and
//! produces the execution timeline (idle gaps included), per-process
//! waiting/turnaround times, and aggregate metrics.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `TimelineSlot`, `Timeline`,
//!   `ProcessResult`, `Schedule`
//! - **`dispatching`**: Dispatching rules (SPT, FIFO) and the rule engine
//!   that turns them into one total order
//! - **`scheduler`**: The SJF pass, KPI evaluation, and `simulate`
//! - **`validation`**: Input integrity checks (count bound, ids, times)
//! - **`source`**: Process sources (interactive prompts, JSON)
//! - **`report`**: Text and JSON report rendering
//! - **`config`**, **`error`**, **`telemetry`**: Limits, error type, logging
//!   setup
//!
//! # Example
//!
//! ```
//! use sjf_schedule::config::SimulatorConfig;
//! use sjf_schedule::models::Process;
//! use sjf_schedule::scheduler::simulate;
//!
//! let processes = vec![
//!     Process::new("P1", 0, 8),
//!     Process::new("P2", 1, 4),
//!     Process::new("P3", 2, 9),
//!     Process::new("P4", 3, 5),
//! ];
//! let sim = simulate(&processes, &SimulatorConfig::default()).unwrap();
//! assert_eq!(sim.schedule.dispatch_order(), vec!["P1", "P2", "P4", "P3"]);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod config;
pub mod dispatching;
pub mod error;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod source;
pub mod telemetry;
pub mod validation;

pub use error::{Result, SimulationError};
