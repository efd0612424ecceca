//! Report rendering.
//!
//! Turns a finished [`Simulation`] into either a human-readable console
//! report (Gantt chart, process table, averages) or a JSON document with
//! the field names expected by structured consumers. All aggregate figures
//! are shown with two decimals.

mod json;
mod text;

pub use json::{render_json, JsonReport};
pub use text::{render_text, TextReport};

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use crate::error::Result;
use crate::scheduler::Simulation;

/// Report encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Console report.
    #[default]
    Text,
    /// JSON document.
    Json,
}

impl OutputFormat {
    /// Canonical name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("invalid output format '{s}'. Valid: text, json")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Renders `simulation` in `format` and writes it to `out`.
pub fn write_report<W: Write>(format: OutputFormat, simulation: &Simulation, mut out: W) -> Result<()> {
    match format {
        OutputFormat::Text => write!(out, "{}", TextReport::new(simulation))?,
        OutputFormat::Json => {
            let mut rendered = render_json(simulation)?;
            rendered.push('\n');
            out.write_all(rendered.as_bytes())?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Rounds to two decimals, the precision used by every report.
pub(crate) fn two_decimals(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
