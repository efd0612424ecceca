//! Process sources.
//!
//! A source turns some external representation into the process list fed
//! to the scheduler. Two interchangeable adapters are provided:
//!
//! - [`InteractiveSource`]: console prompts, one number per answer
//! - [`JsonSource`]: a structured document such as the one posted by a web
//!   front end
//!
//! Sources only build the list. Semantic checks (burst > 0, unique ids,
//! count bound) belong to [`crate::validation`]; a source never fills in a
//! missing required field.

mod interactive;
mod json;

pub use interactive::InteractiveSource;
pub use json::JsonSource;

use std::fmt;
use std::str::FromStr;

use crate::error::Result;
use crate::models::Process;

/// Input encoding selected by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputFormat {
    /// Console prompts.
    #[default]
    Interactive,
    /// JSON document.
    Json,
}

impl InputFormat {
    /// Canonical name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Interactive => "interactive",
            Self::Json => "json",
        }
    }
}

impl FromStr for InputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "interactive" | "prompt" => Ok(Self::Interactive),
            "json" => Ok(Self::Json),
            _ => Err(format!("invalid input format '{s}'. Valid: interactive, json")),
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Something that can produce the processes for one run.
pub trait ProcessSource {
    /// Source name, for logs.
    fn name(&self) -> &'static str;

    /// Reads the complete process list.
    ///
    /// # Errors
    /// `MalformedInput` when the input cannot be turned into processes,
    /// `Io` when the underlying reader fails.
    fn read_processes(&mut self) -> Result<Vec<Process>>;
}
