//! Simulation errors.
//!
//! Every failure is fatal to the run: nothing is retried and no partial
//! timeline or report is produced. Input errors carry the offending process
//! id (or position) so the caller can point at the bad record.

use std::io;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SimulationError>;

/// Errors raised while reading, validating, scheduling, or reporting.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SimulationError {
    /// Process count is zero or exceeds the configured maximum.
    #[error("invalid process count {count} (1-{max} allowed)")]
    InvalidCount { count: usize, max: usize },

    /// A process requires no CPU time (or a negative amount).
    #[error("process '{id}' has non-positive burst time {burst}")]
    NonPositiveBurst { id: String, burst: i64 },

    /// A process arrives before t=0.
    #[error("process '{id}' has negative arrival time {arrival}")]
    NegativeArrival { id: String, arrival: i64 },

    /// Two processes share the same id.
    #[error("duplicate process id '{id}'")]
    DuplicateId { id: String },

    /// A process has an empty id.
    #[error("process at position {index} has an empty id")]
    EmptyId { index: usize },

    /// A process uses the id reserved for idle timeline slots.
    #[error("process id '{id}' is reserved for idle slots")]
    ReservedId { id: String },

    /// A completion time or a metric total does not fit in `i64`.
    #[error("time overflow at process '{id}'")]
    TimeOverflow { id: String },

    /// The input could not be turned into a process list.
    #[error("malformed input: {reason}")]
    MalformedInput { reason: String },

    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The scheduler finished without producing a single slot.
    #[error("internal error: empty timeline after scheduling {processes} processes")]
    EmptyTimeline { processes: usize },

    /// Metrics were requested for a schedule without process results.
    #[error("internal error: schedule has no process results")]
    NoResults,
}

impl SimulationError {
    /// Creates a malformed input error.
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            reason: reason.into(),
        }
    }

    /// Whether the error was caused by the caller's data rather than by
    /// an internal invariant violation.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, Self::EmptyTimeline { .. } | Self::NoResults)
    }

    /// Process exit code for command-line front ends.
    ///
    /// | code | meaning |
    /// |------|---------|
    /// | 1 | validation failure |
    /// | 2 | malformed input or I/O failure |
    /// | 3 | internal invariant violation |
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::InvalidCount { .. }
            | Self::NonPositiveBurst { .. }
            | Self::NegativeArrival { .. }
            | Self::DuplicateId { .. }
            | Self::EmptyId { .. }
            | Self::ReservedId { .. }
            | Self::TimeOverflow { .. } => 1,
            Self::MalformedInput { .. } | Self::Io(_) => 2,
            Self::EmptyTimeline { .. } | Self::NoResults => 3,
        }
    }
}

impl From<serde_json::Error> for SimulationError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            Self::Io(err.into())
        } else {
            Self::malformed(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_offender() {
        let err = SimulationError::NonPositiveBurst {
            id: "P3".into(),
            burst: 0,
        };
        assert_eq!(
            err.to_string(),
            "process 'P3' has non-positive burst time 0"
        );

        let err = SimulationError::InvalidCount { count: 0, max: 100 };
        assert_eq!(err.to_string(), "invalid process count 0 (1-100 allowed)");

        let err = SimulationError::TimeOverflow { id: "P7".into() };
        assert_eq!(err.to_string(), "time overflow at process 'P7'");
        assert!(!SimulationError::NoResults.to_string().contains("allowed"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            SimulationError::InvalidCount { count: 101, max: 100 }.exit_code(),
            1
        );
        assert_eq!(SimulationError::malformed("missing burst").exit_code(), 2);
        assert_eq!(
            SimulationError::Io(io::Error::new(io::ErrorKind::Other, "closed")).exit_code(),
            2
        );
        assert_eq!(SimulationError::EmptyTimeline { processes: 1 }.exit_code(), 3);
        assert_eq!(SimulationError::NoResults.exit_code(), 3);
        assert_eq!(
            SimulationError::TimeOverflow { id: "P1".into() }.exit_code(),
            1
        );
    }

    #[test]
    fn test_input_error_classification() {
        assert!(SimulationError::DuplicateId { id: "P1".into() }.is_input_error());
        assert!(!SimulationError::EmptyTimeline { processes: 2 }.is_input_error());
        assert!(!SimulationError::NoResults.is_input_error());
        assert!(SimulationError::TimeOverflow { id: "P2".into() }.is_input_error());
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<i64>("\"x\"").unwrap_err();
        let err: SimulationError = json_err.into();
        assert!(matches!(err, SimulationError::MalformedInput { .. }));
    }
}
