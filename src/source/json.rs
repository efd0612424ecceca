//! Structured JSON input.
//!
//! Accepts either a wrapped document or a bare array:
//!
//! ```text
//! {"processes": [{"pid": "P1", "arrival": 0, "burst": 5}, ...]}
//! [{"arrival": 0, "burst": 5}, ...]
//! ```
//!
//! `pid` is optional and defaults to `P{position}`; `arrival` and `burst`
//! are required integers.

use std::io::Read;

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::ProcessSource;
use crate::error::{Result, SimulationError};
use crate::models::{default_id, Process};

#[derive(Debug, Deserialize)]
struct ProcessRecord {
    pid: Option<String>,
    arrival: i64,
    burst: i64,
}

/// Reads processes from a JSON document.
#[derive(Debug)]
pub struct JsonSource<R> {
    reader: R,
}

impl<R: Read> JsonSource<R> {
    /// Creates a source over `reader`.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: Read> ProcessSource for JsonSource<R> {
    fn name(&self) -> &'static str {
        "json"
    }

    fn read_processes(&mut self) -> Result<Vec<Process>> {
        let document: Value = serde_json::from_reader(&mut self.reader)?;

        let entries = match document {
            Value::Array(entries) => entries,
            Value::Object(mut fields) => match fields.remove("processes") {
                Some(Value::Array(entries)) => entries,
                Some(_) => return Err(SimulationError::malformed("'processes' must be an array")),
                None => return Err(SimulationError::malformed("missing 'processes' array")),
            },
            _ => {
                return Err(SimulationError::malformed(
                    "expected an object or an array of processes",
                ))
            }
        };

        let mut processes = Vec::with_capacity(entries.len());
        for (index, entry) in entries.into_iter().enumerate() {
            let record: ProcessRecord = serde_json::from_value(entry).map_err(|e| {
                SimulationError::malformed(format!("process {}: {e}", index + 1))
            })?;
            let id = record.pid.unwrap_or_else(|| default_id(index));
            processes.push(Process::new(id, record.arrival, record.burst));
        }

        debug!(count = processes.len(), source = self.name(), "processes read");
        Ok(processes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(input: &str) -> Result<Vec<Process>> {
        JsonSource::new(input.as_bytes()).read_processes()
    }

    #[test]
    fn test_wrapped_document() {
        let procs = read(
            r#"{"processes": [
                {"pid": "P1", "arrival": 0, "burst": 8},
                {"pid": "P2", "arrival": 1, "burst": 4}
            ]}"#,
        )
        .unwrap();
        assert_eq!(
            procs,
            vec![Process::new("P1", 0, 8), Process::new("P2", 1, 4)]
        );
    }

    #[test]
    fn test_bare_array_with_default_ids() {
        let procs = read(r#"[{"arrival": 0, "burst": 3}, {"pid": "X", "arrival": 5, "burst": 2}, {"arrival": 6, "burst": 1}]"#)
            .unwrap();
        let ids: Vec<&str> = procs.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["P1", "X", "P3"]);
    }

    #[test]
    fn test_extra_fields_ignored() {
        let procs = read(r#"[{"pid": "P1", "arrival": 0, "burst": 3, "color": "red"}]"#).unwrap();
        assert_eq!(procs, vec![Process::new("P1", 0, 3)]);
    }

    #[test]
    fn test_missing_burst_is_malformed() {
        match read(r#"{"processes": [{"pid": "P1", "arrival": 0}]}"#) {
            Err(SimulationError::MalformedInput { reason }) => {
                assert!(reason.starts_with("process 1:"));
                assert!(reason.contains("burst"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_non_integer_field_is_malformed() {
        assert!(matches!(
            read(r#"[{"arrival": "zero", "burst": 3}]"#),
            Err(SimulationError::MalformedInput { .. })
        ));
        assert!(matches!(
            read(r#"[{"arrival": 0, "burst": 2.5}]"#),
            Err(SimulationError::MalformedInput { .. })
        ));
    }

    #[test]
    fn test_document_shape_errors() {
        assert!(matches!(
            read(r#"{"jobs": []}"#),
            Err(SimulationError::MalformedInput { ref reason }) if reason.contains("missing 'processes'")
        ));
        assert!(matches!(
            read(r#"{"processes": 3}"#),
            Err(SimulationError::MalformedInput { .. })
        ));
        assert!(matches!(read("42"), Err(SimulationError::MalformedInput { .. })));
        assert!(matches!(read("{not json"), Err(SimulationError::MalformedInput { .. })));
    }

    #[test]
    fn test_empty_list_is_read_as_empty() {
        // Count validation happens in the core
        assert!(read(r#"{"processes": []}"#).unwrap().is_empty());
    }
}
