//! Prompt-driven console input.
//!
//! Asks for the process count, then for each process its arrival and burst
//! time. Answers are whitespace-separated integers and may be given one per
//! line or several on one line. Ids are assigned `P1..Pn` in input order.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use tracing::debug;

use super::ProcessSource;
use crate::config::DEFAULT_MAX_PROCESSES;
use crate::error::{Result, SimulationError};
use crate::models::Process;
use crate::validation::validate_count;

/// Reads processes by prompting on `W` and parsing answers from `R`.
#[derive(Debug)]
pub struct InteractiveSource<R, W> {
    reader: R,
    prompt: W,
    pending: VecDeque<String>,
    max_processes: usize,
}

impl<R: BufRead, W: Write> InteractiveSource<R, W> {
    /// Creates a source reading answers from `reader` and writing prompts
    /// to `prompt`.
    pub fn new(reader: R, prompt: W) -> Self {
        Self {
            reader,
            prompt,
            pending: VecDeque::new(),
            max_processes: DEFAULT_MAX_PROCESSES,
        }
    }

    /// Sets the largest process count accepted at the first prompt.
    pub fn with_max_processes(mut self, max_processes: usize) -> Self {
        self.max_processes = max_processes;
        self
    }

    /// Consumes the source and returns the prompt writer.
    pub fn into_prompt(self) -> W {
        self.prompt
    }

    fn ask(&mut self, question: &str, what: &str) -> Result<i64> {
        write!(self.prompt, "{question}")?;
        self.prompt.flush()?;

        let token = self
            .next_token()?
            .ok_or_else(|| SimulationError::malformed(format!("missing {what}")))?;
        token
            .parse::<i64>()
            .map_err(|_| SimulationError::malformed(format!("invalid {what} '{token}'")))
    }

    fn next_token(&mut self) -> Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }
}

impl<R: BufRead, W: Write> ProcessSource for InteractiveSource<R, W> {
    fn name(&self) -> &'static str {
        "interactive"
    }

    fn read_processes(&mut self) -> Result<Vec<Process>> {
        let answer = self.ask("Enter number of processes: ", "number of processes")?;
        // Negative counts are reported as zero
        let count = usize::try_from(answer).unwrap_or(0);
        validate_count(count, self.max_processes)?;

        let mut processes = Vec::with_capacity(count);
        for index in 0..count {
            let arrival = self.ask(
                &format!("Process {} arrival time: ", index + 1),
                "arrival time",
            )?;
            let burst = self.ask(
                &format!("Process {} burst time: ", index + 1),
                "burst time",
            )?;
            processes.push(Process::at_position(index, arrival, burst));
        }

        debug!(count, source = self.name(), "processes read");
        Ok(processes)
    }
}
