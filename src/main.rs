//! `sjf` — command-line front end for the SJF simulator.
//!
//! Reads processes interactively or from a JSON document, runs one
//! simulation, and prints a text or JSON report to stdout.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use sjf_schedule::config::{SimulatorConfig, DEFAULT_MAX_PROCESSES};
use sjf_schedule::models::Process;
use sjf_schedule::report::{write_report, OutputFormat};
use sjf_schedule::scheduler::simulate;
use sjf_schedule::source::{InputFormat, InteractiveSource, JsonSource, ProcessSource};
use sjf_schedule::telemetry::{init_tracing, json_requested_by_env};
use sjf_schedule::Result;

/// Non-preemptive Shortest-Job-First CPU scheduling simulator.
#[derive(Debug, Parser)]
#[command(name = "sjf", version, about)]
struct Cli {
    /// Where processes come from: interactive prompts or a JSON document.
    #[arg(long, env = "SJF_INPUT", default_value = "interactive")]
    input: InputFormat,

    /// Read a JSON document from this file instead of stdin (implies
    /// `--input json`).
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Report encoding.
    #[arg(long, env = "SJF_OUTPUT", default_value = "text")]
    output: OutputFormat,

    /// Largest accepted process count.
    #[arg(long, env = "SJF_MAX_PROCESSES", default_value_t = DEFAULT_MAX_PROCESSES)]
    max_processes: usize,

    /// Emit log events as JSON lines (also `SJF_LOG_JSON=1`).
    #[arg(long)]
    log_json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log_json || json_requested_by_env());

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, input_error = e.is_input_error(), "simulation failed");
            eprintln!("error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = SimulatorConfig::new().with_max_processes(cli.max_processes);
    let processes = read_processes(cli, &config)?;

    info!(
        count = processes.len(),
        max_processes = config.max_processes,
        output = %cli.output,
        "simulation started"
    );

    let simulation = simulate(&processes, &config)?;

    info!(
        slots = simulation.schedule.timeline.len(),
        avg_waiting = simulation.kpi.avg_waiting,
        avg_turnaround = simulation.kpi.avg_turnaround,
        cpu_utilization = simulation.kpi.cpu_utilization,
        "simulation finished"
    );

    write_report(cli.output, &simulation, io::stdout().lock())
}

fn read_processes(cli: &Cli, config: &SimulatorConfig) -> Result<Vec<Process>> {
    let format = if cli.file.is_some() {
        InputFormat::Json
    } else {
        cli.input
    };

    let mut source: Box<dyn ProcessSource> = match format {
        InputFormat::Interactive => Box::new(
            InteractiveSource::new(io::stdin().lock(), io::stderr())
                .with_max_processes(config.max_processes),
        ),
        InputFormat::Json => {
            let reader: Box<dyn Read> = match &cli.file {
                Some(path) => Box::new(BufReader::new(File::open(path)?)),
                None => Box::new(io::stdin().lock()),
            };
            Box::new(JsonSource::new(reader))
        }
    };

    let processes = source.read_processes()?;
    info!(count = processes.len(), source = source.name(), "input read");
    Ok(processes)
}
