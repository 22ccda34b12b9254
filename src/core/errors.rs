/*!
 * Error Types
 * Centralized error handling with thiserror and miette
 */

use super::types::QueueId;
use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

pub use crate::process::ProcessError;

/// Program loading errors
#[derive(Error, Debug, Diagnostic)]
pub enum LoadError {
    #[error("Program file {} not found", .0.display())]
    #[diagnostic(
        code(loader::not_found),
        help("Check that the file exists inside the programs directory.")
    )]
    NotFound(PathBuf),

    #[error("Failed to read {}: {source}", .path.display())]
    #[diagnostic(code(loader::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Line {line}: expected 5 fields (name, burst, arrival, queue, priority), found {found}")]
    #[diagnostic(
        code(loader::missing_fields),
        help("Each process line reads `name; burst; arrival; queue; priority`.")
    )]
    MissingFields { line: usize, found: usize },

    #[error("Line {line}: invalid {field} '{value}'")]
    #[diagnostic(code(loader::invalid_field), help("Numeric fields must be integers."))]
    InvalidField {
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error("Line {line}: {source}")]
    #[diagnostic(code(loader::invalid_process))]
    InvalidProcess {
        line: usize,
        #[source]
        source: ProcessError,
    },

    #[error("Line {line}: duplicate process name '{name}'")]
    #[diagnostic(
        code(loader::duplicate_name),
        help("Process names must be unique within one program.")
    )]
    DuplicateName { line: usize, name: String },
}

/// Scheduler-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum SchedulerError {
    #[error("Program has no processes to simulate")]
    #[diagnostic(
        code(scheduler::empty_program),
        help("Load at least one process before simulating.")
    )]
    EmptyProgram,

    #[error("Process '{process}' targets queue {queue}, which has no policy")]
    #[diagnostic(
        code(scheduler::unmapped_queue),
        help("Add the queue to the `queues` table of the configuration.")
    )]
    UnmappedQueue { process: String, queue: QueueId },

    #[error("Process error: {0}")]
    #[diagnostic(transparent)]
    Process(#[from] ProcessError),
}

/// Configuration errors
#[derive(Error, Debug, Diagnostic)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", .path.display())]
    #[diagnostic(code(config::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {}: {source}", .path.display())]
    #[diagnostic(code(config::parse), help("The config file must be a JSON object."))]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid policy '{0}'. Valid: rr:<quantum>, fcfs, sjf, stcf")]
    #[diagnostic(code(config::invalid_policy))]
    InvalidPolicy(String),

    #[error("Invalid quantum {0}: must be at least 1 tick")]
    #[diagnostic(code(config::invalid_quantum))]
    InvalidQuantum(u32),

    #[error("Invalid report format '{0}'. Valid: text, json")]
    #[diagnostic(code(config::invalid_format))]
    InvalidFormat(String),

    #[error("Queue table is empty")]
    #[diagnostic(
        code(config::empty_table),
        help("Map at least one queue id to a policy.")
    )]
    EmptyTable,
}

/// Report writing errors
#[derive(Error, Debug, Diagnostic)]
pub enum ReportError {
    #[error("Failed to write report {}: {source}", .path.display())]
    #[diagnostic(
        code(report::io),
        help("Check that the results path is writable.")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize report: {0}")]
    #[diagnostic(code(report::serialize))]
    Serialize(#[from] serde_json::Error),
}

/// Unified simulator error type with miette diagnostics
#[derive(Error, Debug, Diagnostic)]
pub enum SimulatorError {
    #[error("Load error: {0}")]
    #[diagnostic(transparent)]
    Load(#[from] LoadError),

    #[error("Scheduler error: {0}")]
    #[diagnostic(transparent)]
    Scheduler(#[from] SchedulerError),

    #[error("Config error: {0}")]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error("Report error: {0}")]
    #[diagnostic(transparent)]
    Report(#[from] ReportError),
}

impl From<ProcessError> for SimulatorError {
    fn from(err: ProcessError) -> Self {
        SimulatorError::Scheduler(SchedulerError::Process(err))
    }
}
