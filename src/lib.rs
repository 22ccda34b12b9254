/*!
 * MLQ Scheduler Library
 * Discrete-time multi-level queue CPU scheduling simulator
 */

pub mod core;
pub mod monitoring;
pub mod process;
pub mod program;
pub mod scheduler;

// Re-exports
pub use crate::core::{
    ConfigError, LoadError, ReportError, ReportFormat, SchedulerError, SimulationConfig,
    SimulatorError, SimulatorResult, Tick,
};
pub use monitoring::init_tracing;
pub use process::{Process, ProcessError, ProcessState};
pub use program::{run_batch, BatchSummary, Program, ReportWriter, SimulationReport};
pub use scheduler::{Averages, Policy, QueueStrategy, QueueTable, RoundOutcome, Scheduler};
