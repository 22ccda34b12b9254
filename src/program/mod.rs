/*!
 * Program Module
 * Program files in, simulation reports out
 */

pub mod batch;
pub mod loader;
pub mod report;

// Re-export for convenience
pub use batch::{list_programs, run_batch, BatchSummary};
pub use loader::{load_program, parse_program, Program};
pub use report::{ReportWriter, SimulationReport, TimelineEntry};
