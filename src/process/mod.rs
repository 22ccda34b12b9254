/*!
 * Process Module
 * Simulated process records and their state machine
 */

pub mod entity;
pub mod types;

// Re-export for convenience
pub use entity::Process;
pub use types::{ProcessError, ProcessResult, ProcessState};
