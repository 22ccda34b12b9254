/*!
 * Process Types
 * Common types for the simulated process state machine
 */

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Process operation result
pub type ProcessResult<T> = Result<T, ProcessError>;

/// Process errors
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum ProcessError {
    #[error("Invalid state transition for '{name}': {from:?} -> {to:?}")]
    #[diagnostic(
        code(process::invalid_state),
        help("Operation cannot be performed in current process state.")
    )]
    InvalidStateTransition {
        name: String,
        from: ProcessState,
        to: ProcessState,
    },

    #[error("Process '{0}' has a zero burst time")]
    #[diagnostic(
        code(process::zero_burst),
        help("Every process needs at least one tick of CPU work.")
    )]
    ZeroBurst(String),
}

/// Process state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessState {
    /// Loaded, arrival time not reached yet
    New,
    /// Eligible to run, waiting for the CPU
    Ready,
    /// Selected for the current tick
    Running,
    /// Executed its whole burst
    Finished,
}

impl ProcessState {
    /// Convert to string representation
    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Ready => "ready",
            Self::Running => "running",
            Self::Finished => "finished",
        }
    }

    /// Ready or running processes compete for the CPU
    #[inline(always)]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Ready | Self::Running)
    }
}

impl std::fmt::Display for ProcessState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
