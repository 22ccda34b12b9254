/*!
 * Scheduler Statistics
 * Average metrics over a finished simulation
 */

use crate::core::types::{round_tenth, Tick};
use crate::process::Process;
use serde::Serialize;
use std::fmt;

/// Per-program metric averages, rounded to one decimal place
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Averages {
    pub waiting: f64,
    pub completion: f64,
    pub response: f64,
    pub turnaround: f64,
}

impl Averages {
    /// Arithmetic means over all processes; `None` for an empty slice
    pub fn from_processes(processes: &[Process]) -> Option<Self> {
        if processes.is_empty() {
            return None;
        }

        let count = processes.len() as f64;
        let mean = |metric: fn(&Process) -> Tick| {
            round_tenth(processes.iter().map(metric).sum::<Tick>() as f64 / count)
        };

        Some(Self {
            waiting: mean(Process::waiting),
            completion: mean(|p| p.completion().unwrap_or(0)),
            response: mean(|p| p.response().unwrap_or(0)),
            turnaround: mean(|p| p.turnaround().unwrap_or(0)),
        })
    }
}

/// Summary line: `WT=4.3; CT=8.7; RT=3.7; TAT=8.3`
impl fmt::Display for Averages {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "WT={:.1}; CT={:.1}; RT={:.1}; TAT={:.1}",
            self.waiting, self.completion, self.response, self.turnaround
        )
    }
}
