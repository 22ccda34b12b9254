/*!
 * Simulation Reports
 * Render finished simulations and append them to the results file
 */

use crate::core::config::ReportFormat;
use crate::core::errors::ReportError;
use crate::core::types::Tick;
use crate::process::Process;
use crate::scheduler::{Averages, Scheduler};
use serde::Serialize;
use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Separator written after every text report block
const BLOCK_SEPARATOR: &str = "###########################################";

/// Execution segment with the process resolved by name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineEntry {
    pub process: String,
    pub start: Tick,
    pub end: Tick,
}

/// Results of one simulated program
#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    pub program: String,
    pub policy: String,
    pub processes: Vec<Process>,
    pub averages: Averages,
    pub timeline: Vec<TimelineEntry>,
}

impl SimulationReport {
    /// Snapshot a scheduler; `None` until it has been simulated
    pub fn from_scheduler(scheduler: &Scheduler) -> Option<Self> {
        let averages = scheduler.averages()?;
        let processes = scheduler.processes();

        let timeline = scheduler
            .timeline()
            .iter()
            .map(|segment| TimelineEntry {
                process: processes[segment.process].name().to_string(),
                start: segment.start,
                end: segment.end,
            })
            .collect();

        Some(Self {
            program: scheduler.program().to_string(),
            policy: scheduler.table().describe(),
            processes: processes.to_vec(),
            averages,
            timeline,
        })
    }
}

/// Text block: header, one line per process, averages, separator
impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# file: {}", self.program)?;
        writeln!(f, "# policy: {}", self.policy)?;
        writeln!(f, "# label; BT; AT; Q; Pr; WT; CT; RT; TAT")?;
        for process in &self.processes {
            writeln!(f, "{}", process)?;
        }
        writeln!(f)?;
        writeln!(f, "{}", self.averages)?;
        writeln!(f)?;
        writeln!(f, "{}", BLOCK_SEPARATOR)?;
        writeln!(f)
    }
}

/// Appends reports to one shared results file
#[derive(Debug, Clone)]
pub struct ReportWriter {
    path: PathBuf,
    format: ReportFormat,
}

impl ReportWriter {
    pub fn new(path: impl Into<PathBuf>, format: ReportFormat) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Empty the results file (created if missing)
    pub fn truncate(&self) -> Result<(), ReportError> {
        File::create(&self.path).map_err(|source| self.io_error(source))?;
        Ok(())
    }

    /// Append one report in the configured format
    pub fn append(&self, report: &SimulationReport) -> Result<(), ReportError> {
        let rendered = match self.format {
            ReportFormat::Text => report.to_string(),
            ReportFormat::Json => {
                let mut line = serde_json::to_string(report)?;
                line.push('\n');
                line
            }
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| self.io_error(source))?;
        file.write_all(rendered.as_bytes())
            .map_err(|source| self.io_error(source))
    }

    fn io_error(&self, source: std::io::Error) -> ReportError {
        ReportError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
