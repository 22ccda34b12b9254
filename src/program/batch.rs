/*!
 * Batch Driver
 * Simulate every program of a directory into one results file
 */

use super::report::{ReportWriter, SimulationReport};
use crate::core::config::SimulationConfig;
use crate::core::errors::{LoadError, SchedulerError};
use crate::core::types::SimulatorResult;
use crate::scheduler::Scheduler;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Programs simulated and skipped by one batch run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub simulated: Vec<String>,
    /// Program name and the reason it was skipped
    pub skipped: Vec<(String, String)>,
}

/// Regular files of `dir`, sorted by file name
pub fn list_programs(dir: &Path) -> Result<Vec<PathBuf>, LoadError> {
    let io_error = |source| LoadError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut programs = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_error)? {
        let path = entry.map_err(io_error)?.path();
        if path.is_file() {
            programs.push(path);
        }
    }
    programs.sort();
    Ok(programs)
}

/// Truncate the results file, then load, simulate and report each program
///
/// Programs that fail to load or simulate are logged and skipped. Failing to
/// list the programs directory or to write the results file aborts the batch.
pub fn run_batch(config: &SimulationConfig) -> SimulatorResult<BatchSummary> {
    let programs = list_programs(&config.programs_dir)?;
    let writer = ReportWriter::new(&config.results_path, config.report_format);
    writer.truncate()?;

    info!(
        programs = programs.len(),
        dir = %config.programs_dir.display(),
        results = %config.results_path.display(),
        policy = %config.queues.describe(),
        "starting batch"
    );

    let mut summary = BatchSummary::default();
    for path in programs {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        match simulate_program(config, &path) {
            Ok(report) => {
                writer.append(&report)?;
                info!(program = %name, averages = %report.averages, "program simulated");
                summary.simulated.push(name);
            }
            Err(err) => {
                warn!(program = %name, error = %err, "skipping program");
                summary.skipped.push((name, err.to_string()));
            }
        }
    }

    info!(
        simulated = summary.simulated.len(),
        skipped = summary.skipped.len(),
        "batch complete"
    );
    Ok(summary)
}

fn simulate_program(config: &SimulationConfig, path: &Path) -> SimulatorResult<SimulationReport> {
    let mut scheduler = Scheduler::new(config.queues.clone());
    scheduler.load_program(path)?;
    scheduler.simulate()?;

    SimulationReport::from_scheduler(&scheduler)
        .ok_or_else(|| SchedulerError::EmptyProgram.into())
}
