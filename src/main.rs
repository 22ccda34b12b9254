/*!
 * MLQ Simulator - Main Entry Point
 *
 * Simulates every program file of the programs directory and appends the
 * reports to the results file. An optional first argument overrides the
 * programs directory.
 */

use anyhow::Context;
use mlq_scheduler::{init_tracing, run_batch, SimulationConfig};
use std::path::PathBuf;
use tracing::{info, warn};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let mut config = SimulationConfig::from_env().context("Failed to load configuration")?;
    if let Some(dir) = std::env::args_os().nth(1) {
        config.programs_dir = PathBuf::from(dir);
    }

    info!(
        programs_dir = %config.programs_dir.display(),
        policy = %config.queues.describe(),
        "MLQ simulator starting"
    );

    let summary = run_batch(&config)
        .with_context(|| format!("Batch over {} failed", config.programs_dir.display()))?;

    for (program, reason) in &summary.skipped {
        warn!(program = %program, reason = %reason, "program skipped");
    }
    info!(
        simulated = summary.simulated.len(),
        skipped = summary.skipped.len(),
        results = %config.results_path.display(),
        "done"
    );
    Ok(())
}
