/*!
 * Batch Tests
 * Directory runs with skipped programs and both report formats
 */

use mlq_scheduler::monitoring::init_test_tracing;
use mlq_scheduler::program::list_programs;
use mlq_scheduler::{run_batch, QueueTable, ReportFormat, SimulationConfig, SimulatorError};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;

fn config(root: &Path, format: ReportFormat) -> SimulationConfig {
    SimulationConfig {
        programs_dir: root.join("programs"),
        results_path: root.join("results.txt"),
        report_format: format,
        queues: QueueTable::default(),
    }
}

fn write_programs(dir: &Path) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join("b_second.txt"), "Q1; 2; 0; 2; 1\nQ2; 1; 0; 3; 1\n").unwrap();
    fs::write(dir.join("a_first.txt"), "P1; 5; 0; 1; 1\nP2; 3; 1; 1; 2\nP3; 4; 0; 3; 1\n").unwrap();
    fs::write(dir.join("c_broken.txt"), "P1; 5; zero; 1; 1\n").unwrap();
    fs::write(dir.join("d_unmapped.txt"), "P1; 1; 0; 9; 1\n").unwrap();
    fs::create_dir_all(dir.join("nested")).unwrap();
}

#[test]
fn test_list_programs_sorted_files_only() {
    let root = tempfile::tempdir().unwrap();
    let dir = root.path().join("programs");
    write_programs(&dir);

    let names: Vec<String> = list_programs(&dir)
        .unwrap()
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();

    assert_eq!(
        names,
        vec!["a_first.txt", "b_second.txt", "c_broken.txt", "d_unmapped.txt"]
    );
}

#[test]
fn test_batch_simulates_and_skips() {
    init_test_tracing();
    let root = tempfile::tempdir().unwrap();
    let config = config(root.path(), ReportFormat::Text);
    write_programs(&config.programs_dir);
    fs::write(&config.results_path, "stale output from a previous run\n").unwrap();

    let summary = run_batch(&config).unwrap();

    assert_eq!(summary.simulated, vec!["a_first.txt", "b_second.txt"]);
    let skipped: Vec<&str> = summary.skipped.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(skipped, vec!["c_broken.txt", "d_unmapped.txt"]);

    let results = fs::read_to_string(&config.results_path).unwrap();
    assert!(!results.contains("stale"));
    assert!(results.starts_with("# file: a_first.txt\n"));
    assert!(results.contains("WT=4.3; CT=8.7; RT=3.7; TAT=8.3\n"));
    assert!(results.contains("# file: b_second.txt\n"));
    assert!(results.contains("Q1; 2; 0; 2; 1; 0; 2; 0; 2\n"));
    assert!(results.contains("Q2; 1; 0; 3; 1; 2; 3; 2; 3\n"));
    assert_eq!(results.matches("###########################################").count(), 2);
}

#[test]
fn test_batch_json_lines() {
    let root = tempfile::tempdir().unwrap();
    let config = config(root.path(), ReportFormat::Json);
    write_programs(&config.programs_dir);

    run_batch(&config).unwrap();

    let results = fs::read_to_string(&config.results_path).unwrap();
    let programs: Vec<String> = results
        .lines()
        .map(|line| {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            value["program"].as_str().unwrap().to_string()
        })
        .collect();
    assert_eq!(programs, vec!["a_first.txt", "b_second.txt"]);
}

#[test]
fn test_missing_programs_dir_is_fatal() {
    let root = tempfile::tempdir().unwrap();
    let config = config(root.path(), ReportFormat::Text);

    let err = run_batch(&config).unwrap_err();

    assert!(matches!(err, SimulatorError::Load(_)));
}
