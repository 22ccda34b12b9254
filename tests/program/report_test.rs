/*!
 * Report Tests
 * Text and JSON renderings of a finished simulation
 */

use mlq_scheduler::program::parse_program;
use mlq_scheduler::{ReportFormat, ReportWriter, Scheduler, SimulationReport};
use pretty_assertions::assert_eq;
use std::fs;

const PROGRAM: &str = "P1; 5; 0; 1; 1\nP2; 3; 1; 1; 2\nP3; 4; 0; 3; 1\n";

const EXPECTED_BLOCK: &str = "\
# file: mixed.txt
# policy: RR(3), RR(5), FCFS
# label; BT; AT; Q; Pr; WT; CT; RT; TAT
P1; 5; 0; 1; 1; 3; 8; 0; 8
P2; 3; 1; 1; 2; 2; 6; 3; 5
P3; 4; 0; 3; 1; 8; 12; 8; 12

WT=4.3; CT=8.7; RT=3.7; TAT=8.3

###########################################

";

fn report() -> SimulationReport {
    let mut scheduler = Scheduler::default();
    scheduler.load(parse_program("mixed.txt", PROGRAM).unwrap());
    scheduler.simulate().unwrap();
    SimulationReport::from_scheduler(&scheduler).unwrap()
}

#[test]
fn test_report_requires_simulation() {
    let mut scheduler = Scheduler::default();
    scheduler.load(parse_program("mixed.txt", PROGRAM).unwrap());

    assert!(SimulationReport::from_scheduler(&scheduler).is_none());
}

#[test]
fn test_text_block() {
    assert_eq!(report().to_string(), EXPECTED_BLOCK);
}

#[test]
fn test_text_writer_appends_blocks() {
    let dir = tempfile::tempdir().unwrap();
    let writer = ReportWriter::new(dir.path().join("results.txt"), ReportFormat::Text);
    let report = report();

    writer.truncate().unwrap();
    writer.append(&report).unwrap();
    writer.append(&report).unwrap();

    let written = fs::read_to_string(writer.path()).unwrap();
    assert_eq!(written, EXPECTED_BLOCK.repeat(2));

    writer.truncate().unwrap();
    assert_eq!(fs::read_to_string(writer.path()).unwrap(), "");
}

#[test]
fn test_json_line() {
    let dir = tempfile::tempdir().unwrap();
    let writer = ReportWriter::new(dir.path().join("results.jsonl"), ReportFormat::Json);

    writer.append(&report()).unwrap();

    let written = fs::read_to_string(writer.path()).unwrap();
    assert_eq!(written.lines().count(), 1);

    let value: serde_json::Value = serde_json::from_str(written.trim_end()).unwrap();
    assert_eq!(value["program"], "mixed.txt");
    assert_eq!(value["policy"], "RR(3), RR(5), FCFS");
    assert_eq!(value["averages"]["waiting"], 4.3);
    assert_eq!(value["processes"][1]["name"], "P2");
    assert_eq!(value["processes"][1]["completion"], 6);
    assert_eq!(value["processes"][1]["state"], "finished");
    assert_eq!(value["timeline"][0]["process"], "P1");
    assert_eq!(value["timeline"][3]["end"], 12);
}
