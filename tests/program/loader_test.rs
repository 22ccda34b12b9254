/*!
 * Loader Tests
 */

use mlq_scheduler::program::{load_program, parse_program};
use mlq_scheduler::{LoadError, ProcessState, Scheduler};
use pretty_assertions::assert_eq;
use std::fs;

#[test]
fn test_load_program_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("workload.txt");
    fs::write(
        &path,
        "# name; burst; arrival; queue; priority\nP1; 5; 0; 1; 1;\n\n   # indented comment\nP2 3 1 1 2\n",
    )
    .unwrap();

    let program = load_program(&path).unwrap();

    assert_eq!(program.name, "workload.txt");
    let fields: Vec<(&str, u64, u64, u32, i32)> = program
        .processes
        .iter()
        .map(|p| (p.name(), p.burst(), p.arrival(), p.queue(), p.priority()))
        .collect();
    assert_eq!(fields, vec![("P1", 5, 0, 1, 1), ("P2", 3, 1, 1, 2)]);
    assert!(program
        .processes
        .iter()
        .all(|p| p.state() == ProcessState::New));
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.txt");

    match load_program(&path) {
        Err(LoadError::NotFound(missing)) => assert_eq!(missing, path),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[test]
fn test_short_line_reports_line_number() {
    let err = parse_program("bad.txt", "P1; 5; 0; 1; 1\nP2; 3; 1\n").unwrap_err();

    assert!(matches!(err, LoadError::MissingFields { line: 2, found: 3 }));
}

#[test]
fn test_non_numeric_field() {
    let err = parse_program("bad.txt", "P1; five; 0; 1; 1").unwrap_err();

    match err {
        LoadError::InvalidField { line, field, value } => {
            assert_eq!(line, 1);
            assert_eq!(field, "burst time");
            assert_eq!(value, "five");
        }
        other => panic!("expected InvalidField, got {:?}", other),
    }
}

#[test]
fn test_zero_burst_is_invalid_process() {
    let err = parse_program("bad.txt", "P1; 0; 0; 1; 1").unwrap_err();

    assert!(matches!(err, LoadError::InvalidProcess { line: 1, .. }));
}

#[test]
fn test_duplicate_names_rejected() {
    let err = parse_program("dup.txt", "P1; 1; 0; 1; 1\nP1; 2; 0; 1; 1").unwrap_err();

    match err {
        LoadError::DuplicateName { line, name } => {
            assert_eq!(line, 2);
            assert_eq!(name, "P1");
        }
        other => panic!("expected DuplicateName, got {:?}", other),
    }
}

#[test]
fn test_comment_only_program_is_empty() {
    let program = parse_program("empty.txt", "# nothing here\n\n").unwrap();

    assert!(program.processes.is_empty());
}

#[test]
fn test_negative_arrivals_simulate_from_zero() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("early.txt");
    fs::write(&path, "A; 2; -1; 1; 1\nB; 1; 0; 1; 1\n").unwrap();

    let mut scheduler = Scheduler::default();
    scheduler.load_program(&path).unwrap();
    scheduler.simulate().unwrap();

    let rows: Vec<String> = scheduler.processes().iter().map(|p| p.to_string()).collect();
    assert_eq!(
        rows,
        vec!["A; 2; 0; 1; 1; 0; 2; 0; 2", "B; 1; 1; 1; 1; 1; 3; 2; 2"]
    );
}
