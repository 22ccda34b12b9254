/*!
 * Process Lifecycle Tests
 * State transitions and per-process metric accounting
 */

use mlq_scheduler::{Process, ProcessError, ProcessState};
use pretty_assertions::assert_eq;

#[test]
fn test_full_lifecycle() {
    let mut p = Process::new("P1", 2, 1, 1, 3).unwrap();
    assert_eq!(p.state(), ProcessState::New);

    assert!(p.admit());
    assert!(!p.admit());
    assert_eq!(p.state(), ProcessState::Ready);

    p.wait().unwrap();
    p.run(3).unwrap();
    assert_eq!(p.state(), ProcessState::Running);
    assert_eq!(p.response(), Some(2));

    assert!(p.preempt());
    p.wait().unwrap();
    p.run(5).unwrap();

    assert_eq!(p.state(), ProcessState::Finished);
    assert_eq!(p.executed(), 2);
    assert_eq!(p.remaining(), 0);
    assert_eq!(p.waiting(), 2);
    assert_eq!(p.completion(), Some(5));
    assert_eq!(p.turnaround(), Some(4));
}

#[test]
fn test_response_recorded_once() {
    let mut p = Process::new("P1", 3, 0, 1, 1).unwrap();
    p.admit();

    p.run(4).unwrap();
    p.preempt();
    p.run(9).unwrap();

    assert_eq!(p.response(), Some(3));
}

#[test]
fn test_new_process_cannot_run() {
    let mut p = Process::new("P1", 1, 0, 1, 1).unwrap();

    let err = p.run(1).unwrap_err();
    assert_eq!(
        err,
        ProcessError::InvalidStateTransition {
            name: "P1".to_string(),
            from: ProcessState::New,
            to: ProcessState::Running,
        }
    );
}

#[test]
fn test_finished_process_is_terminal() {
    let mut p = Process::new("P1", 1, 0, 1, 1).unwrap();
    p.admit();
    p.run(1).unwrap();

    assert!(p.run(2).is_err());
    assert!(p.wait().is_err());
    assert!(!p.preempt());
    assert!(!p.admit());
    assert_eq!(p.executed(), 1);
}

#[test]
fn test_running_process_does_not_wait() {
    let mut p = Process::new("P1", 2, 0, 1, 1).unwrap();
    p.admit();
    p.run(1).unwrap();

    assert!(p.wait().is_err());
    assert_eq!(p.waiting(), 0);
}

#[test]
fn test_zero_burst_rejected() {
    assert_eq!(
        Process::new("idle", 0, 0, 1, 1).unwrap_err(),
        ProcessError::ZeroBurst("idle".to_string())
    );
}

#[test]
fn test_report_line() {
    let mut p = Process::new("P7", 1, 0, 2, 4).unwrap();
    assert_eq!(p.to_string(), "P7; 1; 0; 2; 4; 0; -; -; -");

    p.admit();
    p.run(1).unwrap();
    assert_eq!(p.to_string(), "P7; 1; 0; 2; 4; 0; 1; 0; 1");
}
