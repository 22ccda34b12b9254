/*!
 * Simulated Process
 * Static parameters, runtime state and metrics of one process
 */

use super::types::{ProcessError, ProcessResult, ProcessState};
use crate::core::types::{Priority, QueueId, Tick};
use serde::Serialize;
use std::fmt;

/// One process of a simulated program
///
/// Static parameters are fixed at load time (arrival time may be shifted once
/// by normalization); runtime state and metrics are mutated tick by tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Process {
    name: String,
    burst: Tick,
    arrival: Tick,
    queue: QueueId,
    priority: Priority,

    state: ProcessState,
    executed: Tick,

    waiting: Tick,
    response: Option<Tick>,
    completion: Option<Tick>,
    turnaround: Option<Tick>,
}

impl Process {
    /// Create a new process in the `New` state
    pub fn new(
        name: impl Into<String>,
        burst: Tick,
        arrival: Tick,
        queue: QueueId,
        priority: Priority,
    ) -> ProcessResult<Self> {
        let name = name.into();
        if burst == 0 {
            return Err(ProcessError::ZeroBurst(name));
        }

        Ok(Self {
            name,
            burst,
            arrival,
            queue,
            priority,
            state: ProcessState::New,
            executed: 0,
            waiting: 0,
            response: None,
            completion: None,
            turnaround: None,
        })
    }

    /// Execute one tick of work at clock value `clock`
    ///
    /// Ready processes become running; the first run records the response
    /// time as the tick before `clock`. Reaching the burst time finishes the
    /// process and fixes its completion and turnaround times.
    pub fn run(&mut self, clock: Tick) -> ProcessResult<()> {
        match self.state {
            ProcessState::Ready => {
                self.state = ProcessState::Running;
                if self.response.is_none() {
                    self.response = Some(clock.saturating_sub(1));
                }
            }
            ProcessState::Running => {}
            from => return Err(self.invalid_transition(from, ProcessState::Running)),
        }

        self.executed += 1;

        if self.executed == self.burst {
            self.state = ProcessState::Finished;
            self.completion = Some(clock);
            self.turnaround = Some(clock.saturating_sub(self.arrival));
        }

        Ok(())
    }

    /// Account one tick spent ready while another process runs
    pub fn wait(&mut self) -> ProcessResult<()> {
        if self.state != ProcessState::Ready {
            return Err(self.invalid_transition(self.state, ProcessState::Ready));
        }
        self.waiting += 1;
        Ok(())
    }

    /// Move a new process to ready. Returns false if it was not new.
    pub fn admit(&mut self) -> bool {
        if self.state == ProcessState::New {
            self.state = ProcessState::Ready;
            true
        } else {
            false
        }
    }

    /// Move a running process back to ready. Returns false if it was not running.
    pub fn preempt(&mut self) -> bool {
        if self.state == ProcessState::Running {
            self.state = ProcessState::Ready;
            true
        } else {
            false
        }
    }

    /// Shift the arrival time down by `offset` ticks (normalization)
    pub(crate) fn shift_arrival(&mut self, offset: Tick) {
        self.arrival = self.arrival.saturating_sub(offset);
    }

    #[cold]
    fn invalid_transition(&self, from: ProcessState, to: ProcessState) -> ProcessError {
        ProcessError::InvalidStateTransition {
            name: self.name.clone(),
            from,
            to,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline(always)]
    pub const fn burst(&self) -> Tick {
        self.burst
    }

    #[inline(always)]
    pub const fn arrival(&self) -> Tick {
        self.arrival
    }

    #[inline(always)]
    pub const fn queue(&self) -> QueueId {
        self.queue
    }

    #[inline(always)]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    #[inline(always)]
    pub const fn state(&self) -> ProcessState {
        self.state
    }

    #[inline(always)]
    pub const fn executed(&self) -> Tick {
        self.executed
    }

    /// Ticks of work still required (sort key for STCF)
    #[inline(always)]
    pub const fn remaining(&self) -> Tick {
        self.burst - self.executed
    }

    #[inline(always)]
    pub const fn waiting(&self) -> Tick {
        self.waiting
    }

    #[inline(always)]
    pub const fn response(&self) -> Option<Tick> {
        self.response
    }

    #[inline(always)]
    pub const fn completion(&self) -> Option<Tick> {
        self.completion
    }

    #[inline(always)]
    pub const fn turnaround(&self) -> Option<Tick> {
        self.turnaround
    }

    #[inline(always)]
    pub const fn is_ready(&self) -> bool {
        matches!(self.state, ProcessState::Ready)
    }

    #[inline(always)]
    pub const fn is_finished(&self) -> bool {
        matches!(self.state, ProcessState::Finished)
    }

    /// Ready or running
    #[inline(always)]
    pub const fn is_active(&self) -> bool {
        self.state.is_active()
    }
}

/// Report line: `name; burst; arrival; queue; priority; waiting; completion; response; turnaround`
impl fmt::Display for Process {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; {}; {}; {}; {}; {}; {}; {}; {}",
            self.name,
            self.burst,
            self.arrival,
            self.queue,
            self.priority,
            self.waiting,
            Metric(self.completion),
            Metric(self.response),
            Metric(self.turnaround),
        )
    }
}

/// Unset metrics print as `-`
struct Metric(Option<Tick>);

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{}", value),
            None => f.write_str("-"),
        }
    }
}
