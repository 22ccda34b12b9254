/*!
 * Simulation Context
 * Clock, queue selection state and execution timeline of one simulation
 */

use crate::core::types::{QueueId, Tick};
use crate::process::{Process, ProcessResult, ProcessState};
use serde::Serialize;
use tracing::trace;

/// Consecutive ticks given to one process: clock went from `start` to `end`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Segment {
    /// Index into the scheduler's process table
    pub process: usize,
    pub start: Tick,
    pub end: Tick,
}

impl Segment {
    #[inline]
    pub const fn len(&self) -> Tick {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.end == self.start
    }
}

/// Mutable state shared between the MLQ driver and the active strategy
///
/// Owned by the scheduler and lent to one strategy at a time.
#[derive(Debug, Default)]
pub struct SimulationContext {
    clock: Tick,
    current_queue: Option<QueueId>,
    arrival_signal: bool,
    timeline: Vec<Segment>,
}

impl SimulationContext {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn clock(&self) -> Tick {
        self.clock
    }

    /// Lowest queue id with a ready or running process
    #[inline(always)]
    pub fn current_queue(&self) -> Option<QueueId> {
        self.current_queue
    }

    /// True if some process arrived since the signal was last cleared
    #[inline(always)]
    pub fn arrival_signalled(&self) -> bool {
        self.arrival_signal
    }

    pub fn clear_signal(&mut self) {
        self.arrival_signal = false;
    }

    /// An arrival activated a queue that outranks `queue`
    pub fn outranked(&self, queue: QueueId) -> bool {
        self.arrival_signal && self.current_queue.is_some_and(|current| current < queue)
    }

    /// An arrival happened while `queue` is still the active queue
    pub fn same_queue_reentry(&self, queue: QueueId) -> bool {
        self.arrival_signal && self.current_queue == Some(queue)
    }

    pub fn timeline(&self) -> &[Segment] {
        &self.timeline
    }

    /// Admit processes whose arrival time has been reached and recompute
    /// the current queue
    pub fn admit_arrivals(&mut self, processes: &mut [Process]) {
        for process in processes.iter_mut() {
            if process.arrival() <= self.clock && process.admit() {
                self.arrival_signal = true;
                trace!(
                    clock = self.clock,
                    process = process.name(),
                    queue = process.queue(),
                    "process arrived"
                );
            }
        }

        self.current_queue = processes
            .iter()
            .filter(|p| p.is_active())
            .map(Process::queue)
            .min();
    }

    /// Advance the clock by one tick running `running`
    ///
    /// Every other ready process waits, then arrivals at the new clock value
    /// are admitted. Returns the state of the running process after the tick.
    pub fn tick(
        &mut self,
        processes: &mut [Process],
        running: usize,
    ) -> ProcessResult<ProcessState> {
        self.clock += 1;
        processes[running].run(self.clock)?;
        self.record(running);

        for (idx, process) in processes.iter_mut().enumerate() {
            if idx != running && process.is_ready() {
                process.wait()?;
            }
        }

        self.admit_arrivals(processes);
        Ok(processes[running].state())
    }

    /// Advance the clock with nothing to run
    pub fn idle_tick(&mut self, processes: &mut [Process]) {
        self.clock += 1;
        trace!(clock = self.clock, "cpu idle");
        self.admit_arrivals(processes);
    }

    fn record(&mut self, process: usize) {
        let end = self.clock;
        match self.timeline.last_mut() {
            Some(last) if last.process == process && last.end + 1 == end => last.end = end,
            _ => self.timeline.push(Segment {
                process,
                start: end - 1,
                end,
            }),
        }
    }
}
