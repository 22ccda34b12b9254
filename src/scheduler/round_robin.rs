/*!
 * Round-Robin Strategy
 * Preemptive time slicing with a fixed quantum
 */

use super::context::SimulationContext;
use super::policy::Quantum;
use super::traits::{active_in_queue, fold_new_arrivals, QueueStrategy, RoundOutcome};
use crate::core::types::QueueId;
use crate::process::{Process, ProcessResult, ProcessState};
use std::cmp::Reverse;
use tracing::debug;

/// Round-robin over the queue's active processes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRobin {
    quantum: Quantum,
}

impl RoundRobin {
    pub fn new(quantum: Quantum) -> Self {
        Self { quantum }
    }

    pub fn quantum(&self) -> Quantum {
        self.quantum
    }
}

impl QueueStrategy for RoundRobin {
    fn name(&self) -> &'static str {
        "round_robin"
    }

    fn run_round(
        &self,
        queue: QueueId,
        processes: &mut [Process],
        ctx: &mut SimulationContext,
    ) -> ProcessResult<RoundOutcome> {
        let quantum = u64::from(self.quantum.ticks());

        // Rotation order: descending priority, input order on ties
        let mut subset = active_in_queue(processes, queue);
        subset.sort_by_key(|&idx| Reverse(processes[idx].priority()));

        let mut index = 0;
        let mut slice_used = 0;

        while !subset.is_empty() {
            let current = subset[index];
            slice_used += 1;

            let finished = ctx.tick(processes, current)? == ProcessState::Finished;
            if finished {
                // The next process in rotation slides into `index`
                subset.remove(index);
                slice_used = 0;
            }

            if ctx.outranked(queue) {
                if !finished {
                    processes[current].preempt();
                }
                debug!(
                    queue,
                    clock = ctx.clock(),
                    preempted = processes[current].name(),
                    "round-robin yielding to higher queue"
                );
                return Ok(RoundOutcome::Yielded);
            }

            let expired = !finished && slice_used >= quantum;
            if finished || expired {
                if ctx.same_queue_reentry(queue) {
                    fold_new_arrivals(&mut subset, processes, queue);
                    ctx.clear_signal();
                }
                if expired {
                    processes[current].preempt();
                    index += 1;
                    slice_used = 0;
                }
                if index >= subset.len() {
                    index = 0;
                }
            }
        }

        Ok(RoundOutcome::Drained)
    }
}
