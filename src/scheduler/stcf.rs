/*!
 * Shortest-Time-to-Completion-First Strategy
 * Preemptive service by least remaining work
 */

use super::context::SimulationContext;
use super::traits::{active_in_queue, fold_new_arrivals, QueueStrategy, RoundOutcome};
use crate::core::types::QueueId;
use crate::process::{Process, ProcessResult, ProcessState};
use std::cmp::Reverse;
use tracing::debug;

/// Least remaining time first; same-queue arrivals may preempt
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stcf;

impl QueueStrategy for Stcf {
    fn name(&self) -> &'static str {
        "stcf"
    }

    fn run_round(
        &self,
        queue: QueueId,
        processes: &mut [Process],
        ctx: &mut SimulationContext,
    ) -> ProcessResult<RoundOutcome> {
        let mut subset = active_in_queue(processes, queue);
        subset.sort_by_key(|&idx| Reverse(processes[idx].priority()));

        let mut previous: Option<usize> = None;

        while !subset.is_empty() {
            // Stable: earlier entries (incumbent, higher priority) win ties
            subset.sort_by_key(|&idx| processes[idx].remaining());
            let current = subset[0];

            if let Some(prev) = previous.filter(|&prev| prev != current) {
                processes[prev].preempt();
                debug!(
                    queue,
                    clock = ctx.clock(),
                    preempted = processes[prev].name(),
                    by = processes[current].name(),
                    "shorter job took the cpu"
                );
            }

            let finished = ctx.tick(processes, current)? == ProcessState::Finished;
            previous = if finished {
                subset.remove(0);
                None
            } else {
                Some(current)
            };

            if ctx.outranked(queue) {
                if !finished {
                    processes[current].preempt();
                }
                return Ok(RoundOutcome::Yielded);
            }

            if ctx.same_queue_reentry(queue) {
                fold_new_arrivals(&mut subset, processes, queue);
                ctx.clear_signal();
            }
        }

        Ok(RoundOutcome::Drained)
    }
}
