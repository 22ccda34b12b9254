/*!
 * First-Come First-Served Strategy
 * Non-preemptive service in arrival order
 */

use super::context::SimulationContext;
use super::traits::{active_in_queue, QueueStrategy, RoundOutcome};
use crate::core::types::QueueId;
use crate::process::{Process, ProcessResult, ProcessState};
use std::cmp::Reverse;
use std::collections::VecDeque;
use tracing::debug;

/// Earliest arrival first, higher priority on ties
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fcfs;

impl QueueStrategy for Fcfs {
    fn name(&self) -> &'static str {
        "fcfs"
    }

    fn run_round(
        &self,
        queue: QueueId,
        processes: &mut [Process],
        ctx: &mut SimulationContext,
    ) -> ProcessResult<RoundOutcome> {
        let mut order = active_in_queue(processes, queue);
        // A process left running keeps the CPU
        order.sort_by_key(|&idx| {
            let p = &processes[idx];
            (p.is_ready(), p.arrival(), Reverse(p.priority()))
        });

        serve_to_completion(self.name(), order.into(), processes, ctx)
    }
}

/// Run each process of `order` to completion, front to back
///
/// Arrivals do not interrupt the selected process; once it finishes, a
/// raised arrival signal ends the round so the driver can re-select.
pub(super) fn serve_to_completion(
    policy: &'static str,
    mut order: VecDeque<usize>,
    processes: &mut [Process],
    ctx: &mut SimulationContext,
) -> ProcessResult<RoundOutcome> {
    let mut selected: Option<usize> = None;

    loop {
        let current = match selected.or_else(|| order.pop_front()) {
            Some(idx) => idx,
            None => return Ok(RoundOutcome::Drained),
        };
        selected = Some(current);

        if ctx.tick(processes, current)? == ProcessState::Finished {
            selected = None;
            if ctx.arrival_signalled() {
                debug!(
                    policy,
                    clock = ctx.clock(),
                    pending = order.len(),
                    "round ended on arrival"
                );
                return Ok(RoundOutcome::Yielded);
            }
        }
    }
}
