/*!
 * Shortest-Job-First Strategy
 * Non-preemptive service by ascending burst time
 */

use super::context::SimulationContext;
use super::fcfs::serve_to_completion;
use super::traits::{active_in_queue, QueueStrategy, RoundOutcome};
use crate::core::types::QueueId;
use crate::process::{Process, ProcessResult};
use std::cmp::Reverse;

/// Shortest total burst first, higher priority on ties
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sjf;

impl QueueStrategy for Sjf {
    fn name(&self) -> &'static str {
        "sjf"
    }

    fn run_round(
        &self,
        queue: QueueId,
        processes: &mut [Process],
        ctx: &mut SimulationContext,
    ) -> ProcessResult<RoundOutcome> {
        let mut order = active_in_queue(processes, queue);
        order.sort_by_key(|&idx| {
            let p = &processes[idx];
            (p.is_ready(), p.burst(), Reverse(p.priority()))
        });

        serve_to_completion(self.name(), order.into(), processes, ctx)
    }
}
