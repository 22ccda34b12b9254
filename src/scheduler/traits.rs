/*!
 * Scheduler Traits
 * Interface implemented by every per-queue scheduling strategy
 */

use super::context::SimulationContext;
use crate::core::types::QueueId;
use crate::process::{Process, ProcessResult};
use std::fmt;

/// How a strategy round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Every process of the round's subset finished
    Drained,
    /// Control returned early so the driver can re-select the queue
    Yielded,
}

/// Scheduling algorithm for one queue of the MLQ
///
/// A round borrows the whole process table and the simulation context. It
/// advances the clock only through [`SimulationContext::tick`] and returns
/// when its subset drains or the active queue set changes in a way the
/// policy has to honour.
pub trait QueueStrategy: fmt::Debug + Send + Sync {
    /// Short policy name used in logs
    fn name(&self) -> &'static str;

    /// Run one round over the active processes of `queue`
    fn run_round(
        &self,
        queue: QueueId,
        processes: &mut [Process],
        ctx: &mut SimulationContext,
    ) -> ProcessResult<RoundOutcome>;
}

/// Indices of the ready or running processes assigned to `queue`
pub fn active_in_queue(processes: &[Process], queue: QueueId) -> Vec<usize> {
    processes
        .iter()
        .enumerate()
        .filter(|(_, p)| p.queue() == queue && p.is_active())
        .map(|(idx, _)| idx)
        .collect()
}

/// Append processes of `queue` that became active and are not in `subset` yet
pub fn fold_new_arrivals(subset: &mut Vec<usize>, processes: &[Process], queue: QueueId) {
    for idx in active_in_queue(processes, queue) {
        if !subset.contains(&idx) {
            subset.push(idx);
        }
    }
}
