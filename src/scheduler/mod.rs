/*!
 * MLQ Scheduler
 * Multi-level queue driver delegating rounds to per-queue strategies
 */

pub mod context;
pub mod fcfs;
pub mod policy;
pub mod round_robin;
pub mod sjf;
pub mod stats;
pub mod stcf;
pub mod traits;

// Re-export public API
pub use context::{Segment, SimulationContext};
pub use fcfs::Fcfs;
pub use policy::{Policy, Quantum, QueueTable};
pub use round_robin::RoundRobin;
pub use sjf::Sjf;
pub use stats::Averages;
pub use stcf::Stcf;
pub use traits::{QueueStrategy, RoundOutcome};

use crate::core::errors::{LoadError, SchedulerError};
use crate::core::types::{QueueId, Tick};
use crate::process::Process;
use crate::program::loader::{self, Program};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Scheduler result type
pub type SchedulerResult<T> = Result<T, SchedulerError>;

/// Multi-level queue scheduler for one program
///
/// Owns the process table, the simulation context and one strategy per
/// configured queue. Queues are served in ascending id order.
#[derive(Debug)]
pub struct Scheduler {
    program: String,
    processes: Vec<Process>,
    table: QueueTable,
    strategies: BTreeMap<QueueId, Box<dyn QueueStrategy>>,
    ctx: SimulationContext,
    averages: Option<Averages>,
}

impl Scheduler {
    /// Create scheduler with a queue-to-policy table
    pub fn new(table: QueueTable) -> Self {
        let strategies = table
            .iter()
            .map(|(queue, policy)| (queue, policy.strategy()))
            .collect();

        Self {
            program: String::new(),
            processes: Vec::new(),
            table,
            strategies,
            ctx: SimulationContext::new(),
            averages: None,
        }
    }

    /// Read a program file and take its processes
    pub fn load_program(&mut self, path: &Path) -> Result<(), LoadError> {
        let program = loader::load_program(path)?;
        self.load(program);
        Ok(())
    }

    /// Take the processes of an already parsed program
    ///
    /// Replaces any previously loaded program along with its simulation state.
    pub fn load(&mut self, program: Program) {
        info!(
            program = %program.name,
            processes = program.processes.len(),
            "program loaded"
        );
        self.program = program.name;
        self.processes = program.processes;
        self.ctx = SimulationContext::new();
        self.averages = None;
    }

    /// Add a single process
    pub fn add_process(&mut self, process: Process) {
        self.processes.push(process);
    }

    /// Shift every arrival so the earliest process arrives at tick 0
    pub fn normalize_arrivals(&mut self) {
        let Some(min_arrival) = self.processes.iter().map(Process::arrival).min() else {
            return;
        };
        if min_arrival != 0 {
            debug!(offset = min_arrival, "normalizing arrival times");
            for process in &mut self.processes {
                process.shift_arrival(min_arrival);
            }
        }
    }

    /// Run the MLQ simulation until every process finishes
    #[instrument(skip(self), fields(program = %self.program))]
    pub fn simulate(&mut self) -> SchedulerResult<Averages> {
        self.validate()?;
        self.normalize_arrivals();

        while !self.all_finished() {
            self.ctx.admit_arrivals(&mut self.processes);
            self.ctx.clear_signal();

            let Some(queue) = self.ctx.current_queue() else {
                // Gap between arrivals: nothing ready, nothing running
                self.ctx.idle_tick(&mut self.processes);
                continue;
            };

            let strategy = self
                .strategies
                .get(&queue)
                .ok_or_else(|| self.unmapped(queue))?;

            let outcome = strategy.run_round(queue, &mut self.processes, &mut self.ctx)?;
            debug!(
                queue,
                policy = strategy.name(),
                clock = self.ctx.clock(),
                ?outcome,
                "round complete"
            );
        }

        let averages =
            Averages::from_processes(&self.processes).ok_or(SchedulerError::EmptyProgram)?;
        info!(
            clock = self.ctx.clock(),
            %averages,
            "simulation finished"
        );
        self.averages = Some(averages);
        Ok(averages)
    }

    fn validate(&self) -> SchedulerResult<()> {
        if self.processes.is_empty() {
            return Err(SchedulerError::EmptyProgram);
        }
        match self
            .processes
            .iter()
            .find(|p| !self.strategies.contains_key(&p.queue()))
        {
            Some(process) => Err(self.unmapped(process.queue())),
            None => Ok(()),
        }
    }

    #[cold]
    fn unmapped(&self, queue: QueueId) -> SchedulerError {
        let process = self
            .processes
            .iter()
            .find(|p| p.queue() == queue)
            .map(|p| p.name().to_string())
            .unwrap_or_default();
        SchedulerError::UnmappedQueue { process, queue }
    }

    fn all_finished(&self) -> bool {
        self.processes.iter().all(Process::is_finished)
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    pub fn table(&self) -> &QueueTable {
        &self.table
    }

    /// Averages of the last completed simulation
    pub fn averages(&self) -> Option<Averages> {
        self.averages
    }

    pub fn clock(&self) -> Tick {
        self.ctx.clock()
    }

    /// Execution segments in tick order
    pub fn timeline(&self) -> &[Segment] {
        self.ctx.timeline()
    }

    pub fn len(&self) -> usize {
        self.processes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }
}

/// Scheduler with the RR(3), RR(5), FCFS table
impl Default for Scheduler {
    fn default() -> Self {
        Self::new(QueueTable::default())
    }
}
