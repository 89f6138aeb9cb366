use log::debug;

use super::error::SimError;
use super::process::{Process, ProcessReport};
use crate::core::driver::Engine;
use crate::core::state::CpuCtx;
use crate::core::timeline::Timeline;
use crate::policy::Policy;

/// Everything one run produces: the execution timeline and per-process
/// metrics, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct SimReport {
    pub timeline: Timeline,
    pub processes: Vec<ProcessReport>,
}

/// One simulation run: a validated process set played through one policy.
///
/// Each run owns its state exclusively; re-running a workload means
/// constructing a fresh `Sim`.
pub struct Sim<P: Policy> {
    engine: Engine<P>,
    inputs: Vec<Process>,
}

impl<P: Policy> Sim<P> {
    /// Validates the process set and prepares a run. Nothing is simulated
    /// yet, and no state is created if validation fails.
    pub fn new(processes: &[Process], policy: P) -> Result<Self, SimError> {
        for (index, process) in processes.iter().enumerate() {
            if process.id != index {
                return Err(SimError::NonDenseId {
                    expected: index,
                    found: process.id,
                });
            }
            if process.burst_time == 0 {
                return Err(SimError::ZeroBurst { id: process.id });
            }
        }

        let mut ctx = CpuCtx::new();
        for process in processes {
            ctx.create_proc(process.arrival_time, process.burst_time, process.priority);
        }

        Ok(Self {
            engine: Engine::new(ctx, policy),
            inputs: processes.to_vec(),
        })
    }

    /// Runs the simulation to completion and derives the metrics.
    pub fn run(self) -> SimReport {
        let Sim { mut engine, inputs } = self;

        while !engine.all_finished() {
            engine.step();
        }
        debug!("simulation done at t={}", engine.now());

        let (ctx, timeline) = engine.into_parts();
        let processes = inputs
            .into_iter()
            .map(|process| {
                let completion = ctx
                    .proc(process.id)
                    .completion_time
                    .expect("finished process must have a completion time");
                ProcessReport::derive(process, completion)
            })
            .collect();

        SimReport {
            timeline,
            processes,
        }
    }
}
