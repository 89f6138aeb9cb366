//! Deterministic simulation of classical CPU scheduling policies.
//!
//! Callers describe the whole process set up front; each `run_*` entry
//! point plays it through one policy and returns the execution timeline
//! together with per-process metrics. `Sim` and `Policy` stay public so
//! custom policies can be driven through the same engine.

use std::num::NonZeroU64;

pub mod core;
pub mod policy;
pub mod sim;

pub use crate::core::{ProcId, Segment, Ticks, Timeline};
pub use policy::{EnqueueReason, Policy, Slice};
pub use sim::{Process, ProcessReport, Sim, SimError, SimReport};

use policy::{Fcfs, Hrrn, Priority, RoundRobin, Sjf, Srtf};

/// First-come-first-served.
pub fn run_fcfs(processes: &[Process]) -> Result<SimReport, SimError> {
    Ok(Sim::new(processes, Fcfs)?.run())
}

/// Shortest-job-first, non-preemptive.
pub fn run_sjf(processes: &[Process]) -> Result<SimReport, SimError> {
    Ok(Sim::new(processes, Sjf)?.run())
}

/// Shortest-remaining-time-first, the preemptive variant of SJF.
pub fn run_sjf_preemptive(processes: &[Process]) -> Result<SimReport, SimError> {
    Ok(Sim::new(processes, Srtf)?.run())
}

/// Highest-response-ratio-next.
pub fn run_hrrn(processes: &[Process]) -> Result<SimReport, SimError> {
    Ok(Sim::new(processes, Hrrn)?.run())
}

/// Round-robin with a fixed quantum.
///
/// Fails with [`SimError::InvalidQuantum`] before any simulation state is
/// created if `quantum` is zero.
pub fn run_round_robin(processes: &[Process], quantum: Ticks) -> Result<SimReport, SimError> {
    let quantum = NonZeroU64::new(quantum).ok_or(SimError::InvalidQuantum)?;
    Ok(Sim::new(processes, RoundRobin::new(quantum))?.run())
}

/// Non-preemptive priority scheduling; larger priority values run first.
pub fn run_priority(processes: &[Process]) -> Result<SimReport, SimError> {
    Ok(Sim::new(processes, Priority::default())?.run())
}
