pub mod fcfs;
pub mod hrrn;
pub mod priority;
pub mod round_robin;
pub mod sjf;
pub mod srtf;

use crate::core::state::{CpuCtx, ProcId, Ticks};

pub use fcfs::Fcfs;
pub use hrrn::Hrrn;
pub use priority::Priority;
pub use round_robin::RoundRobin;
pub use sjf::Sjf;
pub use srtf::Srtf;

/// Why a process is being handed to the policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnqueueReason {
    /// The process just reached its arrival time.
    Arrival,
    /// The process ran a slice and still has work left.
    Preempted,
}

/// A dispatch decision: run `proc` for `len` ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slice {
    pub proc: ProcId,
    pub len: Ticks,
}

/// A selection policy, driven by the shared engine.
///
/// Scan-based policies inspect the ready set on every dispatch and can leave
/// `attach`/`enqueue` as no-ops. Queue-backed policies allocate their run
/// queue in `attach` and keep it fed through `enqueue`; the engine calls
/// `enqueue` for arrivals before re-enqueueing a preempted process, which
/// fixes the admission order Round-Robin depends on.
pub trait Policy {
    fn attach(&mut self, _ctx: &mut CpuCtx) {}

    fn enqueue(&mut self, _ctx: &mut CpuCtx, _proc: ProcId, _reason: EnqueueReason) {}

    /// Pick the next process and slice length, or `None` to idle the CPU.
    fn dispatch(&mut self, ctx: &mut CpuCtx) -> Option<Slice>;
}
