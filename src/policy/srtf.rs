use super::{Policy, Slice};
use crate::core::state::CpuCtx;

/// Shortest-remaining-time-first: the preemptive variant of SJF.
///
/// Dispatches one tick at a time and re-evaluates, so a new arrival with
/// less work preempts the current process at the next tick boundary. The
/// raw timeline keeps one segment per tick.
#[derive(Debug, Default)]
pub struct Srtf;

impl Policy for Srtf {
    fn dispatch(&mut self, ctx: &mut CpuCtx) -> Option<Slice> {
        let entry = ctx.ready_procs().min_by_key(|p| p.remaining)?;
        Some(Slice {
            proc: entry.id,
            len: 1,
        })
    }
}
