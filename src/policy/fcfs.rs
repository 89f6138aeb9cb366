use super::{Policy, Slice};
use crate::core::state::CpuCtx;

/// First-come-first-served: input order, each process runs to completion.
///
/// The engine idles the clock up to the next arrival, so gaps between
/// arrivals show up as idle segments instead of being clamped out of the
/// waiting times.
#[derive(Debug, Default)]
pub struct Fcfs;

impl Policy for Fcfs {
    fn dispatch(&mut self, ctx: &mut CpuCtx) -> Option<Slice> {
        let entry = ctx.ready_procs().next()?;
        Some(Slice {
            proc: entry.id,
            len: entry.remaining,
        })
    }
}
