use super::{Policy, Slice};
use crate::core::state::CpuCtx;

/// Shortest-job-first, non-preemptive. Equal bursts keep the earlier
/// process, so selection is a stable function of input order.
#[derive(Debug, Default)]
pub struct Sjf;

impl Policy for Sjf {
    fn dispatch(&mut self, ctx: &mut CpuCtx) -> Option<Slice> {
        // min_by_key keeps the first of equal elements; the ready set
        // iterates in id order.
        let entry = ctx.ready_procs().min_by_key(|p| p.burst_time)?;
        Some(Slice {
            proc: entry.id,
            len: entry.remaining,
        })
    }
}
