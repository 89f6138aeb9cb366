use std::num::NonZeroU64;

use super::{EnqueueReason, Policy, Slice};
use crate::core::state::{CpuCtx, ProcId, QueueId};

/// Round-robin over a single FIFO run queue with a fixed quantum.
///
/// A preempted process goes to the back of the queue; the engine admits
/// arrivals due at the slice boundary first, so a process arriving exactly
/// when another's slice ends is queued ahead of the re-queued one.
#[derive(Debug)]
pub struct RoundRobin {
    quantum: NonZeroU64,
    queue: Option<QueueId>,
}

impl RoundRobin {
    pub fn new(quantum: NonZeroU64) -> Self {
        Self {
            quantum,
            queue: None,
        }
    }

    fn queue(&self) -> QueueId {
        self.queue.expect("round robin dispatched before attach")
    }
}

impl Policy for RoundRobin {
    fn attach(&mut self, ctx: &mut CpuCtx) {
        self.queue = Some(ctx.create_fifo_queue());
    }

    fn enqueue(&mut self, ctx: &mut CpuCtx, proc: ProcId, _reason: EnqueueReason) {
        ctx.queue_push_fifo(self.queue(), proc);
    }

    fn dispatch(&mut self, ctx: &mut CpuCtx) -> Option<Slice> {
        let proc = ctx.queue_pop(self.queue())?;
        let len = self.quantum.get().min(ctx.proc(proc).remaining);
        Some(Slice { proc, len })
    }
}
