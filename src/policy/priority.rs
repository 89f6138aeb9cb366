use super::{EnqueueReason, Policy, Slice};
use crate::core::state::{CpuCtx, ProcId, QueueId, Rank};

/// Non-preemptive priority scheduling: the numerically largest priority
/// among the ready set runs next, to completion. Ties go to the process
/// encountered first in input order.
#[derive(Debug, Default)]
pub struct Priority {
    queue: Option<QueueId>,
}

impl Priority {
    fn queue(&self) -> QueueId {
        self.queue.expect("priority policy dispatched before attach")
    }
}

impl Policy for Priority {
    fn attach(&mut self, ctx: &mut CpuCtx) {
        self.queue = Some(ctx.create_ranked_queue());
    }

    fn enqueue(&mut self, ctx: &mut CpuCtx, proc: ProcId, _reason: EnqueueReason) {
        let rank = Rank {
            key: ctx.proc(proc).priority,
            id: proc,
        };
        ctx.queue_push_ranked(self.queue(), proc, rank);
    }

    fn dispatch(&mut self, ctx: &mut CpuCtx) -> Option<Slice> {
        let proc = ctx.queue_pop(self.queue())?;
        Some(Slice {
            proc,
            len: ctx.proc(proc).remaining,
        })
    }
}
