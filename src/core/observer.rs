use super::state::{CpuCtx, ProcPhase, Ticks};
use super::timeline::Timeline;

#[derive(Debug)]
pub struct Observer {
    step: u64,
}

impl Observer {
    pub fn new() -> Self {
        Self { step: 0 }
    }

    pub fn observe(&mut self, ctx: &CpuCtx, timeline: &Timeline) {
        self.step += 1;

        let running = ctx
            .procs
            .iter()
            .filter(|p| p.phase == ProcPhase::Running)
            .count();
        debug_assert_eq!(running, 0, "no process may stay Running between steps");

        for p in &ctx.procs {
            match p.phase {
                ProcPhase::Finished => {
                    debug_assert!(
                        p.completion_time.is_some(),
                        "finished process {} has no completion time",
                        p.id
                    );
                    debug_assert_eq!(p.remaining, 0, "finished process {} has work left", p.id);
                    debug_assert!(
                        !ctx.proc_in_any_queue(p.id),
                        "finished process {} still present in a run queue",
                        p.id
                    );
                }
                _ => {
                    debug_assert!(
                        p.completion_time.is_none(),
                        "unfinished process {} already has a completion time",
                        p.id
                    );
                    debug_assert!(p.remaining > 0, "unfinished process {} has no work", p.id);
                }
            }
        }

        for (&proc, &queue) in &ctx.proc_to_queue {
            debug_assert_eq!(
                ctx.proc(proc).phase,
                ProcPhase::Ready,
                "queued process {proc} must be Ready"
            );
            if let Some(q) = ctx.queues.get(queue) {
                debug_assert!(
                    q.contains(proc),
                    "proc_to_queue claims process {proc} in queue {queue:?}, but it is not there"
                );
            } else {
                debug_assert!(false, "proc_to_queue references unknown queue {queue:?}");
            }
        }

        // The timeline must tile [0, now) with no gaps, no overlap, and no
        // two idle segments back to back.
        let mut cursor: Ticks = 0;
        let mut prev_idle = false;
        for seg in timeline.segments() {
            debug_assert_eq!(seg.start(), cursor, "timeline segments must be contiguous");
            debug_assert!(seg.end() > seg.start(), "timeline segments must be nonempty");
            if seg.is_idle() {
                debug_assert!(!prev_idle, "adjacent idle segments must coalesce");
            }
            prev_idle = seg.is_idle();
            cursor = seg.end();
        }
        debug_assert_eq!(cursor, ctx.now, "timeline must cover the clock");

        let consumed: Ticks = ctx.procs.iter().map(|p| p.burst_time - p.remaining).sum();
        debug_assert_eq!(
            timeline.busy_ticks(),
            consumed,
            "run segments must account for exactly the consumed service"
        );
    }
}
