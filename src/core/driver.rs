use log::{debug, trace};

use super::observer::Observer;
use super::state::{CpuCtx, Ticks};
use super::timeline::Timeline;
use crate::policy::{EnqueueReason, Policy, Slice};

/// Single-CPU simulation engine.
///
/// Advances the clock one idle tick or one dispatched slice at a time until
/// every process has finished. The policy only picks; admission, execution,
/// the timeline, and completion bookkeeping all live here so the six
/// policies share identical semantics.
pub struct Engine<P: Policy> {
    pub ctx: CpuCtx,
    pub policy: P,
    timeline: Timeline,
    observer: Observer,
}

impl<P: Policy> Engine<P> {
    pub fn new(mut ctx: CpuCtx, mut policy: P) -> Self {
        policy.attach(&mut ctx);
        Self {
            ctx,
            policy,
            timeline: Timeline::new(),
            observer: Observer::new(),
        }
    }

    pub fn now(&self) -> Ticks {
        self.ctx.now
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn all_finished(&self) -> bool {
        self.ctx.all_finished()
    }

    pub fn into_parts(self) -> (CpuCtx, Timeline) {
        (self.ctx, self.timeline)
    }

    /// One scheduling decision: an idle tick, or a full slice of execution.
    ///
    /// Terminates the run eventually: every step either advances the clock
    /// toward the next arrival or consumes remaining work.
    pub fn step(&mut self) {
        self.admit_due();

        let now = self.ctx.now;
        match self.policy.dispatch(&mut self.ctx) {
            None => {
                trace!("t={now}: cpu idle");
                self.timeline.push_idle_tick(now);
                self.ctx.advance_time(1);
            }
            Some(Slice { proc, len }) => {
                trace!("t={now}: run P{proc} for {len}");
                self.ctx.set_running(proc);
                self.ctx.consume(proc, len);
                self.ctx.advance_time(len);
                self.timeline.push_run(proc, now, len);

                // Arrivals due by the end of the slice are admitted ahead of
                // the preempted process.
                self.admit_due();

                if self.ctx.proc(proc).remaining == 0 {
                    let end = self.ctx.now;
                    self.ctx.mark_finished(proc, end);
                    debug!("t={end}: P{proc} finished");
                } else {
                    self.ctx.mark_ready(proc);
                    self.policy
                        .enqueue(&mut self.ctx, proc, EnqueueReason::Preempted);
                }
            }
        }

        self.observer.observe(&self.ctx, &self.timeline);
    }

    fn admit_due(&mut self) {
        for proc in self.ctx.due_arrivals() {
            self.ctx.mark_ready(proc);
            self.policy
                .enqueue(&mut self.ctx, proc, EnqueueReason::Arrival);
        }
    }
}
