use super::{Policy, Slice};
use crate::core::state::{CpuCtx, ProcEntry, Ticks};

/// Highest-response-ratio-next, non-preemptive.
///
/// The ratio `(wait + burst) / burst` grows with time spent waiting, so
/// short jobs are favored early but long waiters cannot starve. Bursts are
/// validated nonzero before the run starts.
#[derive(Debug, Default)]
pub struct Hrrn;

fn response_ratio(now: Ticks, p: &ProcEntry) -> f64 {
    (now - p.arrival_time + p.burst_time) as f64 / p.burst_time as f64
}

impl Policy for Hrrn {
    fn dispatch(&mut self, ctx: &mut CpuCtx) -> Option<Slice> {
        let now = ctx.now;

        // Strict-greater comparison keeps the first encountered on ties.
        let mut best: Option<(&ProcEntry, f64)> = None;
        for p in ctx.ready_procs() {
            let ratio = response_ratio(now, p);
            match best {
                Some((_, best_ratio)) if ratio <= best_ratio => {}
                _ => best = Some((p, ratio)),
            }
        }

        best.map(|(p, _)| Slice {
            proc: p.id,
            len: p.remaining,
        })
    }
}
