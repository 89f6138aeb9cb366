use super::state::{ProcId, Ticks};

/// One entry of the execution record: either a dispatched slice or a span
/// where the CPU had nothing to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Run {
        proc: ProcId,
        start: Ticks,
        end: Ticks,
    },
    Idle {
        start: Ticks,
        end: Ticks,
    },
}

impl Segment {
    pub fn start(&self) -> Ticks {
        match *self {
            Segment::Run { start, .. } | Segment::Idle { start, .. } => start,
        }
    }

    pub fn end(&self) -> Ticks {
        match *self {
            Segment::Run { end, .. } | Segment::Idle { end, .. } => end,
        }
    }

    pub fn duration(&self) -> Ticks {
        self.end() - self.start()
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Segment::Idle { .. })
    }
}

/// Ordered record of what the CPU did, contiguous over `[0, span)`.
///
/// Adjacent idle ticks extend the open idle segment instead of opening a new
/// one. Run segments are never merged, even for the same process back to
/// back; preemptive policies rely on the per-slice granularity, and merging
/// for presentation is a rendering concern.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Timeline {
    segments: Vec<Segment>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push_run(&mut self, proc: ProcId, start: Ticks, len: Ticks) {
        debug_assert!(len > 0, "run segments must have a positive length");
        debug_assert_eq!(start, self.span(), "run segment must start at the cursor");
        self.segments.push(Segment::Run {
            proc,
            start,
            end: start + len,
        });
    }

    pub(crate) fn push_idle_tick(&mut self, start: Ticks) {
        debug_assert_eq!(start, self.span(), "idle tick must start at the cursor");
        match self.segments.last_mut() {
            Some(Segment::Idle { end, .. }) if *end == start => *end += 1,
            _ => self.segments.push(Segment::Idle {
                start,
                end: start + 1,
            }),
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// End of the last segment; the clock value the record covers up to.
    pub fn span(&self) -> Ticks {
        self.segments.last().map_or(0, |seg| seg.end())
    }

    pub fn busy_ticks(&self) -> Ticks {
        self.segments
            .iter()
            .filter(|seg| !seg.is_idle())
            .map(|seg| seg.duration())
            .sum()
    }

    pub fn idle_ticks(&self) -> Ticks {
        self.segments
            .iter()
            .filter(|seg| seg.is_idle())
            .map(|seg| seg.duration())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn idle_ticks_coalesce_into_one_segment() {
        let mut timeline = Timeline::new();
        timeline.push_idle_tick(0);
        timeline.push_idle_tick(1);
        timeline.push_idle_tick(2);

        assert_eq!(timeline.segments(), &[Segment::Idle { start: 0, end: 3 }]);
        assert_eq!(timeline.idle_ticks(), 3);
    }

    #[test]
    fn run_segments_close_the_open_idle_period() {
        let mut timeline = Timeline::new();
        timeline.push_idle_tick(0);
        timeline.push_idle_tick(1);
        timeline.push_run(0, 2, 4);
        timeline.push_idle_tick(6);

        assert_eq!(
            timeline.segments(),
            &[
                Segment::Idle { start: 0, end: 2 },
                Segment::Run {
                    proc: 0,
                    start: 2,
                    end: 6
                },
                Segment::Idle { start: 6, end: 7 },
            ]
        );
        assert_eq!(timeline.busy_ticks(), 4);
        assert_eq!(timeline.span(), 7);
    }

    #[test]
    fn back_to_back_runs_for_one_process_stay_separate() {
        let mut timeline = Timeline::new();
        timeline.push_run(1, 0, 1);
        timeline.push_run(1, 1, 1);

        assert_eq!(timeline.segments().len(), 2);
    }
}
