use crate::core::state::{ProcId, Ticks};

/// Static description of a process as supplied by the caller.
///
/// Ids must be dense, `0..n-1`, matching input order; they are the stable
/// tie-break key everywhere selection order matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Process {
    pub id: ProcId,
    pub arrival_time: Ticks,
    pub burst_time: Ticks,
    /// Larger means more urgent. Only the priority policy reads this.
    pub priority: i64,
}

impl Process {
    pub fn new(id: ProcId, arrival_time: Ticks, burst_time: Ticks) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
            priority: 0,
        }
    }

    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }
}

/// Per-process metrics, derived exactly once when the run finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessReport {
    pub process: Process,
    pub completion_time: Ticks,
    pub turnaround_time: Ticks,
    pub waiting_time: Ticks,
}

impl ProcessReport {
    // completion >= arrival + burst always holds: a process is never
    // selected before it arrives and runs exactly its burst.
    pub(crate) fn derive(process: Process, completion_time: Ticks) -> Self {
        let turnaround_time = completion_time - process.arrival_time;
        let waiting_time = turnaround_time - process.burst_time;
        Self {
            process,
            completion_time,
            turnaround_time,
            waiting_time,
        }
    }
}
