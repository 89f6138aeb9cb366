use keyed_priority_queue::KeyedPriorityQueue;
use rustc_hash::FxHashMap;
use slotmap::{SlotMap, new_key_type};
use std::collections::VecDeque;

// Index into the process Vec; ids are dense and double as input order.
pub type ProcId = usize;
pub type Ticks = u64;
new_key_type! {
    pub struct QueueId;
}

/// Ordering key for ranked run queues: larger `key` first, ties go to the
/// smaller process id (first encountered in input order).
#[derive(PartialEq, Eq, Hash, Debug, Copy, Clone)]
pub struct Rank {
    pub key: i64,
    pub id: ProcId,
}

// KeyedPriorityQueue is a max-heap, so the id ordering is flipped to make
// ties pop the earlier process.
impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rank {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key
            .cmp(&other.key)
            .then_with(|| other.id.cmp(&self.id))
    }
}

/// Per-process lifecycle: `Unarrived -> Ready -> Running -> (Ready | Finished)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcPhase {
    Unarrived,
    Ready,
    Running,
    Finished,
}

#[derive(Debug)]
pub struct ProcEntry {
    pub id: ProcId,
    pub phase: ProcPhase,
    pub arrival_time: Ticks,
    pub burst_time: Ticks,
    pub priority: i64,
    pub remaining: Ticks,
    pub completion_time: Option<Ticks>,
}

#[derive(Debug)]
pub enum RunQueue {
    Fifo {
        procs: VecDeque<ProcId>,
    },
    Ranked {
        procs: KeyedPriorityQueue<ProcId, Rank>,
    },
}

impl RunQueue {
    pub fn new_fifo() -> Self {
        Self::Fifo {
            procs: VecDeque::new(),
        }
    }

    pub fn new_ranked() -> Self {
        Self::Ranked {
            procs: KeyedPriorityQueue::new(),
        }
    }

    pub fn contains(&self, proc: ProcId) -> bool {
        match self {
            Self::Fifo { procs } => procs.contains(&proc),
            Self::Ranked { procs } => procs.iter().any(|(p, _)| *p == proc),
        }
    }
}

/// State owned by one simulation run: the clock, the process table, and the
/// run queues policies registered.
#[derive(Debug)]
pub struct CpuCtx {
    pub now: Ticks,
    pub procs: Vec<ProcEntry>,
    pub queues: SlotMap<QueueId, RunQueue>,
    pub proc_to_queue: FxHashMap<ProcId, QueueId>,
}

impl CpuCtx {
    pub fn new() -> Self {
        Self {
            now: 0,
            procs: Vec::new(),
            queues: SlotMap::with_key(),
            proc_to_queue: FxHashMap::default(),
        }
    }

    pub fn create_proc(&mut self, arrival_time: Ticks, burst_time: Ticks, priority: i64) -> ProcId {
        let id = self.procs.len();

        let entry = ProcEntry {
            id,
            phase: ProcPhase::Unarrived,
            arrival_time,
            burst_time,
            priority,
            remaining: burst_time,
            completion_time: None,
        };
        self.procs.push(entry);

        id
    }

    pub fn advance_time(&mut self, delta: Ticks) {
        self.now = self.now.saturating_add(delta);
    }

    pub fn proc(&self, proc: ProcId) -> &ProcEntry {
        &self.procs[proc]
    }

    pub fn proc_mut(&mut self, proc: ProcId) -> &mut ProcEntry {
        &mut self.procs[proc]
    }

    pub fn create_fifo_queue(&mut self) -> QueueId {
        self.queues.insert(RunQueue::new_fifo())
    }

    pub fn create_ranked_queue(&mut self) -> QueueId {
        self.queues.insert(RunQueue::new_ranked())
    }

    fn queue_push(&mut self, queue: QueueId, proc: ProcId, rank: Option<Rank>) {
        assert!(
            !self.proc_to_queue.contains_key(&proc),
            "process {proc} already present in some run queue"
        );

        let entry = self.proc(proc);
        debug_assert!(
            entry.phase == ProcPhase::Ready,
            "process {proc} must be Ready when enqueued"
        );

        let q = self.queues.get_mut(queue).expect("unknown run queue");
        match q {
            RunQueue::Fifo { procs } => procs.push_back(proc),
            RunQueue::Ranked { procs } => {
                procs.push(proc, rank.expect("ranked queue push needs a rank"));
            }
        };

        self.proc_to_queue.insert(proc, queue);
    }

    pub fn queue_push_fifo(&mut self, queue: QueueId, proc: ProcId) {
        self.queue_push(queue, proc, None);
    }

    pub fn queue_push_ranked(&mut self, queue: QueueId, proc: ProcId, rank: Rank) {
        self.queue_push(queue, proc, Some(rank));
    }

    pub fn queue_pop(&mut self, queue: QueueId) -> Option<ProcId> {
        let q = self.queues.get_mut(queue)?;
        let proc = match q {
            RunQueue::Fifo { procs } => procs.pop_front(),
            RunQueue::Ranked { procs } => procs.pop().map(|(p, _)| p),
        }?;

        let removed = self.proc_to_queue.remove(&proc);
        debug_assert!(removed.is_some(), "process {proc} missing queue membership");

        Some(proc)
    }

    pub fn proc_in_any_queue(&self, proc: ProcId) -> bool {
        self.proc_to_queue.contains_key(&proc)
    }

    // Unarrived processes whose arrival time has been reached, in id order.
    pub fn due_arrivals(&self) -> Vec<ProcId> {
        self.procs
            .iter()
            .filter(|p| p.phase == ProcPhase::Unarrived && p.arrival_time <= self.now)
            .map(|p| p.id)
            .collect()
    }

    /// Arrived, unfinished processes in id order.
    pub fn ready_procs(&self) -> impl Iterator<Item = &ProcEntry> {
        self.procs.iter().filter(|p| p.phase == ProcPhase::Ready)
    }

    pub fn all_finished(&self) -> bool {
        self.procs.iter().all(|p| p.phase == ProcPhase::Finished)
    }

    pub fn mark_ready(&mut self, proc: ProcId) {
        let entry = self.proc_mut(proc);
        debug_assert!(
            entry.phase == ProcPhase::Unarrived || entry.phase == ProcPhase::Running,
            "process {proc} cannot become Ready from {:?}",
            entry.phase
        );
        entry.phase = ProcPhase::Ready;
    }

    pub fn set_running(&mut self, proc: ProcId) {
        debug_assert!(
            !self.proc_to_queue.contains_key(&proc),
            "running process {proc} must not be enqueued"
        );
        let entry = self.proc_mut(proc);
        debug_assert!(
            entry.phase == ProcPhase::Ready,
            "process {proc} must be Ready when dispatched"
        );
        entry.phase = ProcPhase::Running;
    }

    pub fn consume(&mut self, proc: ProcId, len: Ticks) {
        let entry = self.proc_mut(proc);
        debug_assert!(
            len > 0 && len <= entry.remaining,
            "slice of {len} exceeds remaining work of process {proc}"
        );
        entry.remaining -= len;
    }

    pub fn mark_finished(&mut self, proc: ProcId, completion_time: Ticks) {
        debug_assert!(
            !self.proc_to_queue.contains_key(&proc),
            "finishing process {proc} that is still enqueued"
        );

        let entry = self.proc_mut(proc);
        debug_assert!(
            entry.phase == ProcPhase::Running,
            "process {proc} must have been running before completion"
        );
        debug_assert_eq!(entry.remaining, 0, "process {proc} finished with work left");

        entry.phase = ProcPhase::Finished;
        entry.completion_time = Some(completion_time);
    }
}

impl Default for CpuCtx {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn rank_orders_by_key_then_earlier_id() {
        let mut q: KeyedPriorityQueue<ProcId, Rank> = KeyedPriorityQueue::new();
        q.push(0, Rank { key: 2, id: 0 });
        q.push(1, Rank { key: 5, id: 1 });
        q.push(2, Rank { key: 5, id: 2 });

        assert_eq!(q.pop().map(|(p, _)| p), Some(1));
        assert_eq!(q.pop().map(|(p, _)| p), Some(2));
        assert_eq!(q.pop().map(|(p, _)| p), Some(0));
    }

    #[test]
    fn queue_membership_tracks_push_and_pop() {
        let mut ctx = CpuCtx::new();
        let proc = ctx.create_proc(0, 3, 0);
        ctx.mark_ready(proc);

        let queue = ctx.create_fifo_queue();
        ctx.queue_push_fifo(queue, proc);
        assert!(ctx.proc_in_any_queue(proc));

        assert_eq!(ctx.queue_pop(queue), Some(proc));
        assert!(!ctx.proc_in_any_queue(proc));
        assert_eq!(ctx.queue_pop(queue), None);
    }
}
