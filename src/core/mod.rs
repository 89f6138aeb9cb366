pub mod driver;
pub mod observer;
pub mod state;
pub mod timeline;

pub use driver::Engine;
pub use observer::Observer;
pub use state::{CpuCtx, ProcEntry, ProcId, ProcPhase, QueueId, Rank, RunQueue, Ticks};
pub use timeline::{Segment, Timeline};
