pub mod driver;
pub mod error;
pub mod process;

pub use driver::{Sim, SimReport};
pub use error::SimError;
pub use process::{Process, ProcessReport};
