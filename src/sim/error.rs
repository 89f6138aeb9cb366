use std::error::Error;
use std::fmt::{self, Display};

use crate::core::state::ProcId;

/// Configuration problems, all caught synchronously before any simulation
/// state exists. There are no mid-run failures: a validated run is a pure
/// function of its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimError {
    /// Round-robin quantum was zero.
    InvalidQuantum,
    /// A process declared a zero burst time.
    ZeroBurst { id: ProcId },
    /// Process ids must be dense and match input order.
    NonDenseId { expected: ProcId, found: ProcId },
}

impl Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::InvalidQuantum => write!(f, "quantum must be a positive number of ticks"),
            SimError::ZeroBurst { id } => write!(f, "process {id} has a zero burst time"),
            SimError::NonDenseId { expected, found } => write!(
                f,
                "process ids must be dense and in input order, expected {expected} but found {found}"
            ),
        }
    }
}

impl Error for SimError {}
