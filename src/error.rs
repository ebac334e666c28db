//! Error types for the trial aggregator.

use thiserror::Error;

/// Errors surfaced by [`crate::simulation::engine`].
///
/// The game model itself is total over the fixed 3-door domain; the only
/// possible failure is an invalid trial count, rejected before any trial runs
/// so no partial results are ever produced.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimulationError {
    /// Trial count must be at least 1.
    #[error("invalid trial count: {0} (must be >= 1)")]
    InvalidTrialCount(usize),
}
