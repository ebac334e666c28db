//! Trial simulation and statistics.
//!
//! - [`engine`]: Core aggregator (run N trials per strategy, count wins)
//! - [`fast_prng`]: SplitMix64 fast path (one u64 per game)
//! - [`statistics`]: Serializable run summaries and JSON output

pub mod engine;
pub mod fast_prng;
pub mod statistics;

// Re-export commonly used items
pub use engine::{simulate, simulate_fast, simulate_paired, SimulationResult};
pub use fast_prng::SplitMix64;
pub use statistics::{aggregate_statistics, save_statistics, SimulationStatistics};
