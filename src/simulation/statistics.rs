//! Statistics aggregation from simulation results.
//!
//! Turns a [`SimulationResult`] into a serializable summary with per-strategy
//! win counts and rates, and writes it as pretty JSON.

use serde::Serialize;

use crate::game::Strategy;

use super::engine::SimulationResult;

#[derive(Serialize)]
pub struct SimulationStatistics {
    pub n_trials: u64,
    pub seed: u64,
    /// Whether stay and switch shared the same per-trial draw.
    pub paired: bool,
    pub stay: StrategyStatistics,
    pub switch: StrategyStatistics,
}

#[derive(Serialize)]
pub struct StrategyStatistics {
    pub strategy: &'static str,
    pub trials: u64,
    pub wins: u64,
    /// Win rate as a percentage in [0, 100].
    pub win_rate: f64,
}

/// Build the summary for one completed run.
pub fn aggregate_statistics(result: &SimulationResult, paired: bool) -> SimulationStatistics {
    SimulationStatistics {
        n_trials: result.n_trials as u64,
        seed: result.seed,
        paired,
        stay: StrategyStatistics {
            strategy: Strategy::Stay.name(),
            trials: result.n_trials as u64,
            wins: result.stay_wins,
            win_rate: result.stay_rate,
        },
        switch: StrategyStatistics {
            strategy: Strategy::Switch.name(),
            trials: result.n_trials as u64,
            wins: result.switch_wins,
            win_rate: result.switch_rate,
        },
    }
}

/// Write statistics as pretty JSON, creating parent directories as needed.
pub fn save_statistics(stats: &SimulationStatistics, path: &str) {
    if let Some(parent) = std::path::Path::new(path).parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let json = serde_json::to_string_pretty(stats).expect("Failed to serialize statistics");
    std::fs::write(path, json).expect("Failed to write statistics file");
}
