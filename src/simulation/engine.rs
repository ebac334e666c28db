//! Trial aggregator — runs N games per strategy and accumulates win counts.
//!
//! Three run modes, all seeded and reproducible:
//!
//! - [`simulate`]: unpaired (default). Each strategy consumes its own random
//!   sequence, so stay and switch outcomes are fully independent. This matches
//!   the per-strategy design: 2N games total.
//! - [`simulate_paired`]: one shared [`GameDraw`] per trial evaluated under
//!   both strategies. Lower variance, identical expected rates; since the two
//!   outcomes are logical complements for a fixed draw, stay and switch wins
//!   sum exactly to N.
//! - [`simulate_fast`]: unpaired, but using the SplitMix64 fast path that
//!   extracts a whole game from a single u64.
//!
//! Trials are distributed over rayon workers with a per-trial derived seed
//! (`base.wrapping_add(i)`), so each trial is an independent stream and the
//! counters combine by plain summation in any order.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use rayon::prelude::*;
use std::time::Instant;

use crate::error::SimulationError;
use crate::game::{play_one_game, GameDraw, Strategy};
use super::fast_prng::SplitMix64;

/// Results of one simulation run: win counts and derived percentage rates.
#[derive(Clone, Debug)]
pub struct SimulationResult {
    pub n_trials: usize,
    pub seed: u64,
    pub stay_wins: u64,
    pub switch_wins: u64,
    /// Stay win rate as a percentage in [0, 100].
    pub stay_rate: f64,
    /// Switch win rate as a percentage in [0, 100].
    pub switch_rate: f64,
    pub elapsed: std::time::Duration,
}

impl SimulationResult {
    fn from_counts(
        n_trials: usize,
        seed: u64,
        stay_wins: u64,
        switch_wins: u64,
        elapsed: std::time::Duration,
    ) -> Self {
        Self {
            n_trials,
            seed,
            stay_wins,
            switch_wins,
            stay_rate: 100.0 * stay_wins as f64 / n_trials as f64,
            switch_rate: 100.0 * switch_wins as f64 / n_trials as f64,
            elapsed,
        }
    }
}

/// Derive a per-strategy base seed so the two unpaired sequences never share
/// a per-trial seed. One SplitMix64 step scatters the tagged seed across the
/// full u64 range.
fn stream_seed(seed: u64, strategy: Strategy) -> u64 {
    let tag = match strategy {
        Strategy::Stay => 0x5354_4159,
        Strategy::Switch => 0x5357_4954,
    };
    SplitMix64::new(seed ^ tag).next_u64()
}

/// Count wins for one strategy over `n_trials` independent trials.
fn count_wins(strategy: Strategy, n_trials: usize, seed: u64) -> u64 {
    let base = stream_seed(seed, strategy);
    (0..n_trials)
        .into_par_iter()
        .filter(|&i| {
            let mut rng = SmallRng::seed_from_u64(base.wrapping_add(i as u64));
            play_one_game(strategy, &mut rng)
        })
        .count() as u64
}

/// Run `n_trials` independent games per strategy and derive win rates.
///
/// Stay and switch use independent random sequences (unpaired design), so the
/// two rates need not sum to 100. Rejects `n_trials == 0` before running
/// anything; no partial results are produced.
pub fn simulate(n_trials: usize, seed: u64) -> Result<SimulationResult, SimulationError> {
    if n_trials == 0 {
        return Err(SimulationError::InvalidTrialCount(n_trials));
    }
    let start = Instant::now();
    let stay_wins = count_wins(Strategy::Stay, n_trials, seed);
    let switch_wins = count_wins(Strategy::Switch, n_trials, seed);
    Ok(SimulationResult::from_counts(
        n_trials,
        seed,
        stay_wins,
        switch_wins,
        start.elapsed(),
    ))
}

/// Run `n_trials` games, evaluating each realized draw under both strategies.
///
/// Paired comparison: same car/player/host per trial, so per-trial outcomes
/// are complements and `stay_wins + switch_wins == n_trials` exactly. Expected
/// rates are unchanged; only the variance of the difference shrinks.
pub fn simulate_paired(n_trials: usize, seed: u64) -> Result<SimulationResult, SimulationError> {
    if n_trials == 0 {
        return Err(SimulationError::InvalidTrialCount(n_trials));
    }
    let start = Instant::now();
    let (stay_wins, switch_wins) = (0..n_trials)
        .into_par_iter()
        .map(|i| {
            let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(i as u64));
            let draw = GameDraw::random(&mut rng);
            (
                draw.outcome(Strategy::Stay) as u64,
                draw.outcome(Strategy::Switch) as u64,
            )
        })
        .reduce(|| (0, 0), |a, b| (a.0 + b.0, a.1 + b.1));
    Ok(SimulationResult::from_counts(
        n_trials,
        seed,
        stay_wins,
        switch_wins,
        start.elapsed(),
    ))
}

/// Unpaired run on the SplitMix64 fast path (one u64 per game).
pub fn simulate_fast(n_trials: usize, seed: u64) -> Result<SimulationResult, SimulationError> {
    if n_trials == 0 {
        return Err(SimulationError::InvalidTrialCount(n_trials));
    }
    let start = Instant::now();
    let mut wins = [0u64; 2];
    for (slot, strategy) in Strategy::ALL.iter().enumerate() {
        let base = stream_seed(seed, *strategy);
        wins[slot] = (0..n_trials)
            .into_par_iter()
            .filter(|&i| {
                let mut rng = SplitMix64::new(base.wrapping_add(i as u64));
                rng.draw_game().outcome(*strategy)
            })
            .count() as u64;
    }
    Ok(SimulationResult::from_counts(
        n_trials,
        seed,
        wins[0],
        wins[1],
        start.elapsed(),
    ))
}
