//! # Monty — Monty Hall strategy simulator
//!
//! Estimates the empirical win probability of the two Monty Hall decision
//! strategies — **stay** with the initial pick, or **switch** to the remaining
//! unopened door — by running many independent random trials and counting wins.
//!
//! ## Structure
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`game`] | One-game model: door draws, the host's door-opening rule, win/loss outcome |
//! | [`simulation`] | Trial aggregator (seeded, parallel) and statistics |
//! | [`report`] | Formatted win-rate lines and the two-bar chart |
//!
//! The host rule is the whole puzzle: after the contestant's initial pick, the
//! host opens a door that is neither the pick nor the car door. Staying wins
//! with probability 1/3; switching wins with probability 2/3. The simulator
//! reproduces both rates empirically from seeded, reproducible random streams.

pub mod env_config;
pub mod error;
pub mod game;
pub mod report;
pub mod simulation;

pub use error::SimulationError;
pub use game::{GameDraw, Strategy};
pub use simulation::engine::{simulate, simulate_fast, simulate_paired, SimulationResult};
