//! Property-based tests for the game model and trial aggregator.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

// `monty::game::Strategy` is referenced by full path: the proptest prelude
// exports its own `Strategy` trait.
use monty::game::{draw_host_door, remaining_door, GameDraw, DOOR_COUNT};
use monty::{simulate, simulate_paired, SimulationError};

/// Strategy: generate a valid door index (0-2).
fn door_strategy() -> impl Strategy<Value = u8> {
    0..DOOR_COUNT as u8
}

proptest! {
    // 1. The host never opens the player's door or the car door.
    #[test]
    fn host_door_is_legal(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let draw = GameDraw::random(&mut rng);
        prop_assert!((draw.host_opens as usize) < DOOR_COUNT);
        prop_assert_ne!(draw.host_opens, draw.player_choice);
        prop_assert_ne!(draw.host_opens, draw.car_door);
    }

    // 2. The host draw is legal for every (car, player) pair, not just random ones.
    #[test]
    fn host_door_is_legal_for_all_pairs(
        car in door_strategy(),
        player in door_strategy(),
        seed in any::<u64>(),
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let host = draw_host_door(car, player, &mut rng);
        prop_assert!((host as usize) < DOOR_COUNT);
        prop_assert_ne!(host, player);
        prop_assert_ne!(host, car);
    }

    // 3. The switch target is always defined and distinct from both inputs.
    #[test]
    fn remaining_door_distinct(a in door_strategy(), b in door_strategy()) {
        prop_assume!(a != b);
        let c = remaining_door(a, b);
        prop_assert!((c as usize) < DOOR_COUNT);
        prop_assert_ne!(c, a);
        prop_assert_ne!(c, b);
    }

    // 4. For a fixed draw, stay and switch outcomes are logical complements.
    #[test]
    fn outcomes_are_complements(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let draw = GameDraw::random(&mut rng);
        prop_assert_ne!(
            draw.outcome(monty::Strategy::Stay),
            draw.outcome(monty::Strategy::Switch)
        );
    }

    // 5. Rates are always percentages and win counts are bounded by N.
    #[test]
    fn rates_in_range(n in 1..200usize, seed in any::<u64>()) {
        let result = simulate(n, seed).unwrap();
        prop_assert!(result.stay_rate >= 0.0 && result.stay_rate <= 100.0);
        prop_assert!(result.switch_rate >= 0.0 && result.switch_rate <= 100.0);
        prop_assert!(result.stay_wins <= n as u64);
        prop_assert!(result.switch_wins <= n as u64);
    }

    // 6. Same seed, same result.
    #[test]
    fn simulate_deterministic(n in 1..100usize, seed in any::<u64>()) {
        let r1 = simulate(n, seed).unwrap();
        let r2 = simulate(n, seed).unwrap();
        prop_assert_eq!(r1.stay_wins, r2.stay_wins);
        prop_assert_eq!(r1.switch_wins, r2.switch_wins);
    }

    // 7. Paired mode partitions N between the two strategies.
    #[test]
    fn paired_wins_partition_n(n in 1..200usize, seed in any::<u64>()) {
        let result = simulate_paired(n, seed).unwrap();
        prop_assert_eq!(result.stay_wins + result.switch_wins, n as u64);
    }
}

// 8. Zero trials is rejected before any work runs.
#[test]
fn zero_trials_is_invalid() {
    assert_eq!(
        simulate(0, 42).unwrap_err(),
        SimulationError::InvalidTrialCount(0)
    );
}

// 9. Large-sample convergence: ±2 points of the analytic rates at 100k trials.
#[test]
fn rates_converge_to_one_third_and_two_thirds() {
    let result = simulate(100_000, 42).unwrap();
    assert!(
        (result.stay_rate - 100.0 / 3.0).abs() < 2.0,
        "stay rate {:.2}%",
        result.stay_rate
    );
    assert!(
        (result.switch_rate - 200.0 / 3.0).abs() < 2.0,
        "switch rate {:.2}%",
        result.switch_rate
    );
}
