//! One-game model: door draws, the host rule, and the win/loss outcome.
//!
//! A game is three draws — car door, player choice, host door — followed by a
//! pure evaluation under either strategy. All door operations are total over
//! the fixed 3-door set: the host always has at least one door to open (one
//! when the player missed the car, two when they hit it), and under switch
//! exactly one door remains after removing two distinct doors from three.

use rand::Rng;

/// Door index in `0..DOOR_COUNT`.
pub type Door = u8;

/// Number of doors. Fixed; every function below assumes exactly 3.
pub const DOOR_COUNT: usize = 3;

/// The contestant's decision strategy.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Strategy {
    /// Final choice equals the initial pick.
    Stay,
    /// Final choice is the unopened door that is neither the initial pick
    /// nor the host-opened door.
    Switch,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Stay, Strategy::Switch];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Stay => "stay",
            Strategy::Switch => "switch",
        }
    }
}

/// Draw one door uniformly at random.
#[inline(always)]
pub fn draw_door(rng: &mut impl Rng) -> Door {
    rng.random_range(0..DOOR_COUNT as Door)
}

/// Draw the door the host opens: uniform over the doors that are neither the
/// player's pick nor the car door.
///
/// When the player's pick differs from the car door the candidate set is a
/// singleton; when they coincide the host picks uniformly between the two
/// goat doors. The second case cannot change the final outcome, but the draw
/// is still performed so the host's action is modeled faithfully.
#[inline(always)]
pub fn draw_host_door(car: Door, player: Door, rng: &mut impl Rng) -> Door {
    let mut candidates = [0 as Door; 2];
    let mut n = 0usize;
    for d in 0..DOOR_COUNT as Door {
        if d != player && d != car {
            candidates[n] = d;
            n += 1;
        }
    }
    candidates[rng.random_range(0..n)]
}

/// The unique door that is neither `a` nor `b`.
///
/// Door indices sum to 3, so the remaining door is the complement of the
/// other two. Requires `a != b`. This is both the host's forced door when the
/// player missed the car, and the contestant's final choice under switch.
#[inline(always)]
pub fn remaining_door(a: Door, b: Door) -> Door {
    3 - a - b
}

/// One realized game: car placement, initial pick, and the host's door.
///
/// Constructed fresh per trial and evaluated under either strategy via
/// [`GameDraw::outcome`]. For a fixed draw, stay and switch outcomes are
/// logical complements.
#[derive(Clone, Copy, Debug)]
pub struct GameDraw {
    pub car_door: Door,
    pub player_choice: Door,
    pub host_opens: Door,
}

impl GameDraw {
    /// Realize one game: uniform car door, independent uniform player choice,
    /// host door per the host rule.
    pub fn random(rng: &mut impl Rng) -> Self {
        let car_door = draw_door(rng);
        let player_choice = draw_door(rng);
        let host_opens = draw_host_door(car_door, player_choice, rng);
        Self {
            car_door,
            player_choice,
            host_opens,
        }
    }

    /// Whether the contestant wins this draw under `strategy`.
    #[inline(always)]
    pub fn outcome(&self, strategy: Strategy) -> bool {
        let final_choice = match strategy {
            Strategy::Stay => self.player_choice,
            Strategy::Switch => remaining_door(self.player_choice, self.host_opens),
        };
        final_choice == self.car_door
    }
}

/// Play one fresh game under `strategy`, returning the win/loss outcome.
///
/// Each call is an independent trial; the only shared state is `rng`.
pub fn play_one_game(strategy: Strategy, rng: &mut impl Rng) -> bool {
    GameDraw::random(rng).outcome(strategy)
}
