//! Fast PRNG for simulation — SplitMix64 with a door-draw specialization.
//!
//! SplitMix64 has a single u64 state word (vs SmallRng's 128-byte Xoshiro256++),
//! which keeps the per-trial state tiny when running tens of millions of games.
//!
//! For the Monty Hall game, one complete realization needs two uniform door
//! draws plus at most one binary host choice, so an entire game is extracted
//! from a single u64 using non-overlapping bit ranges and multiply-high
//! extraction (no modulo bias beyond 3/65536 ≈ 0.005%, negligible for
//! simulation).

use crate::game::{remaining_door, Door, GameDraw};

/// SplitMix64 PRNG — single u64 state, excellent statistical quality.
#[derive(Clone)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    /// Create from seed.
    #[inline(always)]
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Generate next u64.
    #[inline(always)]
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e3779b97f4a7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
        z ^ (z >> 31)
    }

    /// Draw a single door (0-2) via multiply-high extraction:
    /// `((bits & 0xFFFF) * 3) >> 16` maps a 16-bit range to [0,2].
    #[inline(always)]
    pub fn draw_door(&mut self) -> Door {
        let r = self.next_u64();
        (((r & 0xFFFF) * 3) >> 16) as Door
    }

    /// Realize one complete game from a single PRNG call.
    ///
    /// Bit layout of the u64: car door from bits 0-15, player choice from
    /// bits 16-31, host coin from bit 32. The coin is only consulted when the
    /// player hit the car and the host has two goat doors to choose from;
    /// otherwise the host door is forced.
    #[inline(always)]
    pub fn draw_game(&mut self) -> GameDraw {
        let r = self.next_u64();
        let car_door = (((r & 0xFFFF) * 3) >> 16) as Door;
        let player_choice = ((((r >> 16) & 0xFFFF) * 3) >> 16) as Door;
        let host_opens = if player_choice == car_door {
            let (a, b) = match car_door {
                0 => (1, 2),
                1 => (0, 2),
                _ => (0, 1),
            };
            if (r >> 32) & 1 == 0 {
                a
            } else {
                b
            }
        } else {
            remaining_door(player_choice, car_door)
        };
        GameDraw {
            car_door,
            player_choice,
            host_opens,
        }
    }
}
