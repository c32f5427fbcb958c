//! RNG module - seeded tile spawning
//!
//! New tiles are placed on a uniformly chosen empty cell. The tile itself is
//! a 2 (90%), a 4 (9%) or a special `P` tile (1%).
//!
//! The generator is a simple LCG so that a seed fully determines a game,
//! which keeps tests and benchmarks reproducible.

use crate::types::{Tile, SPAWN_FOUR_PERCENT, SPAWN_TWO_PERCENT};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits (multiply-shift); the low bits of an LCG cycle with
    /// a short period.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Pick one element uniformly, `None` for an empty slice
    pub fn pick<T: Copy>(&mut self, items: &[T]) -> Option<T> {
        if items.is_empty() {
            return None;
        }
        let idx = self.next_range(items.len() as u32) as usize;
        items.get(idx).copied()
    }

    /// Roll the kind of tile to spawn
    pub fn spawn_tile(&mut self) -> Tile {
        let roll = self.next_range(100);
        if roll < SPAWN_TWO_PERCENT {
            Tile::Value(2)
        } else if roll < SPAWN_TWO_PERCENT + SPAWN_FOUR_PERCENT {
            Tile::Value(4)
        } else {
            Tile::Special
        }
    }

    /// Current RNG state (a reset keeps drawing from the same stream)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
