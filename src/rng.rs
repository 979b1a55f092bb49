//! RNG module - seeded value generation for tiles and targets
//!
//! A simple LCG keeps the engine fully deterministic: the same seed
//! produces the same board, the same tile values, and the same sequence of
//! target sums. Tests inject fixed seeds instead of fighting a global
//! generator.

use crate::types::{TARGET_MAX, TARGET_MIN, TILE_MAX, TILE_MIN};

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
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Generate random value in range [lo, hi] inclusive
    pub fn next_between(&mut self, lo: u32, hi: u32) -> u32 {
        lo + self.next_range(hi - lo + 1)
    }

    /// Draw a tile value
    pub fn tile_value(&mut self) -> u8 {
        self.next_between(TILE_MIN, TILE_MAX) as u8
    }

    /// Draw a round target sum
    pub fn target_sum(&mut self) -> u32 {
        self.next_between(TARGET_MIN, TARGET_MAX)
    }

    /// Get the current RNG state (for restarting a session with a
    /// continuing sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
