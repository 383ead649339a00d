//! Random number generation
//!
//! Uses a seeded ChaCha RNG for reproducibility. Task resolution is written
//! against the [`RngSource`] trait so tests can force outcomes
//! deterministically.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Source of randomness for task resolution.
pub trait RngSource {
    /// Uniform draw in `[0, 1)`.
    fn uniform(&mut self) -> f64;

    /// Uniform integer draw in `lo..=hi`.
    fn range(&mut self, lo: u32, hi: u32) -> u32;
}

/// Game random number generator
///
/// Wraps ChaCha8Rng for reproducible random number generation.
/// Only the seed is serialized; a restored generator restarts its stream.
#[derive(Debug, Clone)]
pub struct GameRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl Serialize for GameRng {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.seed.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for GameRng {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let seed = u64::deserialize(deserializer)?;
        Ok(GameRng::new(seed))
    }
}

impl GameRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG with a random seed
    pub fn from_entropy() -> Self {
        let seed = rand::random();
        Self::new(seed)
    }

    /// Get the seed used to create this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RngSource for GameRng {
    fn uniform(&mut self) -> f64 {
        self.rng.gen_range(0.0..1.0)
    }

    fn range(&mut self, lo: u32, hi: u32) -> u32 {
        if lo >= hi {
            return lo;
        }
        self.rng.gen_range(lo..=hi)
    }
}

/// Rng source that always returns the same draw.
///
/// Forces a task outcome: `FixedRoll(0.0)` always succeeds, `FixedRoll(1.0)`
/// always fails. Ranged draws return their lower bound.
#[derive(Debug, Clone, Copy)]
pub struct FixedRoll(pub f64);

impl RngSource for FixedRoll {
    fn uniform(&mut self) -> f64 {
        self.0
    }

    fn range(&mut self, lo: u32, _hi: u32) -> u32 {
        lo
    }
}
