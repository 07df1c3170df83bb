//! Random number generation for floor building
//!
//! Uses a seeded ChaCha RNG so that generation is reproducible: the same seed
//! and the same ordered sequence of draws produce bit-identical floors across
//! processes and platforms.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Floor random number generator
///
/// Wraps `ChaCha8Rng` for reproducible generation. Each [`crate::dungeon::Floor`]
/// owns exactly one `FloorRng`; nothing in this crate touches a global RNG.
#[derive(Debug, Clone)]
pub struct FloorRng {
    rng: ChaCha8Rng,
    seed: u64,
}

// Custom serialization - only the seed is persisted, the stream is recreated
// on deserialize.
impl Serialize for FloorRng {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.seed.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for FloorRng {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let seed = u64::deserialize(deserializer)?;
        Ok(FloorRng::new(seed))
    }
}

impl FloorRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Get the seed used to create this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform integer in `lo..=hi` (inclusive both ends)
    ///
    /// Returns `lo` if the range is empty or inverted.
    pub fn int_range(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        self.rng.gen_range(lo..=hi)
    }

    /// Uniform float in `[0, 1)`
    pub fn next_float(&mut self) -> f64 {
        self.rng.gen_range(0.0..1.0)
    }

    /// Fair coin flip
    pub fn coin_flip(&mut self) -> bool {
        self.rng.gen_range(0..2) == 0
    }

    /// Choose a random element from a slice
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            None
        } else {
            let idx = self.rng.gen_range(0..items.len());
            Some(&items[idx])
        }
    }

    /// Shuffle a slice in place (Fisher-Yates)
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.rng.gen_range(0..=i);
            items.swap(i, j);
        }
    }
}
