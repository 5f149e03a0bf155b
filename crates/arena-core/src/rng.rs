//! Seeded randomness for map generation
//!
//! A map is a pure function of its configuration and the seed fed to
//! `MapRng`, so replaying a seed rebuilds the same arena.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Random source threaded through layout, carving and cover rolls
///
/// Serializes as its bare seed; a deserialized source starts the stream
/// from the beginning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "u64", into = "u64")]
pub struct MapRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl From<u64> for MapRng {
    fn from(seed: u64) -> Self {
        MapRng::new(seed)
    }
}

impl From<MapRng> for u64 {
    fn from(rng: MapRng) -> Self {
        rng.seed
    }
}

impl MapRng {
    pub fn new(seed: u64) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(seed);
        Self { rng, seed }
    }

    /// Fresh source with a seed drawn from the thread RNG
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Seed this source was built from
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform value in [0, 1)
    pub fn value(&mut self) -> f32 {
        self.rng.r#gen::<f32>()
    }

    /// Integer in the half-open range [lo, hi)
    ///
    /// Returns `lo` if the range is empty.
    pub fn range(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        self.rng.gen_range(lo..hi)
    }

    /// Integer in the closed range [lo, hi]
    ///
    /// Returns `lo` if `hi < lo`.
    pub fn range_inclusive(&mut self, lo: i32, hi: i32) -> i32 {
        if hi < lo {
            return lo;
        }
        self.rng.gen_range(lo..=hi)
    }

    /// Float in [lo, hi); returns `lo` for an empty range
    pub fn range_f32(&mut self, lo: f32, hi: f32) -> f32 {
        if hi <= lo {
            return lo;
        }
        self.rng.gen_range(lo..hi)
    }

    /// Returns true with probability `p`; anything >= 1.0 always succeeds
    pub fn chance(&mut self, p: f32) -> bool {
        self.value() < p
    }
}

impl Default for MapRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}
