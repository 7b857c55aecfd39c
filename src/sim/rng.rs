// rng.rs - Injected randomness
//
// Components never reach for a global generator; they take a
// `&mut impl RandomSource` so tests can script every draw.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::Span;

/// Source of uniform floats.
pub trait RandomSource {
    /// Uniform draw in `[min, max]`. Returns `min` when the range is empty
    /// or its width is not a finite number.
    fn range(&mut self, min: f32, max: f32) -> f32;

    #[inline]
    fn span(&mut self, (min, max): Span) -> f32 {
        self.range(min, max)
    }
}

/// Default generator: ChaCha8, seeded per run.
pub struct SimRng(pub ChaCha8Rng);

impl SimRng {
    pub const DEFAULT_SEED: u64 = 42;

    pub fn from_seed_u64(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl Default for SimRng {
    fn default() -> Self {
        Self::from_seed_u64(Self::DEFAULT_SEED)
    }
}

impl RandomSource for SimRng {
    #[inline]
    fn range(&mut self, min: f32, max: f32) -> f32 {
        if !(max > min) || !(max - min).is_finite() {
            return min;
        }
        self.0.gen_range(min..=max)
    }
}
