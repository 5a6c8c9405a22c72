//! Seeded random helper for generating check inputs.
//!
//! The seed is reported once at session start so a failing run can be
//! replayed with `UTH_SEED` or `run.seed`.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::distr::uniform::SampleUniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Deterministic generator remembering its seed.
#[derive(Debug, Clone)]
pub struct UthRng {
    seed: u64,
    rng: StdRng,
}

impl UthRng {
    /// Deterministic generator for `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded from the wall clock, in whole seconds.
    #[must_use]
    pub fn from_clock() -> Self {
        Self::new(clock_seed())
    }

    /// `Some(seed)` replays a run; `None` seeds from the clock.
    #[must_use]
    pub fn from_seed_or_clock(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_clock, Self::new)
    }

    /// Seed to pass back in to replay the run.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform value in `[min, max)`. Returns `min` for an empty range.
    pub fn rand_range<T>(&mut self, min: T, max: T) -> T
    where
        T: SampleUniform + PartialOrd,
    {
        if min < max {
            self.rng.random_range(min..max)
        } else {
            min
        }
    }

    /// Fair coin.
    pub fn rand_bool(&mut self) -> bool {
        self.rng.random_bool(0.5)
    }

    /// Underlying generator, for anything beyond the helpers above.
    pub fn inner(&mut self) -> &mut StdRng {
        &mut self.rng
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_secs())
}
