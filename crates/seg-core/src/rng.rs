//! Deterministic model-level RNG wrapper.
//!
//! # Determinism strategy
//!
//! The model owns exactly one `SimRng`, seeded from `ModelConfig::seed`, and
//! threads it explicitly through every random decision: construction
//! sampling, the per-tick activation shuffle, and empty-cell selection.  No
//! implicit global source is ever consulted, so a (seed, config, step-count)
//! triple fully determines a run.
//!
//! The activation loop is single-threaded, so one generator is enough; there
//! is no per-agent RNG state to keep disjoint.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Model-level deterministic RNG.
///
/// A thin wrapper over `SmallRng` exposing only the operations the simulator
/// uses, so call sites stay free of `rand` trait imports.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.0);
    }

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
