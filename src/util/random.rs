use rand::distr::{Distribution, StandardUniform, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Source of pseudo-random draws.
///
/// Passed by `&mut` into every consumer so that seeding, replaying and
/// scripting draws in tests stays explicit.
pub trait RandomSource {
    /// Uniform integer in `[0, bound)`. `bound` must be positive.
    fn next_int(&mut self, bound: usize) -> usize;

    /// Uniform float in `[0, 1)`.
    fn next_double(&mut self) -> f64;

    fn next_bool(&mut self) -> bool;
}

/// Reproducible random source: the same seed always yields the same sequence.
#[derive(Debug)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_int(&mut self, bound: usize) -> usize {
        match Uniform::new(0, bound) {
            Ok(dist) => dist.sample(&mut self.rng),
            // empty range; callers never ask for it
            Err(_) => 0,
        }
    }

    fn next_double(&mut self) -> f64 {
        StandardUniform.sample(&mut self.rng)
    }

    fn next_bool(&mut self) -> bool {
        StandardUniform.sample(&mut self.rng)
    }
}
