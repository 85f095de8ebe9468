// Tag sampler trait — swap-ready source of randomness.
//
// The local generator draws tags uniformly without replacement. A Sampler
// hands out one RNG per generation call, and every draw in that call
// consumes it in turn. Production uses the thread RNG; tests and the CLI
// `--seed` flag use a seeded StdRng so the same inputs always give the same
// hashtags.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{RngCore, SeedableRng};

/// Source of the RNG used for one generation call.
pub trait Sampler: Send + Sync {
    fn rng(&self) -> Box<dyn RngCore>;
}

/// Thread-RNG sampler used outside of tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomSampler;

impl Sampler for RandomSampler {
    fn rng(&self) -> Box<dyn RngCore> {
        Box::new(rand::rng())
    }
}

/// Deterministic sampler: each generation call starts from the same seed.
#[derive(Debug, Clone, Copy)]
pub struct SeededSampler {
    pub seed: u64,
}

impl SeededSampler {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl Sampler for SeededSampler {
    fn rng(&self) -> Box<dyn RngCore> {
        Box::new(StdRng::seed_from_u64(self.seed))
    }
}

/// Draw up to `n` tags from `pool`. A pool smaller than `n` is returned whole, shuffled.
pub fn sample(pool: &[&'static str], n: usize, rng: &mut dyn RngCore) -> Vec<&'static str> {
    let mut shuffled = pool.to_vec();
    shuffled.shuffle(rng);
    shuffled.truncate(n);
    shuffled
}
