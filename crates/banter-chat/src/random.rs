//! [`IRandomSource`] implementations: a thread-RNG source for production
//! and a seeded source for deterministic tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use banter_core::traits::IRandomSource;

/// Production source backed by the thread-local RNG.
#[derive(Default)]
pub struct ThreadRandom;

impl IRandomSource for ThreadRandom {
    fn pick(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        rand::thread_rng().gen_range(0..len)
    }
}

/// Deterministic source for tests: same seed, same pick sequence.
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

impl IRandomSource for SeededRandom {
    fn pick(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.gen_range(0..len)
    }
}
