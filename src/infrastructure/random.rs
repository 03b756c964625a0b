//! Random disambiguation suffixes

use crate::domain::{RandomSource, SUFFIX_RANGE};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Draws suffixes from the thread-local generator
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_disambiguator(&mut self) -> u32 {
        rand::thread_rng().gen_range(0..SUFFIX_RANGE)
    }
}

/// Reproducible suffixes from a fixed seed
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        SeededRandom {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_disambiguator(&mut self) -> u32 {
        self.rng.gen_range(0..SUFFIX_RANGE)
    }
}
