//! Uniform index selection for the random vote paths.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// Picks an index uniformly from `0..len`.
///
/// Callers guarantee `len > 0`.
pub trait RandomSource: Send + Sync {
    fn pick(&self, len: usize) -> usize;

    /// Human-readable name of this source.
    fn name(&self) -> &str;
}

/// Thread-local OS-seeded generator.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }

    fn name(&self) -> &str {
        "thread-random"
    }
}

/// Reproducible generator seeded from a `u64`.
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn pick(&self, len: usize) -> usize {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.gen_range(0..len)
    }

    fn name(&self) -> &str {
        "seeded-random"
    }
}
