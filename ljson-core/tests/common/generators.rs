//! Stochastic reformatting for test variations
//!
//! Uses seeded RNG for reproducibility. Print seed on failure for replay.

use ljson_core::IndentConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded generator for reproducible stochastic tests
pub struct Gen {
    pub rng: StdRng,
    pub seed: u64,
}

impl Gen {
    /// Create with specific seed (for reproduction)
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create from environment or random seed
    pub fn from_env_or_random() -> Self {
        let seed = std::env::var("LJSON_TEST_SEED")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(rand::random);
        Self::new(seed)
    }

    /// Geometric distribution: count until rand > alpha
    pub fn geometric(&mut self, alpha: f64) -> usize {
        let mut n = 0;
        while self.rng.gen::<f64>() < alpha {
            n += 1;
        }
        n
    }

    /// Random boolean with probability p
    pub fn chance(&mut self, p: f64) -> bool {
        self.rng.gen::<f64>() < p
    }

    /// A random (but parseable) indentation config: spaces or tabs,
    /// width 0..=8.
    pub fn indent_config(&mut self) -> IndentConfig {
        let pad = if self.chance(0.3) { '\t' } else { ' ' };
        let width = self.rng.gen_range(0..=8);
        IndentConfig::new(pad, width)
    }
}
