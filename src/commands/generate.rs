//! Seeded random parking sessions.
//!
//! Produces valid sessions (`start <= end`) for cross-checking, with
//! deterministic reproducibility via seed.

use crate::interval::Interval;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Random session source.
#[derive(Debug, Clone)]
pub struct SessionGenerator {
    rng: SmallRng,
    /// Latest possible arrival
    horizon: u64,
    /// Longest possible stay (zero-length stays are included)
    max_duration: u64,
}

impl SessionGenerator {
    /// Create a generator seeded with `seed`.
    pub fn new(seed: u64, horizon: u64, max_duration: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            horizon,
            max_duration,
        }
    }

    /// Draw one session.
    pub fn session(&mut self) -> Interval {
        let start = self.rng.gen_range(0..=self.horizon);
        let duration = self.rng.gen_range(0..=self.max_duration);
        Interval::new(start, start.saturating_add(duration))
    }

    /// Draw `count` sessions.
    pub fn sessions(&mut self, count: usize) -> Vec<Interval> {
        (0..count).map(|_| self.session()).collect()
    }
}
