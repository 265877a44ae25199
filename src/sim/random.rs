//! Injectable random source
//!
//! AI choices, loot rolls and level layout all draw through this trait so a
//! run is reproducible from its seed, and tests can script exact draws.

use rand::Rng;
use rand_pcg::Pcg32;

pub trait RandomSource {
    /// Uniform draw in `0..n`. Returns 0 when `n <= 1`.
    fn roll(&mut self, n: u32) -> u32;

    /// Uniform draw in `lo..=hi`. Returns `lo` for an empty range.
    fn range_inclusive(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        let span = (hi as i64 - lo as i64 + 1).min(u32::MAX as i64) as u32;
        (lo as i64 + self.roll(span) as i64) as i32
    }
}

impl RandomSource for Pcg32 {
    fn roll(&mut self, n: u32) -> u32 {
        if n <= 1 {
            return 0;
        }
        self.random_range(0..n)
    }
}

/// Replays a fixed list of draws, cycling when exhausted
///
/// Each draw is reduced modulo the requested bound.
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    values: Vec<u32>,
    cursor: usize,
}

impl SequenceRandom {
    pub fn new(values: Vec<u32>) -> Self {
        Self { values, cursor: 0 }
    }

    /// Always draws the same value
    pub fn constant(value: u32) -> Self {
        Self::new(vec![value])
    }
}

impl RandomSource for SequenceRandom {
    fn roll(&mut self, n: u32) -> u32 {
        if n <= 1 || self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor = self.cursor.wrapping_add(1);
        value % n
    }
}
