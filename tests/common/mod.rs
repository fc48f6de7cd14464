#![allow(dead_code)]

use motif_search_rs::sequence::RandomSource;

/// Replays a fixed list of draws, wrapping around when exhausted
pub struct FixedSource {
    draws: Vec<usize>,
    next: usize,
}

impl FixedSource {
    pub fn new(draws: &[usize]) -> Self {
        Self {
            draws: draws.to_vec(),
            next: 0,
        }
    }

    /// Number of draws consumed so far
    pub fn consumed(&self) -> usize {
        self.next
    }
}

impl RandomSource for FixedSource {
    fn next_index(&mut self, bound: usize) -> usize {
        let draw = self.draws[self.next % self.draws.len()];
        self.next += 1;
        assert!(draw < bound, "draw {} outside 0..{}", draw, bound);
        draw
    }
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}
