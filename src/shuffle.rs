//! Fisher–Yates shuffling of word sequences.
//!
//! All functions return a fresh `Vec` and leave the input untouched.

use rand::Rng;

/// Uniformly random permutation using the thread-local generator.
pub fn shuffle<T: Clone>(items: &[T]) -> Vec<T> {
    shuffle_with_rng(items, &mut rand::thread_rng())
}

/// Uniformly random permutation drawing from `rng`.
pub fn shuffle_with_rng<T: Clone, R: Rng>(items: &[T], rng: &mut R) -> Vec<T> {
    fisher_yates(items, |upper| rng.gen_range(0..=upper))
}

/// Reproducible permutation keyed by `seed`.
///
/// Uses [`SeededLcg`] as the random source, so the same seed and input always
/// produce the same order. Intended for tests and replays, not for play.
pub fn shuffle_with_seed<T: Clone>(items: &[T], seed: u64) -> Vec<T> {
    let mut lcg = SeededLcg::new(seed);
    fisher_yates(items, |upper| lcg.next_index(upper))
}

fn fisher_yates<T: Clone>(items: &[T], mut draw: impl FnMut(usize) -> usize) -> Vec<T> {
    let mut shuffled = items.to_vec();
    if shuffled.len() <= 1 {
        return shuffled;
    }

    for i in (1..shuffled.len()).rev() {
        let j = draw(i);
        debug_assert!(j <= i);
        shuffled.swap(i, j);
    }

    shuffled
}

/// Small linear-congruential generator (`x = (x * 9301 + 49297) mod 233280`).
#[derive(Debug, Clone)]
pub struct SeededLcg {
    state: u64,
}

impl SeededLcg {
    const MULTIPLIER: u64 = 9301;
    const INCREMENT: u64 = 49297;
    const MODULUS: u64 = 233_280;

    pub fn new(seed: u64) -> Self {
        Self {
            state: seed % Self::MODULUS,
        }
    }

    /// Next value in `[0, 1)`.
    pub fn next_unit(&mut self) -> f64 {
        self.state = (self.state * Self::MULTIPLIER + Self::INCREMENT) % Self::MODULUS;
        self.state as f64 / Self::MODULUS as f64
    }

    /// Next integer in `[0, upper]`.
    pub fn next_index(&mut self, upper: usize) -> usize {
        let j = (self.next_unit() * (upper + 1) as f64).floor() as usize;
        j.min(upper)
    }
}
