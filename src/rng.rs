//! # RandomNumberGenerator
//!
//! The `RandomNumberGenerator` struct owns the single pseudo-random stream a run draws
//! from. Every operator that needs randomness takes it as `&mut`, so a run seeded with
//! [`RandomNumberGenerator::from_seed`] is fully reproducible.
//!
//! ## Example
//!
//! ```rust
//! use knapsack_ga::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(7);
//! let mut names = vec!["a", "b", "c", "d"];
//! rng.shuffle(&mut names);
//!
//! assert_eq!(names.len(), 4);
//! assert!(rng.gen_index(names.len()).unwrap() < 4);
//! assert_eq!(rng.gen_index(0), None);
//! ```

use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

/// A wrapper around the `rand` crate's `StdRng` exposing the draws the solver needs.
#[derive(Clone, Debug)]
pub struct RandomNumberGenerator {
    pub rng: StdRng,
}

impl RandomNumberGenerator {
    /// Creates a new `RandomNumberGenerator` instance seeded from the system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new `RandomNumberGenerator` instance with a specific seed.
    ///
    /// This is useful for reproducible runs, tests and benchmarks.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Shuffles the slice in place.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }

    /// Draws a uniform index in `0..len`, or `None` when `len` is zero.
    pub fn gen_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            None
        } else {
            Some(self.rng.gen_range(0..len))
        }
    }

    /// Draws a uniform integer in `from..=to`.
    ///
    /// # Panics
    ///
    /// Panics if `from > to`.
    pub fn gen_inclusive(&mut self, from: u32, to: u32) -> u32 {
        self.rng.gen_range(from..=to)
    }

    /// A fair coin: `true` for heads.
    pub fn coin_flip(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}
