//! Deterministic random number generation for dice rounds.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical rounds
//! - **Forkable**: Create independent generators for consecutive rounds
//! - **Context streams**: Independent sequences for budget and dice draws
//!
//! ## Usage
//!
//! ```
//! use schocken::core::GameRng;
//!
//! let rng = GameRng::new(42);
//!
//! // Budget and dice draws never consume each other's randomness
//! let mut budget = rng.for_context("budget");
//! let mut dice = rng.for_context("dice");
//!
//! let base = budget.gen_range_u32(1..=3);
//! assert!((1..=3).contains(&base));
//! assert!((1..=6).contains(&dice.roll_die()));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHasher;
use std::hash::Hasher;
use std::ops::RangeInclusive;

/// Deterministic RNG with forking and named context streams.
///
/// Uses ChaCha8 for speed while keeping uniform, reproducible draws.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Seed of this generator.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent generator.
    ///
    /// Each fork produces a different but deterministic sequence, so a
    /// session can hand every round its own generator.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    /// The context seed is the `FxHasher` digest of the seed and the context
    /// bytes.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let mut hasher = FxHasher::default();
        hasher.write_u64(self.seed);
        hasher.write(context.as_bytes());
        let context_seed = hasher.finish();

        Self {
            inner: ChaCha8Rng::seed_from_u64(context_seed),
            seed: context_seed,
            fork_counter: 0,
        }
    }

    /// Roll one six-sided die.
    pub fn roll_die(&mut self) -> u8 {
        self.inner.gen_range(1..=6)
    }

    /// Generate a uniform integer in the given inclusive range.
    pub fn gen_range_u32(&mut self, range: RangeInclusive<u32>) -> u32 {
        self.inner.gen_range(range)
    }
}
