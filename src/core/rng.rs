//! Deterministic random number generation for roster building.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the same roster
//! - **Seed recall**: `seed()` reports the seed so a session can be rerun
//!
//! ```
//! use card_brawl::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let stat = rng.roll(1, 10);
//! assert!((1..=10).contains(&stat));
//!
//! // Same seed, same sequence
//! let mut again = GameRng::new(42);
//! assert_eq!(again.roll(1, 10), stat);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded RNG backing stat rolls and image picks.
///
/// Uses ChaCha8 so a session can be replayed exactly from its seed.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the thread-local entropy source.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Roll a uniform integer in `min..=max`. Bounds may be given in
    /// either order.
    pub fn roll(&mut self, min: u8, max: u8) -> u8 {
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        self.inner.gen_range(lo..=hi)
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }
}
