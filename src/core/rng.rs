//! Deterministic random number generation for grid and target draws.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical rounds
//! - **Palette-aware**: Uniform color draws, with or without an excluded color
//! - **Serializable**: O(1) state capture and restore
//!
//! ```
//! use color_hunt::core::{GameRng, TileColor};
//!
//! let mut rng = GameRng::new(42);
//! let target = rng.color();
//!
//! // A decoy label never shows the target color
//! let decoy = rng.color_except(target);
//! assert_ne!(decoy, target);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::palette::TileColor;

/// Deterministic RNG used by the round engine.
///
/// Uses ChaCha8 for speed while keeping draws reproducible from a seed.
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

    /// Create an RNG seeded from the thread-local generator.
    #[must_use]
    pub fn from_random_seed() -> Self {
        Self::new(rand::random())
    }

    /// Generate a random index in `0..len`.
    ///
    /// # Panics
    ///
    /// Panics if `len` is zero.
    pub fn gen_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }

    /// Draw a color uniformly from the palette.
    pub fn color(&mut self) -> TileColor {
        TileColor::ALL[self.gen_index(TileColor::COUNT)]
    }

    /// Draw a color uniformly from the palette minus `exclude`.
    ///
    /// Draws from the remaining seven colors directly instead of rejecting.
    pub fn color_except(&mut self, exclude: TileColor) -> TileColor {
        let mut index = self.gen_index(TileColor::COUNT - 1);
        if index >= exclude.index() {
            index += 1;
        }
        TileColor::ALL[index]
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state for checkpointing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}
