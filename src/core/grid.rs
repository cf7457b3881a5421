//! The tile grid.
//!
//! A grid is an ordered run of tiles; a tile has no identity beyond its
//! position. Grids hold at most 16 tiles, so they live inline in a
//! `SmallVec` without heap allocation.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::Index;

use super::palette::TileColor;
use super::rng::GameRng;

/// Inline capacity, the largest grid the game uses.
const INLINE_TILES: usize = 16;

/// Ordered sequence of tiles.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    tiles: SmallVec<[TileColor; INLINE_TILES]>,
}

impl Grid {
    /// Fill a grid of `len` tiles, each drawn independently and uniformly.
    #[must_use]
    pub fn random(len: usize, rng: &mut GameRng) -> Self {
        Self {
            tiles: (0..len).map(|_| rng.color()).collect(),
        }
    }

    /// Build a grid from explicit tiles.
    #[must_use]
    pub fn from_tiles(tiles: &[TileColor]) -> Self {
        Self {
            tiles: SmallVec::from_slice(tiles),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<TileColor> {
        self.tiles.get(index).copied()
    }

    /// Check whether any tile holds `color`.
    #[must_use]
    pub fn contains(&self, color: TileColor) -> bool {
        self.tiles.contains(&color)
    }

    /// Redraw the tile at `index`.
    ///
    /// Returns the new color, or `None` if `index` is out of range.
    pub fn reroll(&mut self, index: usize, rng: &mut GameRng) -> Option<TileColor> {
        let slot = self.tiles.get_mut(index)?;
        *slot = rng.color();
        Some(*slot)
    }

    /// Pick a tile uniformly from the grid.
    ///
    /// Returns `None` for an empty grid.
    pub fn pick(&self, rng: &mut GameRng) -> Option<TileColor> {
        rng.choose(&self.tiles).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = TileColor> + '_ {
        self.tiles.iter().copied()
    }
}

impl Index<usize> for Grid {
    type Output = TileColor;

    fn index(&self, index: usize) -> &Self::Output {
        &self.tiles[index]
    }
}
