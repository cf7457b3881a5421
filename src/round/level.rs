//! Difficulty levels derived from the score.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{LevelThresholds, RoundConfig};

/// Difficulty level.
///
/// Levels only ever rise within a round because the score never decreases.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Level {
    One,
    Two,
    Three,
    Four,
}

impl Level {
    /// Level reached at `score`.
    #[must_use]
    pub fn for_score(score: u32, thresholds: &LevelThresholds) -> Self {
        if score >= thresholds.level4 {
            Level::Four
        } else if score >= thresholds.level3 {
            Level::Three
        } else if score >= thresholds.level2 {
            Level::Two
        } else {
            Level::One
        }
    }

    /// 1-based level number.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Level::One => 1,
            Level::Two => 2,
            Level::Three => 3,
            Level::Four => 4,
        }
    }

    /// Hard mode: the target label is drawn in a different color.
    #[must_use]
    pub fn is_hard(self) -> bool {
        self >= Level::Two
    }

    /// Every correct tap regenerates the whole grid, and the decoy timer runs.
    #[must_use]
    pub fn is_flickering(self) -> bool {
        self >= Level::Three
    }

    /// Column count the grid is laid out with.
    #[must_use]
    pub const fn columns(self) -> usize {
        match self {
            Level::Four => 4,
            _ => 3,
        }
    }

    /// Number of tiles in a grid generated at this level.
    #[must_use]
    pub fn grid_size(self, config: &RoundConfig) -> usize {
        if self == Level::Four {
            config.large_grid_size
        } else {
            config.base_grid_size
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Level {}", self.number())
    }
}
