//! The round engine and its outcomes.
//!
//! A round is one timed play session: the player taps tiles matching the
//! target color while a countdown runs. Correct taps score a point and buy
//! time; crossing a score threshold pauses the round for a level-up.
//!
//! ## Example Usage
//!
//! ```
//! use color_hunt::core::RoundConfig;
//! use color_hunt::round::{RoundEngine, RoundPhase, TapOutcome};
//!
//! let mut engine = RoundEngine::new(RoundConfig::default().with_seed(7)).unwrap();
//! engine.start();
//!
//! let target = engine.state().target;
//! let index = engine.state().grid.iter().position(|tile| tile == target).unwrap();
//! let outcome = engine.handle_tile_press(target, index);
//!
//! assert_eq!(outcome, TapOutcome::Hit { score: 1, time_bonus: 1 });
//! assert_eq!(engine.phase(), RoundPhase::Running);
//! ```

mod engine;
mod level;
mod state;

pub use engine::RoundEngine;
pub use level::Level;
pub use state::{RoundPhase, RoundSnapshot, RoundState};

use serde::{Deserialize, Serialize};

use crate::core::TileColor;

/// Result of a tile tap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TapOutcome {
    /// The round is not running, or the tap was outside the grid.
    Ignored,
    /// Wrong color. No penalty.
    Miss,
    /// Correct color.
    Hit { score: u32, time_bonus: u32 },
    /// Correct color that crossed a level threshold; the round is paused
    /// until continued.
    LevelUp { score: u32, level: Level },
}

impl TapOutcome {
    /// Whether the tap changed the round.
    #[must_use]
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Hit { .. } | Self::LevelUp { .. })
    }
}

/// Result of a countdown tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickOutcome {
    /// The round is not running.
    Ignored,
    /// One second passed.
    Counted { time_left: u32 },
    /// The clock ran out.
    GameOver { final_score: u32 },
}

/// Something a timer fire did during [`RoundEngine::advance`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundEvent {
    Tick { time_left: u32 },
    Decoy { display: TileColor },
    GameOver { final_score: u32 },
}
