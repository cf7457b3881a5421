//! Round state and the snapshot handed to the display layer.

use serde::{Deserialize, Serialize};

use super::level::Level;
use crate::core::{Grid, TileColor};

/// Where a round is in its lifecycle.
///
/// ```text
/// Idle -> Running -> { Paused, LevelUp, Ended }
/// Paused  -> Running   (toggle)
/// LevelUp -> Running   (continue)
/// Ended   -> Running   (restart)
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundPhase {
    #[default]
    Idle,
    Running,
    Paused,
    LevelUp,
    Ended,
}

impl RoundPhase {
    #[must_use]
    pub const fn is_running(self) -> bool {
        matches!(self, Self::Running)
    }
}

/// Mutable state of one play session.
///
/// Invariants, restored by every engine operation:
/// - `target` is a tile of `grid`
/// - `display == target` unless `hard_mode`, in which case they differ
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    pub grid: Grid,
    pub target: TileColor,
    pub display: TileColor,
    pub score: u32,
    pub time_left: u32,
    pub hard_mode: bool,
    pub phase: RoundPhase,
}

impl RoundState {
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.phase.is_running()
    }

    /// Check both color invariants.
    #[must_use]
    pub fn invariants_hold(&self) -> bool {
        let label_ok = if self.hard_mode {
            self.display != self.target
        } else {
            self.display == self.target
        };
        label_ok && self.grid.contains(self.target)
    }
}

/// Read-only view of a round for rendering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub grid: Grid,
    pub columns: usize,
    pub target: TileColor,
    pub display: TileColor,
    pub score: u32,
    pub best_score: u32,
    pub time_left: u32,
    pub level: Level,
    pub hard_mode: bool,
    pub phase: RoundPhase,
}

impl RoundSnapshot {
    /// Target label text.
    #[must_use]
    pub fn target_label(&self) -> String {
        format!("Tap all: {}", self.target)
    }

    /// Score and countdown line.
    #[must_use]
    pub fn status_line(&self) -> String {
        format!("Score: {} | Time Left: {}s", self.score, self.time_left)
    }

    /// Caption of the pause/resume control.
    #[must_use]
    pub fn toggle_label(&self) -> &'static str {
        if self.phase.is_running() {
            "Pause Game"
        } else {
            "Continue Game"
        }
    }
}
