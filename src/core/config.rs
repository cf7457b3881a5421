//! Round configuration.
//!
//! `RoundConfig` carries every tunable the round engine reads: starting
//! time, grid sizes, level thresholds, time bonuses, timer periods and the
//! RNG seed. The defaults reproduce the shipped game.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::ConfigError;

/// Score thresholds at which levels 2, 3 and 4 begin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelThresholds {
    /// Level 2: hard mode starts, boosted time bonus.
    pub level2: u32,
    /// Level 3: full grid regeneration on hit, decoy timer.
    pub level3: u32,
    /// Level 4: large grid.
    pub level4: u32,
}

impl Default for LevelThresholds {
    fn default() -> Self {
        Self {
            level2: 30,
            level3: 45,
            level4: 65,
        }
    }
}

/// Which score the time-bonus check reads on a correct tap.
///
/// A correct tap increments the score and then grants a bonus. The shipped
/// game checks the score as it was before the increment, so the tap that
/// lands on 30 still earns +1 and the tap that lands on 45 earns +2.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BonusBasis {
    /// Check the score before the increment.
    #[default]
    PreIncrement,
    /// Check the score after the increment.
    PostIncrement,
}

/// Configuration for a play session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundConfig {
    /// Countdown value at the start of a round, in seconds.
    pub starting_time: u32,

    /// Grid size for levels 1-3.
    pub base_grid_size: usize,

    /// Grid size for level 4.
    pub large_grid_size: usize,

    /// Level score thresholds.
    pub thresholds: LevelThresholds,

    /// Seconds added on a correct tap.
    pub time_bonus: u32,

    /// Seconds added on a correct tap during level 2.
    pub boosted_time_bonus: u32,

    /// Score the bonus check reads.
    pub bonus_basis: BonusBasis,

    /// Countdown timer period.
    pub tick_interval: Duration,

    /// Decoy label timer period.
    pub decoy_interval: Duration,

    /// RNG seed. `None` seeds randomly per engine.
    pub seed: Option<u64>,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            starting_time: 10,
            base_grid_size: 12,
            large_grid_size: 16,
            thresholds: LevelThresholds::default(),
            time_bonus: 1,
            boosted_time_bonus: 2,
            bonus_basis: BonusBasis::PreIncrement,
            tick_interval: Duration::from_secs(1),
            decoy_interval: Duration::from_secs(1),
            seed: None,
        }
    }
}

impl RoundConfig {
    /// Set a fixed RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the starting countdown.
    #[must_use]
    pub fn with_starting_time(mut self, seconds: u32) -> Self {
        self.starting_time = seconds;
        self
    }

    /// Set the level thresholds.
    #[must_use]
    pub fn with_thresholds(mut self, thresholds: LevelThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Set which score the time-bonus check reads.
    #[must_use]
    pub fn with_bonus_basis(mut self, basis: BonusBasis) -> Self {
        self.bonus_basis = basis;
        self
    }

    /// Set both timer periods.
    #[must_use]
    pub fn with_intervals(mut self, tick: Duration, decoy: Duration) -> Self {
        self.tick_interval = tick;
        self.decoy_interval = decoy;
        self
    }

    /// Check the configuration for values the engine cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.thresholds;
        if !(0 < t.level2 && t.level2 < t.level3 && t.level3 < t.level4) {
            return Err(ConfigError::Thresholds {
                level2: t.level2,
                level3: t.level3,
                level4: t.level4,
            });
        }
        if self.base_grid_size == 0 || self.large_grid_size < self.base_grid_size {
            return Err(ConfigError::GridSize {
                base: self.base_grid_size,
                large: self.large_grid_size,
            });
        }
        if self.starting_time == 0 {
            return Err(ConfigError::StartingTime);
        }
        if self.tick_interval.is_zero() || self.decoy_interval.is_zero() {
            return Err(ConfigError::ZeroInterval);
        }
        Ok(())
    }
}
