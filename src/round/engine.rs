//! The round engine: a single play session's state machine.

use log::{debug, info, warn};
use smallvec::SmallVec;
use std::time::Duration;

use super::level::Level;
use super::state::{RoundPhase, RoundSnapshot, RoundState};
use super::{RoundEvent, TapOutcome, TickOutcome};
use crate::core::{BonusBasis, GameRng, GameRngState, Grid, RoundConfig, TileColor};
use crate::error::ConfigError;
use crate::schedule::{Scheduler, TimerKind};

/// Drives grid generation, scoring, timing and level progression.
///
/// The engine owns its timers. Hosts either call [`tick`](Self::tick) and
/// [`decoy_tick`](Self::decoy_tick) from their own one-second callbacks, or
/// feed wall-clock time to [`advance`](Self::advance) and let the engine's
/// scheduler decide when they fire.
#[derive(Clone, Debug)]
pub struct RoundEngine {
    config: RoundConfig,
    state: RoundState,
    rng: GameRng,
    scheduler: Scheduler,
}

impl RoundEngine {
    /// Create an idle engine, seeded from `config.seed` or randomly.
    pub fn new(config: RoundConfig) -> Result<Self, ConfigError> {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_random_seed(),
        };
        Self::with_rng(config, rng)
    }

    /// Create an idle engine drawing from `rng`.
    ///
    /// A first grid is generated right away so the state invariants hold
    /// before the round starts.
    pub fn with_rng(config: RoundConfig, rng: GameRng) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = RoundState {
            grid: Grid::default(),
            target: TileColor::Red,
            display: TileColor::Red,
            score: 0,
            time_left: config.starting_time,
            hard_mode: false,
            phase: RoundPhase::Idle,
        };
        let scheduler = Scheduler::new(config.tick_interval, config.decoy_interval);
        let mut engine = Self {
            config,
            state,
            rng,
            scheduler,
        };
        engine.generate_grid();
        Ok(engine)
    }

    /// Resume an engine from a saved state.
    ///
    /// Timers start fresh for the state's phase.
    pub fn restore(config: RoundConfig, state: RoundState, rng: GameRng) -> Result<Self, ConfigError> {
        config.validate()?;
        if !state.invariants_hold() {
            return Err(ConfigError::InvalidState);
        }
        let scheduler = Scheduler::new(config.tick_interval, config.decoy_interval);
        let mut engine = Self {
            config,
            state,
            rng,
            scheduler,
        };
        engine.sync_timers();
        Ok(engine)
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &RoundState {
        &self.state
    }

    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.state.phase
    }

    #[must_use]
    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Current level, derived from the score.
    #[must_use]
    pub fn level(&self) -> Level {
        Level::for_score(self.state.score, &self.config.thresholds)
    }

    /// Snapshot for the display layer.
    #[must_use]
    pub fn snapshot(&self, best_score: u32) -> RoundSnapshot {
        let level = self.level();
        RoundSnapshot {
            grid: self.state.grid.clone(),
            columns: level.columns(),
            target: self.state.target,
            display: self.state.display,
            score: self.state.score,
            best_score,
            time_left: self.state.time_left,
            level,
            hard_mode: self.state.hard_mode,
            phase: self.state.phase,
        }
    }

    // === Lifecycle ===

    /// Start a fresh round. Same as [`restart`](Self::restart).
    pub fn start(&mut self) {
        self.restart();
    }

    /// Reset score, countdown and hard mode, then deal a new grid.
    ///
    /// Accepted from any phase. Timers from the previous round are cancelled
    /// so no stale fire reaches the new one.
    pub fn restart(&mut self) {
        self.scheduler.cancel_all();
        self.state.score = 0;
        self.state.time_left = self.config.starting_time;
        self.state.hard_mode = false;
        self.state.phase = RoundPhase::Running;
        self.generate_grid();
        self.sync_timers();
        info!("round started with {}s on the clock", self.state.time_left);
    }

    /// Pause or resume.
    ///
    /// An idle engine starts a round; level-up and ended rounds are left
    /// alone since they need [`continue_level`](Self::continue_level) or
    /// [`restart`](Self::restart). Returns the resulting phase.
    pub fn toggle(&mut self) -> RoundPhase {
        match self.state.phase {
            RoundPhase::Idle => self.start(),
            RoundPhase::Running => {
                self.state.phase = RoundPhase::Paused;
                self.sync_timers();
                debug!("round paused at {}s", self.state.time_left);
            }
            RoundPhase::Paused => {
                self.state.phase = RoundPhase::Running;
                self.sync_timers();
                debug!("round resumed at {}s", self.state.time_left);
            }
            RoundPhase::LevelUp | RoundPhase::Ended => {}
        }
        self.state.phase
    }

    /// Leave the level-up pause and deal a fresh grid for the new level.
    ///
    /// Returns `false` if the round was not waiting on a level-up.
    pub fn continue_level(&mut self) -> bool {
        if self.state.phase != RoundPhase::LevelUp {
            return false;
        }
        self.state.phase = RoundPhase::Running;
        self.generate_grid();
        self.sync_timers();
        debug!("continuing at {}", self.level());
        true
    }

    // === Grid ===

    /// Deal a whole new grid and pick a new target from it.
    pub fn generate_grid(&mut self) {
        let size = self.level().grid_size(&self.config);
        self.state.grid = Grid::random(size, &mut self.rng);
        self.retarget();
        debug!(
            "dealt {} tiles, target {} shown as {}",
            size, self.state.target, self.state.display
        );
    }

    /// Pick the target from the current grid and redraw the label.
    fn retarget(&mut self) {
        // Grid sizes are validated non-zero, so a pick always succeeds.
        if let Some(target) = self.state.grid.pick(&mut self.rng) {
            self.state.target = target;
        }
        self.refresh_label();
    }

    fn refresh_label(&mut self) {
        self.state.display = if self.state.hard_mode {
            self.rng.color_except(self.state.target)
        } else {
            self.state.target
        };
    }

    // === Events ===

    /// Handle a tap on the tile at `index` holding `tile`.
    pub fn handle_tile_press(&mut self, tile: TileColor, index: usize) -> TapOutcome {
        if !self.state.is_running() {
            return TapOutcome::Ignored;
        }
        if index >= self.state.grid.len() {
            warn!("tap on tile {index} outside a grid of {}", self.state.grid.len());
            return TapOutcome::Ignored;
        }
        if tile != self.state.target {
            return TapOutcome::Miss;
        }

        let thresholds = self.config.thresholds;
        let before = self.state.score;
        let score = before.saturating_add(1);
        self.state.score = score;

        let basis = match self.config.bonus_basis {
            BonusBasis::PreIncrement => before,
            BonusBasis::PostIncrement => score,
        };
        let time_bonus = if Level::for_score(basis, &thresholds) == Level::Two {
            self.config.boosted_time_bonus
        } else {
            self.config.time_bonus
        };
        self.state.time_left = self.state.time_left.saturating_add(time_bonus);

        let level = Level::for_score(score, &thresholds);
        if level.is_hard() {
            self.state.hard_mode = true;
        }

        let previous = Level::for_score(before, &thresholds);
        if previous.is_flickering() {
            self.state.grid = Grid::random(previous.grid_size(&self.config), &mut self.rng);
        } else {
            self.state.grid.reroll(index, &mut self.rng);
        }
        self.retarget();

        if level > previous {
            self.state.phase = RoundPhase::LevelUp;
            self.sync_timers();
            info!("reached {level} at score {score}");
            return TapOutcome::LevelUp { score, level };
        }

        TapOutcome::Hit { score, time_bonus }
    }

    /// One countdown second.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.state.is_running() {
            return TickOutcome::Ignored;
        }

        self.state.time_left = self.state.time_left.saturating_sub(1);
        if self.state.time_left > 0 {
            return TickOutcome::Counted {
                time_left: self.state.time_left,
            };
        }

        self.state.phase = RoundPhase::Ended;
        self.sync_timers();
        info!("round over with score {}", self.state.score);
        TickOutcome::GameOver {
            final_score: self.state.score,
        }
    }

    /// Redraw the decoy label from level 3 on.
    ///
    /// Returns whether the label changed.
    pub fn decoy_tick(&mut self) -> bool {
        if !self.state.is_running() || !self.level().is_flickering() {
            return false;
        }
        self.state.display = self.rng.color_except(self.state.target);
        true
    }

    /// Feed `elapsed` wall-clock time to the round's timers.
    ///
    /// Fires are applied in the order they come due. Once the round stops
    /// running (game over), the rest of `elapsed` is discarded.
    pub fn advance(&mut self, elapsed: Duration) -> SmallVec<[RoundEvent; 4]> {
        let mut events = SmallVec::new();
        let mut budget = elapsed;

        while self.state.is_running() {
            let Some(kind) = self.scheduler.poll(&mut budget) else {
                break;
            };
            match kind {
                TimerKind::Countdown => match self.tick() {
                    TickOutcome::Counted { time_left } => events.push(RoundEvent::Tick { time_left }),
                    TickOutcome::GameOver { final_score } => {
                        events.push(RoundEvent::GameOver { final_score });
                    }
                    TickOutcome::Ignored => {}
                },
                TimerKind::Decoy => {
                    if self.decoy_tick() {
                        events.push(RoundEvent::Decoy {
                            display: self.state.display,
                        });
                    }
                }
            }
        }

        events
    }

    /// Bring the timers in line with the phase.
    fn sync_timers(&mut self) {
        match self.state.phase {
            RoundPhase::Running => {
                self.scheduler.countdown_mut().start();
                if self.level().is_flickering() {
                    self.scheduler.decoy_mut().start();
                } else {
                    self.scheduler.decoy_mut().cancel();
                }
            }
            RoundPhase::Paused | RoundPhase::LevelUp => self.scheduler.stop_all(),
            RoundPhase::Idle | RoundPhase::Ended => self.scheduler.cancel_all(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(seed: u64) -> RoundEngine {
        RoundEngine::new(RoundConfig::default().with_seed(seed)).unwrap()
    }

    /// Index of a tile holding the current target.
    fn target_index(engine: &RoundEngine) -> usize {
        let state = engine.state();
        state.grid.iter().position(|tile| tile == state.target).unwrap()
    }

    fn hit(engine: &mut RoundEngine) -> TapOutcome {
        let index = target_index(engine);
        engine.handle_tile_press(engine.state().target, index)
    }

    fn miss_color(engine: &RoundEngine) -> TileColor {
        TileColor::ALL
            .into_iter()
            .find(|&color| color != engine.state().target)
            .unwrap()
    }

    #[test]
    fn test_new_engine_is_idle_with_valid_grid() {
        let engine = engine(1);

        assert_eq!(engine.phase(), RoundPhase::Idle);
        assert_eq!(engine.state().grid.len(), 12);
        assert!(engine.state().invariants_hold());
        assert!(!engine.scheduler().is_running());
    }

    #[test]
    fn test_taps_ignored_until_started() {
        let mut engine = engine(2);
        assert_eq!(hit(&mut engine), TapOutcome::Ignored);
        assert_eq!(engine.state().score, 0);
    }

    #[test]
    fn test_start_resets_round() {
        let mut engine = engine(3);
        engine.start();

        assert_eq!(engine.phase(), RoundPhase::Running);
        assert_eq!(engine.state().score, 0);
        assert_eq!(engine.state().time_left, 10);
        assert!(!engine.state().hard_mode);
        assert!(engine.scheduler().countdown().is_active());
        assert!(!engine.scheduler().decoy().is_active());
    }

    #[test]
    fn test_correct_tap_scores_and_adds_time() {
        let mut engine = engine(4);
        engine.start();

        assert_eq!(hit(&mut engine), TapOutcome::Hit { score: 1, time_bonus: 1 });
        assert_eq!(engine.state().time_left, 11);
        assert!(engine.state().invariants_hold());
    }

    #[test]
    fn test_wrong_tap_is_free() {
        let mut engine = engine(5);
        engine.start();
        let before = engine.state().clone();

        let wrong = miss_color(&engine);
        assert_eq!(engine.handle_tile_press(wrong, 0), TapOutcome::Miss);
        assert_eq!(engine.state(), &before);
    }

    #[test]
    fn test_out_of_range_tap_ignored() {
        let mut engine = engine(6);
        engine.start();
        let target = engine.state().target;

        assert_eq!(engine.handle_tile_press(target, 12), TapOutcome::Ignored);
        assert_eq!(engine.state().score, 0);
    }

    #[test]
    fn test_toggle_pauses_and_resumes() {
        let mut engine = engine(7);
        engine.start();

        assert_eq!(engine.toggle(), RoundPhase::Paused);
        assert_eq!(hit(&mut engine), TapOutcome::Ignored);
        assert_eq!(engine.tick(), TickOutcome::Ignored);
        assert!(!engine.scheduler().is_running());

        assert_eq!(engine.toggle(), RoundPhase::Running);
        assert!(engine.scheduler().countdown().is_active());
    }

    #[test]
    fn test_toggle_from_idle_starts() {
        let mut engine = engine(8);
        assert_eq!(engine.toggle(), RoundPhase::Running);
        assert_eq!(engine.state().time_left, 10);
    }

    #[test]
    fn test_tick_counts_down_to_game_over() {
        let mut engine = engine(9);
        engine.start();

        for expected in (1..10).rev() {
            assert_eq!(engine.tick(), TickOutcome::Counted { time_left: expected });
        }
        assert_eq!(engine.tick(), TickOutcome::GameOver { final_score: 0 });
        assert_eq!(engine.phase(), RoundPhase::Ended);
        assert_eq!(engine.state().time_left, 0);

        // Ended is terminal until restart
        assert_eq!(engine.tick(), TickOutcome::Ignored);
        assert_eq!(engine.state().time_left, 0);
        assert_eq!(engine.toggle(), RoundPhase::Ended);
        assert!(!engine.scheduler().is_running());
    }

    #[test]
    fn test_decoy_tick_needs_level_three() {
        let mut engine = engine(10);
        engine.start();
        assert!(!engine.decoy_tick());
    }

    #[test]
    fn test_continue_only_from_level_up() {
        let mut engine = engine(11);
        engine.start();
        assert!(!engine.continue_level());
        assert_eq!(engine.phase(), RoundPhase::Running);
    }

    #[test]
    fn test_advance_applies_countdown() {
        let mut engine = engine(12);
        engine.start();

        let events = engine.advance(Duration::from_millis(2500));
        assert_eq!(
            events.as_slice(),
            &[RoundEvent::Tick { time_left: 9 }, RoundEvent::Tick { time_left: 8 }]
        );

        let events = engine.advance(Duration::from_secs(60));
        assert_eq!(events.last(), Some(&RoundEvent::GameOver { final_score: 0 }));
        assert_eq!(events.len(), 8);
        assert_eq!(engine.phase(), RoundPhase::Ended);
    }

    #[test]
    fn test_restore_rejects_broken_state() {
        let engine = engine(13);
        let mut state = engine.state().clone();
        state.hard_mode = true;
        state.display = state.target;

        let result = RoundEngine::restore(RoundConfig::default(), state, GameRng::new(1));
        assert_eq!(result.err(), Some(ConfigError::InvalidState));
    }

    #[test]
    fn test_same_seed_same_round() {
        let mut a = engine(99);
        let mut b = engine(99);
        a.start();
        b.start();

        for _ in 0..20 {
            assert_eq!(hit(&mut a), hit(&mut b));
        }
        assert_eq!(a.state(), b.state());
        assert_eq!(a.rng_state(), b.rng_state());
    }
}
