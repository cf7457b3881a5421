//! The game screen: a round engine wired to storage and a view.

use std::time::Duration;

use smallvec::SmallVec;

use crate::core::TileColor;
use crate::round::{Level, RoundEngine, RoundEvent, RoundPhase, RoundSnapshot, TapOutcome, TickOutcome};
use crate::score::BestScore;
use crate::services::{KeyValueStore, Navigator, Route, RouteParams};
use crate::theme::Theme;

/// Display layer for the game screen.
pub trait RoundView {
    /// Draw the round.
    fn render(&mut self, snapshot: &RoundSnapshot, theme: Theme);

    /// Show the level-up prompt. The round waits for
    /// [`GameScreen::continue_level`].
    fn level_up(&mut self, level: Level);

    /// Show the game-over prompt, offering [`GameScreen::restart`].
    fn game_over(&mut self, final_score: u32);
}

impl<V: RoundView + ?Sized> RoundView for &mut V {
    fn render(&mut self, snapshot: &RoundSnapshot, theme: Theme) {
        (**self).render(snapshot, theme);
    }

    fn level_up(&mut self, level: Level) {
        (**self).level_up(level);
    }

    fn game_over(&mut self, final_score: u32) {
        (**self).game_over(final_score);
    }
}

/// Game screen controller.
///
/// Forwards player and timer events to the engine, re-renders after each
/// change, and saves the best score when a round ends.
#[derive(Debug)]
pub struct GameScreen<S, V> {
    engine: RoundEngine,
    best: BestScore,
    store: S,
    view: V,
    theme: Theme,
}

impl<S: KeyValueStore, V: RoundView> GameScreen<S, V> {
    /// Open the screen: load the best score and draw the idle round.
    pub fn open(engine: RoundEngine, store: S, view: V, theme: Theme) -> Self {
        let best = BestScore::load(&store);
        let mut screen = Self {
            engine,
            best,
            store,
            view,
            theme,
        };
        screen.render();
        screen
    }

    #[must_use]
    pub fn engine(&self) -> &RoundEngine {
        &self.engine
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn best_score(&self) -> u32 {
        self.best.value()
    }

    #[must_use]
    pub fn snapshot(&self) -> RoundSnapshot {
        self.engine.snapshot(self.best.value())
    }

    /// Switch the theme the view is drawn with.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.render();
    }

    pub fn tap(&mut self, tile: TileColor, index: usize) -> TapOutcome {
        let outcome = self.engine.handle_tile_press(tile, index);
        if outcome.has_update() {
            self.render();
        }
        if let TapOutcome::LevelUp { level, .. } = outcome {
            self.view.level_up(level);
        }
        outcome
    }

    pub fn toggle(&mut self) -> RoundPhase {
        let phase = self.engine.toggle();
        self.render();
        phase
    }

    pub fn continue_level(&mut self) -> bool {
        let continued = self.engine.continue_level();
        if continued {
            self.render();
        }
        continued
    }

    pub fn restart(&mut self) {
        self.engine.restart();
        self.render();
    }

    /// One countdown second, for hosts driving their own timer.
    pub fn tick(&mut self) -> TickOutcome {
        let outcome = self.engine.tick();
        match outcome {
            TickOutcome::Ignored => {}
            TickOutcome::Counted { .. } => self.render(),
            TickOutcome::GameOver { final_score } => self.finish(final_score),
        }
        outcome
    }

    /// Feed elapsed wall-clock time to the round's timers.
    pub fn advance(&mut self, elapsed: Duration) -> SmallVec<[RoundEvent; 4]> {
        let events = self.engine.advance(elapsed);
        let game_over = events.iter().find_map(|event| match event {
            RoundEvent::GameOver { final_score } => Some(*final_score),
            _ => None,
        });
        match game_over {
            Some(final_score) => self.finish(final_score),
            None if !events.is_empty() => self.render(),
            None => {}
        }
        events
    }

    /// Leave for the welcome screen.
    pub fn back<N: Navigator + ?Sized>(&self, navigator: &mut N) {
        navigator.push(Route::Welcome, RouteParams::none());
    }

    fn finish(&mut self, final_score: u32) {
        self.best.record(&mut self.store, final_score);
        self.render();
        self.view.game_over(final_score);
    }

    fn render(&mut self) {
        let snapshot = self.engine.snapshot(self.best.value());
        self.view.render(&snapshot, self.theme);
    }
}
