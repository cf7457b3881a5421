//! Game screen integration tests.
//!
//! A recording view stands in for the display layer so these tests can check
//! what gets drawn and when, alongside best-score persistence.

use std::time::Duration;

use color_hunt::core::{GameRng, Grid, RoundConfig, TileColor};
use color_hunt::error::{StoreError, StoreResult};
use color_hunt::round::{Level, RoundEngine, RoundEvent, RoundPhase, RoundSnapshot, RoundState, TapOutcome, TickOutcome};
use color_hunt::screen::{GameScreen, RoundView};
use color_hunt::services::{keys, KeyValueStore, MemoryStore, NavigationStack, Route, RouteParams};
use color_hunt::theme::Theme;

use TileColor::*;

// =============================================================================
// Test doubles
// =============================================================================

#[derive(Debug, Default)]
struct RecordingView {
    renders: Vec<(RoundSnapshot, Theme)>,
    level_ups: Vec<Level>,
    game_overs: Vec<u32>,
}

impl RecordingView {
    fn last(&self) -> &RoundSnapshot {
        &self.renders.last().unwrap().0
    }
}

impl RoundView for RecordingView {
    fn render(&mut self, snapshot: &RoundSnapshot, theme: Theme) {
        self.renders.push((snapshot.clone(), theme));
    }

    fn level_up(&mut self, level: Level) {
        self.level_ups.push(level);
    }

    fn game_over(&mut self, final_score: u32) {
        self.game_overs.push(final_score);
    }
}

/// Readable store whose writes always fail.
#[derive(Debug, Default)]
struct ReadOnlyStore {
    inner: MemoryStore,
}

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        self.inner.get(key)
    }

    fn set(&mut self, _key: &str, _value: String) -> StoreResult<()> {
        Err(StoreError::Unavailable("storage is read-only".into()))
    }

    fn remove(&mut self, _key: &str) -> StoreResult<()> {
        Err(StoreError::Unavailable("storage is read-only".into()))
    }
}

// =============================================================================
// Helpers
// =============================================================================

fn engine_at(score: u32, time_left: u32) -> RoundEngine {
    let hard_mode = score >= 30;
    let state = RoundState {
        grid: Grid::from_tiles(&[Red, Blue, Green, Yellow, Purple, Orange, Pink, Cyan, Red, Blue, Green, Yellow]),
        target: Red,
        display: if hard_mode { Green } else { Red },
        score,
        time_left,
        hard_mode,
        phase: RoundPhase::Running,
    };
    RoundEngine::restore(RoundConfig::default(), state, GameRng::new(7)).unwrap()
}

fn store_with_best(best: &str) -> MemoryStore {
    let mut store = MemoryStore::new();
    store.set(keys::BEST_SCORE, best.to_string()).unwrap();
    store
}

// =============================================================================
// Rendering
// =============================================================================

/// Opening the screen loads the best score and draws once.
#[test]
fn test_open_renders_with_stored_best() {
    let engine = RoundEngine::new(RoundConfig::default().with_seed(1)).unwrap();
    let screen = GameScreen::open(engine, store_with_best("17"), RecordingView::default(), Theme::Light);

    assert_eq!(screen.best_score(), 17);
    assert_eq!(screen.view().renders.len(), 1);
    let (snapshot, theme) = &screen.view().renders[0];
    assert_eq!(snapshot.best_score, 17);
    assert_eq!(snapshot.phase, RoundPhase::Idle);
    assert_eq!(*theme, Theme::Light);
}

#[test]
fn test_malformed_best_score_reads_as_zero() {
    let engine = RoundEngine::new(RoundConfig::default().with_seed(1)).unwrap();
    let screen = GameScreen::open(engine, store_with_best("lots"), RecordingView::default(), Theme::Dark);
    assert_eq!(screen.best_score(), 0);
}

/// Misses change nothing, so nothing is redrawn.
#[test]
fn test_only_hits_redraw() {
    let mut screen = GameScreen::open(engine_at(3, 10), MemoryStore::new(), RecordingView::default(), Theme::Dark);

    assert_eq!(screen.tap(Blue, 1), TapOutcome::Miss);
    assert_eq!(screen.view().renders.len(), 1);

    assert_eq!(screen.tap(Red, 0), TapOutcome::Hit { score: 4, time_bonus: 1 });
    assert_eq!(screen.view().renders.len(), 2);
    assert_eq!(screen.view().last().score, 4);
}

#[test]
fn test_theme_change_redraws() {
    let mut screen = GameScreen::open(engine_at(0, 10), MemoryStore::new(), RecordingView::default(), Theme::Dark);

    screen.set_theme(Theme::Light);

    assert_eq!(screen.view().renders.last().map(|(_, theme)| *theme), Some(Theme::Light));
}

// =============================================================================
// Level-ups
// =============================================================================

#[test]
fn test_level_up_prompts_view() {
    let mut view = RecordingView::default();
    let mut screen = GameScreen::open(engine_at(29, 10), MemoryStore::new(), &mut view, Theme::Dark);

    assert_eq!(screen.tap(Red, 8), TapOutcome::LevelUp { score: 30, level: Level::Two });
    assert_eq!(screen.snapshot().toggle_label(), "Continue Game");
    assert!(screen.continue_level());
    assert!(!screen.continue_level());
    drop(screen);

    assert_eq!(view.level_ups, vec![Level::Two]);
    let last = view.last();
    assert_eq!(last.phase, RoundPhase::Running);
    assert!(last.hard_mode);
    assert_ne!(last.display, last.target);
}

// =============================================================================
// Game over
// =============================================================================

/// A round ending at 12 over a stored best of 5 saves 12.
#[test]
fn test_game_over_saves_new_best() {
    let mut store = store_with_best("5");
    let mut view = RecordingView::default();
    let mut screen = GameScreen::open(engine_at(12, 1), &mut store, &mut view, Theme::Dark);

    assert_eq!(screen.tick(), TickOutcome::GameOver { final_score: 12 });
    assert_eq!(screen.best_score(), 12);
    drop(screen);

    assert_eq!(store.get(keys::BEST_SCORE).unwrap().as_deref(), Some("12"));
    assert_eq!(view.game_overs, vec![12]);
    assert_eq!(view.last().best_score, 12);
    assert_eq!(view.last().phase, RoundPhase::Ended);
}

#[test]
fn test_game_over_below_best_keeps_it() {
    let mut store = store_with_best("40");
    let mut screen = GameScreen::open(engine_at(12, 1), &mut store, RecordingView::default(), Theme::Dark);

    screen.tick();

    assert_eq!(screen.best_score(), 40);
    assert_eq!(screen.view().game_overs, vec![12]);
    drop(screen);
    assert_eq!(store.get(keys::BEST_SCORE).unwrap().as_deref(), Some("40"));
}

/// A failed write is swallowed; the round still ends normally.
#[test]
fn test_failed_best_score_write_is_not_fatal() {
    let mut store = ReadOnlyStore::default();
    store.inner.set(keys::BEST_SCORE, "5".into()).unwrap();
    let mut screen = GameScreen::open(engine_at(12, 1), store, RecordingView::default(), Theme::Dark);

    assert_eq!(screen.tick(), TickOutcome::GameOver { final_score: 12 });

    assert_eq!(screen.best_score(), 5);
    assert_eq!(screen.view().game_overs, vec![12]);
    assert_eq!(screen.store().get(keys::BEST_SCORE).unwrap().as_deref(), Some("5"));
}

#[test]
fn test_advance_to_game_over() {
    let mut store = MemoryStore::new();
    let mut screen = GameScreen::open(engine_at(8, 3), &mut store, RecordingView::default(), Theme::Dark);

    let events = screen.advance(Duration::from_secs(5));

    assert_eq!(
        events.as_slice(),
        &[
            RoundEvent::Tick { time_left: 2 },
            RoundEvent::Tick { time_left: 1 },
            RoundEvent::GameOver { final_score: 8 },
        ]
    );
    assert_eq!(screen.view().game_overs, vec![8]);
    drop(screen);
    assert_eq!(store.get(keys::BEST_SCORE).unwrap().as_deref(), Some("8"));
}

#[test]
fn test_restart_after_game_over_redraws_fresh_round() {
    let mut screen = GameScreen::open(engine_at(12, 1), MemoryStore::new(), RecordingView::default(), Theme::Dark);
    screen.tick();

    screen.restart();

    let last = screen.view().last();
    assert_eq!(last.score, 0);
    assert_eq!(last.time_left, 10);
    assert_eq!(last.best_score, 12);
    assert_eq!(last.phase, RoundPhase::Running);
}

// =============================================================================
// Pause and navigation
// =============================================================================

#[test]
fn test_pause_freezes_round() {
    let mut screen = GameScreen::open(engine_at(4, 10), MemoryStore::new(), RecordingView::default(), Theme::Dark);

    assert_eq!(screen.toggle(), RoundPhase::Paused);
    assert_eq!(screen.snapshot().toggle_label(), "Continue Game");
    assert!(screen.advance(Duration::from_secs(30)).is_empty());
    assert_eq!(screen.tap(Red, 0), TapOutcome::Ignored);

    assert_eq!(screen.toggle(), RoundPhase::Running);
    assert_eq!(screen.snapshot().toggle_label(), "Pause Game");
    assert_eq!(screen.snapshot().time_left, 10);
}

#[test]
fn test_back_goes_to_welcome() {
    let screen = GameScreen::open(engine_at(0, 10), MemoryStore::new(), RecordingView::default(), Theme::Dark);
    let mut nav = NavigationStack::new();

    screen.back(&mut nav);

    assert_eq!(nav.current(), Some(&(Route::Welcome, RouteParams::none())));
}
