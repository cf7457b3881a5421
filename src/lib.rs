//! # color-hunt
//!
//! Round engine and app services for a timed color-matching tap game.
//!
//! ## Design Principles
//!
//! 1. **Platform-Neutral**: The crate renders nothing and owns no event
//!    loop. Hosts feed it taps and elapsed time and draw the snapshots it
//!    hands back.
//!
//! 2. **Explicit Collaborators**: Storage, credentials, navigation and the
//!    theme are passed into each screen. There is no ambient global state.
//!
//! 3. **Deterministic**: Every random draw goes through a seeded ChaCha8
//!    RNG, so a seed plus an event sequence replays the same round.
//!
//! ## Gameplay
//!
//! The player taps tiles of the target color while a 10-second countdown
//! runs. Each hit scores a point and adds time. At 30 points the target
//! label starts lying about its color, at 45 the whole grid reshuffles on
//! every hit and the label flickers, and at 65 the grid grows to 16 tiles.
//! Every threshold pauses the round until the player continues.
//!
//! ## Modules
//!
//! - `core`: Palette, grid, RNG, configuration
//! - `round`: Round engine state machine and its outcomes
//! - `schedule`: Countdown and decoy timers driven by elapsed time
//! - `score`: Best-score persistence
//! - `account`: Local sign-up, login, session token
//! - `theme`: Dark/light preference
//! - `services`: Storage and navigation traits with in-memory/file backends
//! - `screen`: Game, welcome and settings screen controllers

pub mod core;
pub mod round;
pub mod schedule;
pub mod score;
pub mod account;
pub mod theme;
pub mod services;
pub mod screen;
pub mod error;

// Re-export commonly used types
pub use crate::core::{BonusBasis, GameRng, GameRngState, Grid, LevelThresholds, RoundConfig, TileColor};

pub use crate::round::{
    Level, RoundEngine, RoundEvent, RoundPhase, RoundSnapshot, RoundState, TapOutcome, TickOutcome,
};

pub use crate::schedule::{IntervalTimer, Scheduler, TimerKind};

pub use crate::score::BestScore;

pub use crate::account::{sanitize_name, session_token, Account, AccountService, Session};

pub use crate::theme::{Theme, ThemeSettings};

pub use crate::services::{
    CredentialStore, JsonFileStore, KeyValueStore, MemoryCredentials, MemoryStore, NavigationStack,
    Navigator, Route, RouteParams, StoreExt,
};

pub use crate::screen::{GameScreen, RoundView, SettingsScreen, WelcomeScreen};

pub use crate::error::{AuthError, ConfigError, StoreError};
