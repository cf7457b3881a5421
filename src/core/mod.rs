//! Core types: palette, grid, RNG, configuration.
//!
//! These are the building blocks the round engine is made of. They carry no
//! game flow of their own.

pub mod palette;
pub mod grid;
pub mod rng;
pub mod config;

pub use palette::{TileColor, UnknownColor};
pub use grid::Grid;
pub use rng::{GameRng, GameRngState};
pub use config::{BonusBasis, LevelThresholds, RoundConfig};
