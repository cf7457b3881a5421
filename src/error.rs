//! Error types.
//!
//! The round engine itself has no failure modes; errors come from
//! configuration, persistence and the account flow.

use thiserror::Error;

/// Invalid `RoundConfig` values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("level thresholds must be strictly increasing and above zero, got {level2}/{level3}/{level4}")]
    Thresholds { level2: u32, level3: u32, level4: u32 },
    #[error("grid sizes must be non-zero and the large grid at least the base grid, got {base}/{large}")]
    GridSize { base: usize, large: usize },
    #[error("starting time must be at least one second")]
    StartingTime,
    #[error("timer intervals must be non-zero")]
    ZeroInterval,
    #[error("round state breaks the target/label invariants")]
    InvalidState,
}

/// Failure reading or writing a persistence service.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("stored value could not be (de)serialized: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("stored value for `{key}` is malformed: {value:?}")]
    Corrupt { key: String, value: String },
    #[error("storage is unavailable: {0}")]
    Unavailable(String),
}

/// Account flow errors.
///
/// `IncorrectName` and `IncorrectPassword` are the only errors meant to be
/// shown to the player.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Please enter your name and password")]
    EmptyCredentials,
    #[error("Please enter only letters without spaces.")]
    InvalidName,
    #[error("An account named `{0}` already exists")]
    NameTaken(String),
    #[error("Incorrect Name")]
    IncorrectName,
    #[error("Incorrect Password")]
    IncorrectPassword,
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl AuthError {
    /// Whether this error should be surfaced as a login alert.
    #[must_use]
    pub fn is_player_facing(&self) -> bool {
        matches!(self, AuthError::IncorrectName | AuthError::IncorrectPassword)
    }
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
