//! Best-score persistence.
//!
//! The best score is read once when a game screen opens and written only
//! when a finished round beats it. Storage failures never reach the player:
//! they are logged and the in-memory value carries on.

use log::{error, info, warn};

use crate::error::StoreError;
use crate::services::{keys, KeyValueStore};

/// The player's best score.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BestScore {
    value: u32,
}

impl BestScore {
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self { value }
    }

    #[must_use]
    pub const fn value(self) -> u32 {
        self.value
    }

    /// Read the stored best score. Missing, unreadable or malformed values
    /// count as 0.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        match Self::read(store) {
            Ok(value) => Self::new(value.unwrap_or(0)),
            Err(err @ StoreError::Corrupt { .. }) => {
                warn!("ignoring the stored best score: {err}");
                Self::default()
            }
            Err(err) => {
                error!("failed to load the best score: {err}");
                Self::default()
            }
        }
    }

    /// Record a finished round's score.
    ///
    /// Writes only when `score` beats both the in-memory and the stored
    /// value. Returns `true` when a new best was saved; on a failed write the
    /// best score stays as it was.
    pub fn record<S: KeyValueStore + ?Sized>(&mut self, store: &mut S, score: u32) -> bool {
        let stored = match Self::read(store) {
            Ok(stored) => stored.unwrap_or(0),
            Err(err) => {
                warn!("could not read the stored best score, comparing against memory: {err}");
                self.value
            }
        };
        let best = stored.max(self.value);
        if score <= best {
            self.value = best;
            return false;
        }

        match store.set(keys::BEST_SCORE, score.to_string()) {
            Ok(()) => {
                info!("new best score {score}");
                self.value = score;
                true
            }
            Err(err) => {
                error!("failed to save the best score: {err}");
                false
            }
        }
    }

    fn read<S: KeyValueStore + ?Sized>(store: &S) -> Result<Option<u32>, StoreError> {
        let Some(raw) = store.get(keys::BEST_SCORE)? else {
            return Ok(None);
        };
        raw.trim()
            .parse()
            .map(Some)
            .map_err(|_| StoreError::Corrupt {
                key: keys::BEST_SCORE.to_string(),
                value: raw,
            })
    }
}
