//! Dark/light theme preference.
//!
//! The theme is loaded once and handed to each screen explicitly instead of
//! being looked up from shared global state.

use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::services::{keys, KeyValueStore};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Stored name of the theme.
    #[must_use]
    pub const fn scheme(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Parse a stored value. Anything other than `"dark"` is light.
    fn from_stored(value: &str) -> Self {
        if value == Theme::Dark.scheme() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

/// The theme preference and its persistence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeSettings {
    theme: Theme,
}

impl ThemeSettings {
    #[must_use]
    pub const fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Load the stored theme, falling back to dark.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        match store.get(keys::THEME) {
            Ok(Some(value)) => Self::new(Theme::from_stored(&value)),
            Ok(None) => Self::default(),
            Err(err) => {
                log::error!("failed to load the theme: {err}");
                Self::default()
            }
        }
    }

    #[must_use]
    pub const fn theme(self) -> Theme {
        self.theme
    }

    /// Flip the theme and persist it.
    ///
    /// The in-memory theme changes even when the write fails.
    pub fn toggle<S: KeyValueStore + ?Sized>(&mut self, store: &mut S) -> Theme {
        self.theme = self.theme.toggled();
        if let Err(err) = self.save(store) {
            log::error!("failed to save the theme: {err}");
        }
        self.theme
    }

    fn save<S: KeyValueStore + ?Sized>(&self, store: &mut S) -> Result<(), StoreError> {
        store.set(keys::THEME, self.theme.scheme().to_string())
    }
}
