//! Settings screen: theme switch and logout.

use crate::account::AccountService;
use crate::error::AuthError;
use crate::services::{CredentialStore, KeyValueStore, Navigator, Route, RouteParams};
use crate::theme::{Theme, ThemeSettings};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SettingsScreen {
    theme: ThemeSettings,
}

impl SettingsScreen {
    #[must_use]
    pub fn new(theme: ThemeSettings) -> Self {
        Self { theme }
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme.theme()
    }

    /// Caption of the theme switch.
    #[must_use]
    pub fn theme_label(&self) -> &'static str {
        if self.theme().is_dark() {
            "Switch to Light Mode"
        } else {
            "Switch to Dark Mode"
        }
    }

    pub fn toggle_theme<S: KeyValueStore + ?Sized>(&mut self, store: &mut S) -> Theme {
        self.theme.toggle(store)
    }

    /// Log out and return to the login screen.
    ///
    /// Navigation only happens once the session is gone.
    pub fn logout<S, C, N>(
        &self,
        accounts: &mut AccountService<S, C>,
        navigator: &mut N,
    ) -> Result<(), AuthError>
    where
        S: KeyValueStore,
        C: CredentialStore,
        N: Navigator + ?Sized,
    {
        accounts.logout()?;
        navigator.push(Route::Login, RouteParams::none());
        Ok(())
    }
}
