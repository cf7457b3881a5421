//! Greeting screen shown after login.

use serde::{Deserialize, Serialize};

use crate::services::{keys, KeyValueStore, Navigator, Route, RouteParams, StoreExt};
use crate::theme::Theme;

/// Name shown when nobody is known.
pub const GUEST_NAME: &str = "Guest";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
struct WelcomeData {
    name: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WelcomeScreen {
    name: Option<String>,
    theme: Theme,
}

impl WelcomeScreen {
    /// Open the screen.
    ///
    /// A name passed in `params` is cached for later visits; without one the
    /// cached name is used.
    pub fn open<S: KeyValueStore + ?Sized>(store: &mut S, params: &RouteParams, theme: Theme) -> Self {
        let name = match &params.name {
            Some(name) => {
                let data = WelcomeData { name: name.clone() };
                if let Err(err) = store.set_json(keys::WELCOME_DATA, &data) {
                    log::error!("failed to save the welcome data: {err}");
                }
                Some(name.clone())
            }
            None => match store.get_json::<WelcomeData>(keys::WELCOME_DATA) {
                Ok(data) => data.map(|data| data.name),
                Err(err) => {
                    log::error!("failed to load the welcome data: {err}");
                    None
                }
            },
        };
        Self { name, theme }
    }

    /// Copy the logged-in user into the greeting cache at app start.
    pub fn sync_from_logged_in<S: KeyValueStore + ?Sized>(store: &mut S) {
        let result = store.get(keys::LOGGED_IN_USER).and_then(|user| match user {
            Some(name) => store.set_json(keys::WELCOME_DATA, &WelcomeData { name }),
            None => Ok(()),
        });
        if let Err(err) = result {
            log::error!("failed to sync the welcome data: {err}");
        }
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(GUEST_NAME)
    }

    #[must_use]
    pub fn greeting(&self) -> String {
        format!("{}!", self.display_name())
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn start_game<N: Navigator + ?Sized>(&self, navigator: &mut N) {
        navigator.push(Route::Game, RouteParams::none());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{MemoryStore, NavigationStack};

    #[test]
    fn test_guest_without_name() {
        let mut store = MemoryStore::new();
        let screen = WelcomeScreen::open(&mut store, &RouteParams::none(), Theme::Dark);
        assert_eq!(screen.display_name(), GUEST_NAME);
    }

    #[test]
    fn test_name_param_is_cached() {
        let mut store = MemoryStore::new();
        WelcomeScreen::open(&mut store, &RouteParams::with_name("Ana"), Theme::Dark);

        let later = WelcomeScreen::open(&mut store, &RouteParams::none(), Theme::Light);
        assert_eq!(later.greeting(), "Ana!");
        assert_eq!(later.theme(), Theme::Light);
    }

    #[test]
    fn test_sync_from_logged_in() {
        let mut store = MemoryStore::new();
        store.set(keys::LOGGED_IN_USER, "Bob".into()).unwrap();

        WelcomeScreen::sync_from_logged_in(&mut store);

        let screen = WelcomeScreen::open(&mut store, &RouteParams::none(), Theme::Dark);
        assert_eq!(screen.display_name(), "Bob");
    }

    #[test]
    fn test_start_game_navigates() {
        let mut store = MemoryStore::new();
        let mut nav = NavigationStack::new();
        let screen = WelcomeScreen::open(&mut store, &RouteParams::none(), Theme::Dark);

        screen.start_game(&mut nav);
        assert_eq!(nav.current().map(|(route, _)| *route), Some(Route::Game));
    }
}
