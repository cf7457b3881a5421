//! Screen routing.
//!
//! Screens never switch views themselves; they push a [`Route`] onto a
//! [`Navigator`] supplied by the host.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The app's screens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    /// Sign-up / login.
    Login,
    /// Greeting screen after login.
    Welcome,
    /// The game itself.
    Game,
    /// Theme and logout.
    Settings,
}

impl Route {
    /// Route path as registered with the host router.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Route::Login => "/",
            Route::Welcome => "meetPage",
            Route::Game => "gamePage",
            Route::Settings => "settings",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Optional parameters carried with a route.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteParams {
    /// Display name carried from login to the welcome screen.
    pub name: Option<String>,
}

impl RouteParams {
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

/// Host navigation service.
pub trait Navigator {
    /// Push a screen.
    fn push(&mut self, route: Route, params: RouteParams);
}

impl<N: Navigator + ?Sized> Navigator for &mut N {
    fn push(&mut self, route: Route, params: RouteParams) {
        (**self).push(route, params);
    }
}

/// Navigator that keeps the pushed history.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationStack {
    history: Vec<(Route, RouteParams)>,
}

impl NavigationStack {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Route on top of the stack.
    #[must_use]
    pub fn current(&self) -> Option<&(Route, RouteParams)> {
        self.history.last()
    }

    #[must_use]
    pub fn history(&self) -> &[(Route, RouteParams)] {
        &self.history
    }
}

impl Navigator for NavigationStack {
    fn push(&mut self, route: Route, params: RouteParams) {
        log::debug!("navigate to {route}");
        self.history.push((route, params));
    }
}
