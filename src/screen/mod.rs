//! Screen controllers.
//!
//! Each screen receives its collaborators (stores, navigator, theme)
//! explicitly when it is opened; nothing is looked up from shared state.

mod game;
mod settings;
mod welcome;

pub use game::{GameScreen, RoundView};
pub use settings::SettingsScreen;
pub use welcome::{WelcomeScreen, GUEST_NAME};
