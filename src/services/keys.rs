//! Storage keys shared by the screens.

/// Best score, as a decimal string.
pub const BEST_SCORE: &str = "bestScore";

/// Theme preference, `"dark"` or `"light"`.
pub const THEME: &str = "theme";

/// JSON list of `{"name": ...}` accounts.
pub const ACCOUNTS: &str = "accounts";

/// Name of the logged-in user.
pub const LOGGED_IN_USER: &str = "loggedInUser";

/// JSON `{"name": ...}` greeting cache for the welcome screen.
pub const WELCOME_DATA: &str = "meetPageData";

/// Session token, kept in the credential store.
pub const USER_TOKEN: &str = "userToken";
