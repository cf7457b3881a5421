//! Local accounts: sign-up, login, session restore and logout.
//!
//! Account names live in the key-value store as a JSON list; passwords and
//! the session token live in the credential store. A successful sign-up or
//! login yields a [`Session`], which the caller turns into navigation to the
//! welcome screen.
//!
//! ## Example Usage
//!
//! ```
//! use color_hunt::account::AccountService;
//! use color_hunt::services::{MemoryCredentials, MemoryStore, NavigationStack, Route};
//!
//! let mut accounts = AccountService::new(MemoryStore::new(), MemoryCredentials::new());
//! assert!(accounts.needs_sign_up());
//!
//! let session = accounts.sign_up("Ana", "hunter2").unwrap();
//! let mut nav = NavigationStack::new();
//! session.enter(&mut nav);
//! assert_eq!(nav.current().unwrap().0, Route::Welcome);
//!
//! assert!(accounts.login("Ana", "wrong").is_err());
//! ```

mod name;

pub use name::{is_name_char, sanitize_name, SanitizedName, INVALID_NAME_MESSAGE};

use log::{error, info};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::{AuthError, StoreError};
use crate::services::{keys, CredentialStore, KeyValueStore, Navigator, Route, RouteParams, StoreExt};

/// A stored account. Only the name is public; the password lives in the
/// credential store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub name: String,
}

/// A logged-in user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub name: String,
}

impl Session {
    /// Navigate to the welcome screen, carrying the display name.
    pub fn enter<N: Navigator + ?Sized>(&self, navigator: &mut N) {
        navigator.push(Route::Welcome, RouteParams::with_name(&self.name));
    }
}

/// Derive the session token for a name/password pair: lowercase hex
/// SHA-256 of the two concatenated.
#[must_use]
pub fn session_token(name: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(name.as_bytes());
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

/// Account operations over a key-value store and a credential store.
#[derive(Debug)]
pub struct AccountService<S, C> {
    store: S,
    credentials: C,
}

impl<S: KeyValueStore, C: CredentialStore> AccountService<S, C> {
    pub fn new(store: S, credentials: C) -> Self {
        Self { store, credentials }
    }

    /// Give the stores back.
    pub fn into_inner(self) -> (S, C) {
        (self.store, self.credentials)
    }

    /// Stored accounts, in sign-up order.
    pub fn accounts(&self) -> Result<Vec<Account>, StoreError> {
        Ok(self.store.get_json(keys::ACCOUNTS)?.unwrap_or_default())
    }

    /// Whether the login screen should open on the sign-up form.
    ///
    /// An unreadable account list is logged and answered with `false`.
    pub fn needs_sign_up(&self) -> bool {
        match self.accounts() {
            Ok(accounts) => accounts.is_empty(),
            Err(err) => {
                error!("failed to load the accounts: {err}");
                false
            }
        }
    }

    /// Create an account and log it in.
    pub fn sign_up(&mut self, name: &str, password: &str) -> Result<Session, AuthError> {
        if name.trim().is_empty() || password.trim().is_empty() {
            return Err(AuthError::EmptyCredentials);
        }
        if !name.chars().all(is_name_char) {
            return Err(AuthError::InvalidName);
        }

        // Passwords share the credential store with the session token
        if name == keys::USER_TOKEN {
            return Err(AuthError::NameTaken(name.to_string()));
        }

        let mut accounts = self.accounts()?;
        if accounts.iter().any(|account| account.name == name) {
            return Err(AuthError::NameTaken(name.to_string()));
        }
        accounts.push(Account {
            name: name.to_string(),
        });

        self.store.set_json(keys::ACCOUNTS, &accounts)?;
        self.credentials.set(name, password.to_string())?;
        info!("created account {name}");
        self.open_session(name, password)
    }

    /// Check a name/password pair and log it in.
    pub fn login(&mut self, name: &str, password: &str) -> Result<Session, AuthError> {
        let accounts = self.accounts()?;
        if !accounts.iter().any(|account| account.name == name) {
            return Err(AuthError::IncorrectName);
        }

        let saved = self.credentials.get(name)?;
        if saved.as_deref() != Some(password) {
            return Err(AuthError::IncorrectPassword);
        }

        self.open_session(name, password)
    }

    /// Resume a previous login if a token and a user are stored.
    pub fn restore_session(&self) -> Option<Session> {
        let restored = (|| -> Result<Option<Session>, StoreError> {
            if self.credentials.get(keys::USER_TOKEN)?.is_none() {
                return Ok(None);
            }
            Ok(self
                .store
                .get(keys::LOGGED_IN_USER)?
                .map(|name| Session { name }))
        })();

        restored.unwrap_or_else(|err| {
            error!("failed to load the token: {err}");
            None
        })
    }

    /// Forget the session token and the logged-in user.
    pub fn logout(&mut self) -> Result<(), AuthError> {
        self.credentials.delete(keys::USER_TOKEN)?;
        self.store.remove(keys::LOGGED_IN_USER)?;
        info!("logged out");
        Ok(())
    }

    fn open_session(&mut self, name: &str, password: &str) -> Result<Session, AuthError> {
        self.credentials
            .set(keys::USER_TOKEN, session_token(name, password))?;
        self.store.set(keys::LOGGED_IN_USER, name.to_string())?;
        info!("{name} logged in");
        Ok(Session {
            name: name.to_string(),
        })
    }
}
