//! Services the game talks to: persistence, credentials, navigation.
//!
//! The round engine never touches these. Screens do, through the narrow
//! traits defined here, so a host can back them with whatever its platform
//! offers. [`MemoryStore`] and [`JsonFileStore`] are provided for tests and
//! desktop hosts.

mod file;
mod memory;
pub mod keys;
pub mod navigation;

pub use file::JsonFileStore;
pub use memory::{MemoryCredentials, MemoryStore};
pub use navigation::{NavigationStack, Navigator, Route, RouteParams};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StoreResult;

/// String key-value persistence (best score, theme, accounts).
pub trait KeyValueStore {
    /// Read a value. `Ok(None)` when the key was never set.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Write a value, replacing any previous one.
    fn set(&mut self, key: &str, value: String) -> StoreResult<()>;

    /// Remove a value. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> StoreResult<()>;
}

/// Secure storage for passwords and the session token.
pub trait CredentialStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    fn set(&mut self, key: &str, value: String) -> StoreResult<()>;

    fn delete(&mut self, key: &str) -> StoreResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: String) -> StoreResult<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        (**self).remove(key)
    }
}

impl<C: CredentialStore + ?Sized> CredentialStore for &mut C {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: String) -> StoreResult<()> {
        (**self).set(key, value)
    }

    fn delete(&mut self, key: &str) -> StoreResult<()> {
        (**self).delete(key)
    }
}

/// Typed JSON access on top of a [`KeyValueStore`].
pub trait StoreExt: KeyValueStore {
    /// Read and deserialize a JSON value.
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> StoreResult<Option<T>> {
        match self.get(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Serialize and write a JSON value.
    fn set_json<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> StoreResult<()> {
        let raw = serde_json::to_string(value)?;
        self.set(key, raw)
    }
}

impl<S: KeyValueStore + ?Sized> StoreExt for S {}
