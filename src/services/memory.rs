//! In-memory stores.

use rustc_hash::FxHashMap;

use super::{CredentialStore, KeyValueStore};
use crate::error::StoreResult;

/// Key-value store backed by a hash map. Nothing survives the process.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: FxHashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> StoreResult<()> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        self.values.remove(key);
        Ok(())
    }
}

/// Credential store backed by a hash map.
#[derive(Clone, Debug, Default)]
pub struct MemoryCredentials {
    secrets: FxHashMap<String, String>,
}

impl MemoryCredentials {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for MemoryCredentials {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.secrets.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> StoreResult<()> {
        self.secrets.insert(key.to_string(), value);
        Ok(())
    }

    fn delete(&mut self, key: &str) -> StoreResult<()> {
        self.secrets.remove(key);
        Ok(())
    }
}
