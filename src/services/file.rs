//! Key-value store persisted as a single JSON object on disk.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::KeyValueStore;
use crate::error::StoreResult;

/// Key-value store kept in memory and written through to a JSON file.
///
/// Every write rewrites the whole file via a temporary sibling and a rename,
/// so a crash mid-write leaves the previous contents intact.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Open the store at `path`, starting empty if the file does not exist.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(err) if err.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => return Err(err.into()),
        };
        log::debug!("opened {} with {} keys", path.display(), values.len());
        Ok(Self { path, values })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> StoreResult<()> {
        let raw = serde_json::to_string_pretty(&self.values)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, raw)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> StoreResult<()> {
        self.values.insert(key.to_string(), value);
        self.flush()
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        if self.values.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}
