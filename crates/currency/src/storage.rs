//! Durable key-value storage for the persisted settings record.
//!
//! Two backends exist: [`FileStorage`] writes a small JSON document to disk,
//! [`NoopStorage`] keeps nothing. [`detect`] picks one when the store is
//! built, so the store itself never branches on the environment.
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use crate::error::Result;

pub const DEFAULT_STATE_PATH: &str = "config/spent_state.json";

pub trait KeyValueStorage {
    /// Returns the value stored under `key`, `None` if there is none.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn write(&mut self, key: &str, value: &str) -> Result<()>;

    /// `false` for backends that forget everything on exit.
    fn is_durable(&self) -> bool;
}

/// A JSON object file mapping keys to string values.
///
/// Every write rewrites the whole document through a temporary sibling file
/// and a rename, so readers never see a half-written file.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(BTreeMap::new());
            }
            Err(err) => return Err(err.into()),
        };
        Ok(serde_json::from_str(&content)?)
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl KeyValueStorage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load()?.remove(key))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        let mut entries = match self.load() {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!(
                    "discarding unreadable state file {}: {err}",
                    self.path.display()
                );
                BTreeMap::new()
            }
        };
        entries.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let payload = serde_json::to_string_pretty(&entries)?;
        let temp = self.temp_path();
        fs::write(&temp, payload)?;
        fs::rename(&temp, &self.path)?;
        Ok(())
    }

    fn is_durable(&self) -> bool {
        true
    }
}

/// Storage for environments without a persistence backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopStorage;

impl KeyValueStorage for NoopStorage {
    fn read(&self, _key: &str) -> Result<Option<String>> {
        Ok(None)
    }

    fn write(&mut self, _key: &str, _value: &str) -> Result<()> {
        Ok(())
    }

    fn is_durable(&self) -> bool {
        false
    }
}

/// Chooses a backend for `path`.
///
/// `None` means persistence is disabled. A path that can never hold a file,
/// because one of its existing ancestors is not a directory, falls back to
/// [`NoopStorage`] as well. Nothing is created here: directories are made on
/// the first write.
pub fn detect(path: Option<&Path>) -> Box<dyn KeyValueStorage> {
    let Some(path) = path else {
        tracing::debug!("persistence disabled, settings are kept in memory");
        return Box::new(NoopStorage);
    };

    let existing = path
        .ancestors()
        .skip(1)
        .filter(|p| !p.as_os_str().is_empty())
        .find(|p| p.exists());
    if let Some(ancestor) = existing
        && !ancestor.is_dir()
    {
        tracing::warn!(
            "cannot use {} for settings ({} is not a directory), keeping them in memory",
            path.display(),
            ancestor.display()
        );
        return Box::new(NoopStorage);
    }

    let storage = FileStorage::new(path);
    tracing::debug!("persisting settings to {}", storage.path().display());
    Box::new(storage)
}
