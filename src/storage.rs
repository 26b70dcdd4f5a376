use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use thiserror::Error;
use tracing::warn;

use crate::config::{Config, PartialConfig};

/// Key under which the configuration blob is stored.
pub const CONFIG_KEY: &str = "danmu-config";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage backend rejected the write: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// String key-value store the configuration is persisted in. A failed read
/// is indistinguishable from an absent key; both fall back to defaults in
/// [`load`]. Write faults are typed and propagate to the caller.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory store for tests and embedders.
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    #[allow(dead_code)]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// One file per key in the user's config directory.
/// On Windows: %APPDATA%/danmu-settings/<key>.json
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new() -> Self {
        let dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("danmu-settings");
        Self { dir }
    }

    /// Store rooted at an explicit directory.
    #[allow(dead_code)]
    pub fn with_dir(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path(key), value)?;
        Ok(())
    }
}

/// Load the configuration, or defaults when nothing usable is stored.
/// A blob that fails to parse is reported and replaced by defaults instead of
/// being surfaced as an error; a record written by an older build comes back
/// with its missing fields filled in.
pub fn load(store: &impl KeyValueStore) -> Config {
    let Some(raw) = store.get(CONFIG_KEY) else {
        return Config::default();
    };
    match serde_json::from_str::<PartialConfig>(&raw) {
        Ok(partial) => Config::reconcile(partial),
        Err(e) => {
            warn!("stored configuration is unreadable, using defaults: {e}");
            Config::default()
        }
    }
}

/// Persist the configuration under [`CONFIG_KEY`], overwriting any previous
/// value. Backend faults propagate; nothing is retried here.
pub fn save(store: &mut impl KeyValueStore, config: &Config) -> Result<(), StorageError> {
    let data = serde_json::to_string_pretty(config)?;
    store.set(CONFIG_KEY, &data)
}
