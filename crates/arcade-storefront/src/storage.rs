//! Storage backend selection.

use arcade_cache::{CacheError, FileStore, KeyValueStore, MemoryStore};
use arcade_core::CartConfig;

/// The store a storefront persists its cart to.
#[derive(Debug, Clone)]
pub enum StoreBackend {
    Memory(MemoryStore),
    File(FileStore),
}

impl StoreBackend {
    /// File-backed when `storage_dir` is set, in-memory otherwise.
    pub fn from_config(config: &CartConfig) -> Result<Self, CacheError> {
        match &config.storage_dir {
            Some(dir) => Ok(Self::File(FileStore::open(dir)?)),
            None => Ok(Self::Memory(MemoryStore::new())),
        }
    }
}

impl KeyValueStore for StoreBackend {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        match self {
            Self::Memory(store) => store.get(key),
            Self::File(store) => store.get(key),
        }
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), CacheError> {
        match self {
            Self::Memory(store) => store.set(key, value),
            Self::File(store) => store.set(key, value),
        }
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        match self {
            Self::Memory(store) => store.delete(key),
            Self::File(store) => store.delete(key),
        }
    }

    fn keys(&self) -> Result<Vec<String>, CacheError> {
        match self {
            Self::Memory(store) => store.keys(),
            Self::File(store) => store.keys(),
        }
    }
}
