//! Persistence boundary - a string key-value store and the save layout

mod file;
mod memory;
mod save;

pub use file::FileStore;
pub use memory::InMemoryStore;
pub use save::{keys, load_save, migrate_player, write_save, SaveData};

use thiserror::Error;

/// Errors surfaced by store implementations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("store lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// Durable string storage keyed by name
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn put(&self, key: &str, value: &str) -> Result<()>;

    /// Remove every key
    fn clear(&self) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for std::sync::Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn put(&self, key: &str, value: &str) -> Result<()> {
        (**self).put(key, value)
    }

    fn clear(&self) -> Result<()> {
        (**self).clear()
    }
}
