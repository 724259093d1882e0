//! Key/value persistence
//!
//! Values are JSON strings. The calculator never depends on a write
//! succeeding; callers log failures and carry on.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use std::path::PathBuf;

use thiserror::Error;

/// Key holding the calculation history
pub const CALCULATED_KEY: &str = "calculated";

/// History key written by older releases; read only
pub const LEGACY_CALCULATED_KEY: &str = "calculations";

/// Key holding the current background pattern
pub const PATTERN_KEY: &str = "pattern";

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage error types
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing a backing file failed
    #[error("I/O error on {path}: {source}")]
    Io {
        /// File involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// A value could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Key cannot be mapped to a storage location
    #[error("Invalid key: {0:?}")]
    InvalidKey(String),
}

impl StorageError {
    /// Create an I/O error for a path
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// String key/value store
pub trait Storage {
    /// Returns the stored value, `None` when absent
    fn get_item(&self, key: &str) -> StorageResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value
    fn set_item(&mut self, key: &str, value: &str) -> StorageResult<()>;

    /// Removes `key`; absent keys are not an error
    fn remove_item(&mut self, key: &str) -> StorageResult<()>;
}

impl<S: Storage + ?Sized> Storage for &mut S {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&mut self, key: &str) -> StorageResult<()> {
        (**self).remove_item(key)
    }
}

impl<S: Storage + ?Sized> Storage for Box<S> {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&mut self, key: &str) -> StorageResult<()> {
        (**self).remove_item(key)
    }
}
