//! Key-value storage adapters for cart snapshots.
//!
//! The cart store only needs synchronous get/set of a string under a fixed
//! key. Adapters:
//!
//! - [`MemoryStorage`] - in-process map, for tests and ephemeral sessions
//! - [`FileStorage`] - one JSON file per key under a directory
//! - `LocalStorage` - browser `window.localStorage` (`web` feature)
//!
//! When several writers share one key (two browser tabs, two CLI runs on the
//! same directory) the last write wins. There is no merge and no version
//! check.

mod file;
#[cfg(feature = "web")]
mod local;
mod memory;

use thiserror::Error;

pub use file::FileStorage;
#[cfg(feature = "web")]
pub use local::LocalStorage;
pub use memory::MemoryStorage;

/// Errors raised by storage adapters.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem operation failed.
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing store cannot be reached (e.g. no `localStorage`).
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// The key cannot be used with this adapter.
    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),
}

/// Synchronous string storage under named keys.
pub trait CartStorage {
    /// Read the value stored under `key`, or `None` if nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    fn store(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<T: CartStorage + ?Sized> CartStorage for &mut T {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).load(key)
    }

    fn store(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).store(key, value)
    }
}

impl<T: CartStorage + ?Sized> CartStorage for Box<T> {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).load(key)
    }

    fn store(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).store(key, value)
    }
}

/// Returns true if `key` is safe to use as a file name or storage key.
///
/// Accepts non-empty keys made of ASCII letters, digits, `-` and `_`.
#[must_use]
pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}
