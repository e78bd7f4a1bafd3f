//! Integration tests for Vitrine.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p vitrine-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_session` - Store behavior across sessions on file-backed storage
//! - `shared_storage` - Several stores writing the same key
//! - `storefront_flow` - Product cards through to the rendered summary
//!
//! This library holds the fixtures those tests share.

use std::path::Path;

use tempfile::TempDir;
use vitrine_cart::{CartStore, FileStorage};
use vitrine_core::{Price, ProductCandidate, ProductId};

/// A temporary storage directory that outlives any number of sessions.
pub struct TestShop {
    dir: TempDir,
}

impl TestShop {
    /// Create a fresh, empty storage directory.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create temp dir"),
        }
    }

    /// Directory holding the snapshot files.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Start a new session: a cart store freshly loaded from disk.
    #[must_use]
    pub fn session(&self) -> CartStore<FileStorage> {
        CartStore::open(FileStorage::new(self.dir.path()))
    }

    /// Raw snapshot currently on disk, if any.
    #[must_use]
    pub fn snapshot(&self) -> Option<String> {
        std::fs::read_to_string(self.dir.path().join("cart.json")).ok()
    }

    /// Overwrite the snapshot on disk.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be written.
    #[allow(clippy::expect_used)]
    pub fn write_snapshot(&self, raw: &str) {
        std::fs::write(self.dir.path().join("cart.json"), raw).expect("failed to write snapshot");
    }
}

impl Default for TestShop {
    fn default() -> Self {
        Self::new()
    }
}

/// Candidate with a whole-unit price and derived name and image.
///
/// # Panics
///
/// Panics if `id` is blank.
#[must_use]
#[allow(clippy::expect_used)]
pub fn candidate(id: &str, price: u32) -> ProductCandidate {
    ProductCandidate::new(
        ProductId::parse(id).expect("test ids are never blank"),
        format!("Product {id}"),
        Price::from_units(price),
        format!("https://cdn.example.com/{id}.jpg"),
    )
}
