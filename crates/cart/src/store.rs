//! The cart store.
//!
//! [`CartStore`] is the single owner of a session's line items. All reads
//! and writes of cart data go through it, and every mutation that changes
//! state writes the full snapshot to storage before returning.
//!
//! # Invariants
//!
//! - At most one line item per product id.
//! - Every quantity is at least one. Decrementing stops at one; only
//!   [`CartStore::remove_item`] takes a product out of the cart.
//! - [`CartStore::count`] always equals the sum of all quantities.
//! - The stored snapshot always decodes to the current items.

use tracing::{debug, instrument, warn};
use vitrine_core::{LineItem, Price, ProductCandidate};

use crate::snapshot;
use crate::storage::CartStorage;

/// Storage key used when none is given.
pub const DEFAULT_KEY: &str = "cart";

/// A session's cart, mirrored to a [`CartStorage`] adapter.
#[derive(Debug)]
pub struct CartStore<S> {
    storage: S,
    key: String,
    items: Vec<LineItem>,
    count: u64,
}

impl<S: CartStorage> CartStore<S> {
    /// Open the cart stored under [`DEFAULT_KEY`].
    pub fn open(storage: S) -> Self {
        Self::open_with_key(storage, DEFAULT_KEY)
    }

    /// Open the cart stored under `key`.
    ///
    /// A missing snapshot yields an empty cart. So does a snapshot that
    /// cannot be read or decoded; that case is logged and never surfaced.
    /// Nothing is written until the first mutation.
    pub fn open_with_key(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();

        let items = match storage.load(&key) {
            Ok(Some(raw)) => snapshot::decode(&raw).unwrap_or_else(|e| {
                warn!(%key, error = %e, "Discarding unreadable cart snapshot");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(%key, error = %e, "Cart storage unavailable, starting empty");
                Vec::new()
            }
        };

        let count = items.iter().map(|item| u64::from(item.quantity())).sum();
        debug!(%key, lines = items.len(), count, "Cart loaded");

        Self {
            storage,
            key,
            items,
            count,
        }
    }

    /// Add one unit of `candidate` to the cart.
    ///
    /// Increments the existing line if the product is already present,
    /// otherwise appends a new line with quantity one. Captured name, price
    /// and image of an existing line are left untouched.
    #[instrument(skip(self, candidate), fields(product_id = %candidate.id))]
    pub fn add_item(&mut self, candidate: ProductCandidate) {
        if let Some(item) = self.find_mut(candidate.id.as_str()) {
            let Some(quantity) = item.quantity.checked_add(1) else {
                warn!("Quantity at maximum, ignoring add");
                return;
            };
            item.quantity = quantity;
            debug!(quantity = quantity.get(), "Incremented existing line");
        } else {
            debug!("Appended new line");
            self.items.push(LineItem::from_candidate(candidate));
        }

        self.count += 1;
        self.persist();
    }

    /// Remove the line for `id` entirely.
    ///
    /// Returns `false` (and writes nothing) if no such line exists.
    #[instrument(skip(self))]
    pub fn remove_item(&mut self, id: &str) -> bool {
        let Some(index) = self.items.iter().position(|item| item.id == id) else {
            debug!("No line to remove");
            return false;
        };

        let removed = self.items.remove(index);
        self.count -= u64::from(removed.quantity());
        debug!(quantity = removed.quantity(), "Removed line");

        self.persist();
        true
    }

    /// Add one unit to the line for `id`.
    ///
    /// Returns `false` without touching storage if there is no such line.
    #[instrument(skip(self))]
    pub fn increment_quantity(&mut self, id: &str) -> bool {
        let Some(item) = self.find_mut(id) else {
            return false;
        };
        let Some(quantity) = item.quantity.checked_add(1) else {
            warn!("Quantity at maximum, ignoring increment");
            return false;
        };
        item.quantity = quantity;
        debug!(quantity = quantity.get(), "Incremented line");

        self.count += 1;
        self.persist();
        true
    }

    /// Take one unit off the line for `id`, never going below one.
    ///
    /// Returns `false` without touching storage if there is no such line or
    /// it already holds a single unit.
    #[instrument(skip(self))]
    pub fn decrement_quantity(&mut self, id: &str) -> bool {
        let Some(item) = self.find_mut(id) else {
            return false;
        };
        let Some(quantity) = item
            .quantity
            .get()
            .checked_sub(1)
            .and_then(std::num::NonZeroU32::new)
        else {
            debug!("Quantity at floor of one");
            return false;
        };
        item.quantity = quantity;
        debug!(quantity = quantity.get(), "Decremented line");

        self.count -= 1;
        self.persist();
        true
    }

    /// Sum of unit price times quantity over all lines.
    #[must_use]
    pub fn total(&self) -> Price {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Total number of units in the cart.
    #[must_use]
    pub const fn count(&self) -> u64 {
        self.count
    }

    /// Copy of the current lines, in the order they were first added.
    #[must_use]
    pub fn items(&self) -> Vec<LineItem> {
        self.items.clone()
    }

    /// Borrow the line for `id`, if present.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Returns true if the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Storage key this cart is persisted under.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Borrow the storage adapter.
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Consume the store and return its storage adapter.
    #[must_use]
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn find_mut(&mut self, id: &str) -> Option<&mut LineItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    /// Write the full snapshot. Failures are logged and otherwise ignored;
    /// the in-memory cart stays authoritative for the rest of the session.
    fn persist(&mut self) {
        let raw = match snapshot::encode(&self.items) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "Failed to encode cart snapshot");
                return;
            }
        };

        if let Err(e) = self.storage.store(&self.key, &raw) {
            warn!(error = %e, key = %self.key, "Failed to persist cart snapshot");
        }
    }
}
