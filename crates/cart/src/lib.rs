//! Vitrine Cart - the shopping cart state machine and its collaborators.
//!
//! # Architecture
//!
//! - [`store::CartStore`] owns the line items and the item count. Every
//!   mutation writes the full snapshot through a [`storage::CartStorage`]
//!   adapter before returning.
//! - [`snapshot`] is the JSON codec for the persisted line items.
//! - [`storage`] holds the adapters: in-memory, file-backed and (with the
//!   `web` feature) browser `localStorage`.
//! - [`catalog`], [`view`] and [`wishlist`] are the presentation side:
//!   turning product cards into cart candidates and the store back into
//!   something a page or terminal can render.
//!
//! The store is pull-based. It sends no change notifications; callers
//! re-read [`store::CartStore::count`] and [`store::CartStore::total`]
//! after each mutation.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod snapshot;
pub mod storage;
pub mod store;
pub mod view;
pub mod wishlist;

pub use catalog::{CatalogError, ProductCard};
pub use snapshot::SnapshotError;
pub use storage::{CartStorage, FileStorage, MemoryStorage, StorageError};
pub use store::CartStore;
pub use view::{CartItemView, CartPanel, CartView, CountBadge};
pub use wishlist::Wishlist;
