//! Vitrine Core - Shared domain types.
//!
//! This crate provides the types shared by every Vitrine component:
//! - `cart` - Cart store, snapshot codec, storage adapters and view models
//! - `cli` - Terminal front end driving a file-backed cart
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no
//! randomness. This keeps it lightweight and allows it to be used anywhere,
//! including `wasm32` builds running in a browser.
//!
//! # Modules
//!
//! - [`types`] - Validated newtypes for product IDs and prices, plus line items

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
