//! Session wishlist.
//!
//! Tracks which product cards have their heart toggled on. The wishlist
//! lives only for the session and is never persisted.

use std::collections::HashSet;

use tracing::debug;
use vitrine_core::ProductId;

/// Icon class for an active wishlist toggle.
pub const ACTIVE_ICON: &str = "fas fa-heart";

/// Icon class for an inactive wishlist toggle.
pub const INACTIVE_ICON: &str = "far fa-heart";

/// Set of products the shopper has hearted this session.
#[derive(Debug, Clone, Default)]
pub struct Wishlist {
    active: HashSet<ProductId>,
}

impl Wishlist {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the toggle for `id` and return the new state.
    pub fn toggle(&mut self, id: &ProductId) -> bool {
        let active = if self.active.remove(id) {
            false
        } else {
            self.active.insert(id.clone());
            true
        };
        debug!(product_id = %id, active, "Wishlist toggled");
        active
    }

    #[must_use]
    pub fn contains(&self, id: &ProductId) -> bool {
        self.active.contains(id)
    }

    /// Icon class for the toggle of `id`.
    #[must_use]
    pub fn icon_class(&self, id: &ProductId) -> &'static str {
        if self.contains(id) {
            ACTIVE_ICON
        } else {
            INACTIVE_ICON
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}
