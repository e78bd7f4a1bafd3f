//! Display data for the cart summary, count badge and notifications.
//!
//! These types carry pre-formatted strings so any front end (templates, a
//! DOM binding, the terminal) can render them without touching prices or
//! counts directly. They are snapshots: build a new one after every
//! mutation.

use vitrine_core::{LineItem, Price};

use crate::storage::CartStorage;
use crate::store::CartStore;

/// Notification shown after a product is added.
#[must_use]
pub fn added_to_cart_message(name: &str) -> String {
    format!("{name} ajouté au panier")
}

/// Notification shown when the cart is opened while empty.
pub const EMPTY_CART_MESSAGE: &str = "Votre panier est vide";

/// Notification shown when checkout is requested.
pub const CHECKOUT_UNAVAILABLE_MESSAGE: &str = "Fonctionnalité de paiement à implémenter";

/// Summary heading, e.g. `"Votre Panier (3 articles)"`.
#[must_use]
pub fn heading(count: u64) -> String {
    let plural = if count > 1 { "s" } else { "" };
    format!("Votre Panier ({count} article{plural})")
}

/// Cart line display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItemView {
    /// Product id, used by the quantity and remove controls.
    pub id: String,
    /// Product name captured when the line was added.
    pub name: String,
    /// Image URL captured when the line was added.
    pub image: String,
    /// Units of this product in the cart.
    pub quantity: u32,
    /// Unit price, e.g. `"50.00 DH"`.
    pub price: String,
    /// Unit price times quantity.
    pub line_price: String,
    /// Unit price and quantity, e.g. `"50.00 DH x 2"`.
    pub price_label: String,
}

impl From<&LineItem> for CartItemView {
    fn from(item: &LineItem) -> Self {
        let price = item.unit_price.display();
        Self {
            id: item.id.to_string(),
            name: item.name.clone(),
            image: item.image_ref.clone(),
            quantity: item.quantity(),
            price_label: format!("{price} x {}", item.quantity()),
            line_price: item.line_total().display(),
            price,
        }
    }
}

/// Cart summary display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    /// Summary heading, e.g. `"Votre Panier (3 articles)"`.
    pub heading: String,
    /// One entry per line, in insertion order.
    pub items: Vec<CartItemView>,
    /// Formatted total, e.g. `"230.00 DH"`.
    pub total: String,
    /// Units across all lines.
    pub item_count: u64,
}

impl CartView {
    /// Create an empty cart view.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            heading: heading(0),
            items: Vec::new(),
            total: Price::ZERO.display(),
            item_count: 0,
        }
    }

    /// Returns true if there are no lines to show.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<S: CartStorage> From<&CartStore<S>> for CartView {
    fn from(store: &CartStore<S>) -> Self {
        Self {
            heading: heading(store.count()),
            items: store.items().iter().map(CartItemView::from).collect(),
            total: store.total().display(),
            item_count: store.count(),
        }
    }
}

/// What opening the cart shows: a summary, or a notification when there is
/// nothing to summarize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartPanel {
    /// Nothing in the cart; show this message instead of the summary.
    Empty(&'static str),
    /// Summary of the current lines.
    Summary(CartView),
}

impl CartPanel {
    /// Build the panel for the current cart state.
    pub fn open<S: CartStorage>(store: &CartStore<S>) -> Self {
        if store.is_empty() {
            Self::Empty(EMPTY_CART_MESSAGE)
        } else {
            Self::Summary(CartView::from(store))
        }
    }
}

/// Header badge showing the number of units in the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountBadge {
    /// Units in the cart.
    pub count: u64,
}

impl CountBadge {
    /// Build the badge for `count` units.
    #[must_use]
    pub const fn new(count: u64) -> Self {
        Self { count }
    }

    /// The badge is hidden while the cart is empty.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.count > 0
    }
}
