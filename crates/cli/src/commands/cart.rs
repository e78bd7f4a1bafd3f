//! Cart commands.
//!
//! Each command plays the part of one shopper gesture: it calls a single
//! cart store operation and then re-reads the count and total to report
//! them, the same way a page would refresh its badge and summary.

use thiserror::Error;
use tracing::{info, warn};

use vitrine_cart::view::{
    CHECKOUT_UNAVAILABLE_MESSAGE, CartPanel, CountBadge, added_to_cart_message,
};
use vitrine_cart::{CartStorage, CartStore, CatalogError, ProductCard};

/// Errors reported by cart commands.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The product arguments do not describe a valid product.
    #[error("Invalid product: {0}")]
    Catalog(#[from] CatalogError),

    /// No line exists for the given product id.
    #[error("No item with id {0:?} in the cart")]
    NotInCart(String),
}

/// Add one unit of a product.
///
/// `price` is a display label such as `"149.90 DH"`; an empty `id`
/// generates one.
///
/// # Errors
///
/// Returns [`CommandError::Catalog`] if the name or price is unusable.
pub fn add<S: CartStorage>(
    store: &mut CartStore<S>,
    id: Option<String>,
    name: String,
    price: String,
    image: String,
) -> Result<(), CommandError> {
    let card = ProductCard {
        data_id: id,
        title: name,
        price_text: price,
        image_src: image,
    };
    let candidate = card.to_candidate()?;
    let id = candidate.id.clone();
    let name = candidate.name.clone();

    store.add_item(candidate);

    info!(product_id = %id, "{}", added_to_cart_message(&name));
    report_badge(store);
    Ok(())
}

/// Remove a product's line entirely.
///
/// # Errors
///
/// Returns [`CommandError::NotInCart`] if the product is not in the cart.
pub fn remove<S: CartStorage>(store: &mut CartStore<S>, id: &str) -> Result<(), CommandError> {
    if !store.remove_item(id) {
        return Err(CommandError::NotInCart(id.to_string()));
    }

    info!(product_id = %id, "Removed from cart");
    report_badge(store);
    Ok(())
}

/// Add one unit to an existing line.
///
/// # Errors
///
/// Returns [`CommandError::NotInCart`] if the product is not in the cart.
pub fn increment<S: CartStorage>(store: &mut CartStore<S>, id: &str) -> Result<(), CommandError> {
    if !store.increment_quantity(id) && store.get(id).is_none() {
        return Err(CommandError::NotInCart(id.to_string()));
    }

    report_quantity(store, id);
    Ok(())
}

/// Take one unit off an existing line, stopping at one.
///
/// # Errors
///
/// Returns [`CommandError::NotInCart`] if the product is not in the cart.
pub fn decrement<S: CartStorage>(store: &mut CartStore<S>, id: &str) -> Result<(), CommandError> {
    if !store.decrement_quantity(id) {
        if store.get(id).is_none() {
            return Err(CommandError::NotInCart(id.to_string()));
        }
        warn!(product_id = %id, "Quantity is already 1; use `remove` to drop the item");
    }

    report_quantity(store, id);
    Ok(())
}

/// Log the cart summary, or the empty-cart notice.
pub fn show<S: CartStorage>(store: &CartStore<S>) {
    for line in render_panel(&CartPanel::open(store)) {
        info!("{line}");
    }
}

/// Log the number of units in the cart.
pub fn count<S: CartStorage>(store: &CartStore<S>) {
    info!(count = store.count(), "Items in cart");
}

/// Log the cart total.
pub fn total<S: CartStorage>(store: &CartStore<S>) {
    info!(total = %store.total(), "Cart total");
}

/// Checkout placeholder.
pub fn checkout<S: CartStorage>(store: &CartStore<S>) {
    if store.is_empty() {
        show(store);
        return;
    }
    warn!("{CHECKOUT_UNAVAILABLE_MESSAGE}");
}

/// Text lines for a cart panel.
#[must_use]
pub fn render_panel(panel: &CartPanel) -> Vec<String> {
    match panel {
        CartPanel::Empty(message) => vec![(*message).to_string()],
        CartPanel::Summary(view) => {
            let mut lines = Vec::with_capacity(view.items.len() + 2);
            lines.push(view.heading.clone());
            for item in &view.items {
                lines.push(format!(
                    "  [{}] {} - {} = {}",
                    item.id, item.name, item.price_label, item.line_price
                ));
            }
            lines.push(format!("Total: {}", view.total));
            lines
        }
    }
}

fn report_badge<S: CartStorage>(store: &CartStore<S>) {
    let badge = CountBadge::new(store.count());
    info!(count = badge.count, visible = badge.is_visible(), "Cart badge");
}

fn report_quantity<S: CartStorage>(store: &CartStore<S>, id: &str) {
    if let Some(item) = store.get(id) {
        info!(product_id = %id, quantity = item.quantity(), "Quantity updated");
    }
    info!(count = store.count(), total = %store.total(), "Cart updated");
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use vitrine_cart::MemoryStorage;
    use vitrine_core::Price;

    use super::*;

    fn add_shirt<S: CartStorage>(store: &mut CartStore<S>) {
        add(
            store,
            Some("p1".to_string()),
            "Shirt".to_string(),
            "100.00 DH".to_string(),
            "https://cdn.example.com/shirt.jpg".to_string(),
        )
        .unwrap();
    }

    #[test]
    fn test_add_twice() {
        let mut store = CartStore::open(MemoryStorage::new());
        add_shirt(&mut store);
        add_shirt(&mut store);

        assert_eq!(store.count(), 2);
        assert_eq!(store.total(), Price::from_units(200));
    }

    #[test]
    fn test_add_without_id_generates_one() {
        let mut store = CartStore::open(MemoryStorage::new());
        add(
            &mut store,
            None,
            "Tajine".to_string(),
            "75 DH".to_string(),
            String::new(),
        )
        .unwrap();

        let items = store.items();
        assert_eq!(items.len(), 1);
        assert!(items.iter().all(|i| i.id.as_str().starts_with("prod_")));
    }

    #[test]
    fn test_add_invalid_price() {
        let mut store = CartStore::open(MemoryStorage::new());
        let result = add(
            &mut store,
            Some("p1".to_string()),
            "Shirt".to_string(),
            "free".to_string(),
            String::new(),
        );

        assert!(matches!(result, Err(CommandError::Catalog(_))));
        assert!(store.is_empty());
        assert_eq!(store.storage().write_count(), 0);
    }

    #[test]
    fn test_remove_missing() {
        let mut store = CartStore::open(MemoryStorage::new());
        assert!(matches!(
            remove(&mut store, "nope"),
            Err(CommandError::NotInCart(_))
        ));
    }

    #[test]
    fn test_increment_and_decrement() {
        let mut store = CartStore::open(MemoryStorage::new());
        add_shirt(&mut store);

        increment(&mut store, "p1").unwrap();
        assert_eq!(store.count(), 2);

        decrement(&mut store, "p1").unwrap();
        decrement(&mut store, "p1").unwrap();
        assert_eq!(store.count(), 1);
        assert_eq!(store.get("p1").unwrap().quantity(), 1);
    }

    #[test]
    fn test_quantity_commands_on_missing_item() {
        let mut store = CartStore::open(MemoryStorage::new());
        assert!(matches!(
            increment(&mut store, "ghost"),
            Err(CommandError::NotInCart(_))
        ));
        assert!(matches!(
            decrement(&mut store, "ghost"),
            Err(CommandError::NotInCart(_))
        ));
    }

    #[test]
    fn test_render_empty_panel() {
        let store = CartStore::open(MemoryStorage::new());
        assert_eq!(
            render_panel(&CartPanel::open(&store)),
            ["Votre panier est vide"]
        );
    }

    #[test]
    fn test_render_summary() {
        let mut store = CartStore::open(MemoryStorage::new());
        add_shirt(&mut store);
        add_shirt(&mut store);

        let lines = render_panel(&CartPanel::open(&store));
        assert_eq!(
            lines,
            [
                "Votre Panier (2 articles)",
                "  [p1] Shirt - 100.00 DH x 2 = 200.00 DH",
                "Total: 200.00 DH",
            ]
        );
    }
}
