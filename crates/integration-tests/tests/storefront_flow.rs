//! Product cards through to the rendered cart summary.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use vitrine_cart::view::{CartPanel, CountBadge, EMPTY_CART_MESSAGE, added_to_cart_message};
use vitrine_cart::{CartStore, CartView, MemoryStorage, ProductCard, Wishlist};
use vitrine_core::ProductId;
use vitrine_integration_tests::TestShop;

fn card(data_id: Option<&str>, title: &str, price: &str) -> ProductCard {
    ProductCard {
        data_id: data_id.map(str::to_owned),
        title: title.to_owned(),
        price_text: price.to_owned(),
        image_src: format!("/img/{}.jpg", title.to_lowercase()),
    }
}

#[test]
fn test_shopping_trip() {
    let shop = TestShop::new();
    let mut cart = shop.session();

    assert_eq!(CartPanel::open(&cart), CartPanel::Empty(EMPTY_CART_MESSAGE));
    assert!(!CountBadge::new(cart.count()).is_visible());

    let caftan = card(Some("caftan-01"), "Caftan", "450.00 DH")
        .to_candidate()
        .unwrap();
    let toast = added_to_cart_message(&caftan.name);
    cart.add_item(caftan);
    assert_eq!(toast, "Caftan ajouté au panier");

    let babouches = card(Some("babouches-02"), "Babouches", "120 DH")
        .to_candidate()
        .unwrap();
    cart.add_item(babouches);
    cart.increment_quantity("babouches-02");

    assert!(CountBadge::new(cart.count()).is_visible());

    let CartPanel::Summary(view) = CartPanel::open(&cart) else {
        panic!("expected a summary");
    };
    assert_eq!(view.heading, "Votre Panier (3 articles)");
    assert_eq!(view.items[0].price_label, "450.00 DH x 1");
    assert_eq!(view.items[1].price_label, "120.00 DH x 2");
    assert_eq!(view.total, "690.00 DH");

    // Next page load shows the same summary
    assert_eq!(CartView::from(&shop.session()), view);
}

#[test]
fn test_card_without_id_is_stable_once_added() {
    let mut cart = CartStore::open(MemoryStorage::new());
    let candidate = card(None, "Tajine", "75 DH").to_candidate().unwrap();
    let id = candidate.id.clone();

    cart.add_item(candidate);
    cart.increment_quantity(id.as_str());

    assert_eq!(cart.len(), 1);
    assert_eq!(cart.get(id.as_str()).unwrap().quantity(), 2);
}

#[test]
fn test_wishlist_is_independent_of_cart() {
    let mut cart = CartStore::open(MemoryStorage::new());
    let mut wishlist = Wishlist::new();
    let id = ProductId::parse("lantern-07").unwrap();

    assert!(wishlist.toggle(&id));
    assert!(cart.is_empty());

    cart.add_item(card(Some("lantern-07"), "Lantern", "60 DH").to_candidate().unwrap());
    assert!(!wishlist.toggle(&id));
    assert_eq!(cart.count(), 1);
    assert_eq!(cart.storage().write_count(), 1);
}

#[test]
fn test_card_prices_survive_reload() {
    let shop = TestShop::new();
    let mut cart = shop.session();
    for (id, label) in [
        ("a", "19.99 DH"),
        ("b", "0.1 DH"),
        ("c", "149.90 DH"),
        ("d", "12.345678901 DH"),
        ("e", "10000000000 DH"),
    ] {
        cart.add_item(card(Some(id), id, label).to_candidate().unwrap());
    }
    cart.increment_quantity("e");

    let reloaded = shop.session();
    assert_eq!(reloaded.items(), cart.items());
    assert_eq!(reloaded.total(), cart.total());
}

#[test]
fn test_card_with_unstorable_price_is_refused() {
    let mut cart = CartStore::open(MemoryStorage::new());
    for label in ["50000000000000000000000000000 DH", "12.3456789012345678901 DH"] {
        assert!(card(Some("x"), "Lustre", label).to_candidate().is_err());
    }
    assert!(cart.is_empty());
    cart.add_item(card(Some("x"), "Lustre", "99 DH").to_candidate().unwrap());
    assert_eq!(cart.storage().write_count(), 1);
}
