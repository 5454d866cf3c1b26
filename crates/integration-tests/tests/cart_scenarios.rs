//! Integration tests for the cart against a real file store.
//!
//! Each test opens one or more tabs on a temporary site directory and checks
//! both the in-memory cart and what actually landed on disk.

use rust_decimal::Decimal;
use tandoor_cart::store::FileStore;
use tandoor_cart::testing::{Notification, RecordingNotifier, RecordingRenderer};
use tandoor_cart::{CartModel, DEFAULT_STORAGE_KEY, PersistentStore};
use tandoor_core::NotificationLevel;
use tandoor_integration_tests::Site;

fn on_disk(site: &Site) -> Option<String> {
    let path = site.root().join(DEFAULT_STORAGE_KEY);
    std::fs::read_to_string(path).ok()
}

// =============================================================================
// Mutations
// =============================================================================

#[test]
fn test_paneer_and_naan_scenario() {
    let site = Site::new();
    let mut tab = site.open_tab();

    tab.cart.add_item("Paneer Tikka", 250);
    tab.cart.add_item("Paneer Tikka", 250);
    tab.cart.add_item("Naan", 40);

    let snapshot = tab.cart.snapshot();
    let lines: Vec<_> = snapshot
        .lines()
        .iter()
        .map(|line| (line.name().to_string(), line.unit_price(), line.quantity()))
        .collect();
    assert_eq!(
        lines,
        vec![
            ("Paneer Tikka".to_string(), Decimal::from(250), 2),
            ("Naan".to_string(), Decimal::from(40), 1),
        ]
    );
    assert_eq!(tab.cart.total(), Decimal::from(540));
    assert_eq!(tab.cart.item_count(), 3);
    assert_eq!(
        on_disk(&site).as_deref(),
        Some(
            r#"[{"name":"Paneer Tikka","unitPrice":"250","quantity":2},{"name":"Naan","unitPrice":"40","quantity":1}]"#
        )
    );
}

#[test]
fn test_first_price_wins_across_repeated_adds() {
    let site = Site::new();
    let mut tab = site.open_tab();

    tab.cart.add_item("Masala Chai", Decimal::new(4550, 2));
    tab.cart.add_item("Masala Chai", 99);
    tab.cart.add_item("Masala Chai", 0);

    assert_eq!(tab.cart.len(), 1);
    assert_eq!(tab.cart.quantity_of("Masala Chai"), Some(3));
    assert_eq!(tab.cart.total(), Decimal::new(13650, 2));
}

#[test]
fn test_update_quantity_clamps_and_keeps_total_consistent() {
    let site = Site::new();
    let mut tab = site.open_tab();
    tab.cart.add_item("Naan", 40);
    tab.cart.add_item("Dal Makhani", 150);

    for (requested, expected) in [(5, 5), (0, 1), (-3, 1), (2, 2)] {
        tab.cart.update_quantity("Naan", requested);
        assert_eq!(tab.cart.quantity_of("Naan"), Some(expected));
        let expected_total = Decimal::from(40) * Decimal::from(expected) + Decimal::from(150);
        assert_eq!(tab.cart.total(), expected_total);
        assert_eq!(tab.renderer.last().unwrap().total(), expected_total);
    }
}

#[test]
fn test_remove_missing_dish_changes_nothing() {
    let site = Site::new();
    let mut tab = site.open_tab();
    tab.cart.add_item("Naan", 40);
    let renders = tab.renderer.count();
    let notifications = tab.notifier.notifications().len();
    let before = on_disk(&site);

    tab.cart.remove_item("Biryani");

    assert_eq!(tab.cart.quantity_of("Naan"), Some(1));
    assert_eq!(tab.renderer.count(), renders);
    assert_eq!(tab.notifier.notifications().len(), notifications);
    assert_eq!(on_disk(&site), before);
}

#[test]
fn test_clear_persists_empty_sequence() {
    let site = Site::new();
    let mut tab = site.open_tab();

    tab.cart.add_item("Dal", 150);
    tab.cart.clear();

    assert!(tab.cart.is_empty());
    assert_eq!(tab.cart.total(), Decimal::ZERO);
    assert_eq!(on_disk(&site).as_deref(), Some("[]"));
    assert_eq!(
        tab.notifier.last(),
        Some(Notification::new("Cart cleared!", NotificationLevel::Info))
    );
}

#[test]
fn test_invalid_items_never_reach_disk() {
    let site = Site::new();
    let mut tab = site.open_tab();

    tab.cart.add_item("  ", 100);
    tab.cart.add_item("Kulfi", -1);
    tab.cart.add_item("Kulfi", f64::NAN);

    assert!(tab.cart.is_empty());
    assert!(on_disk(&site).is_none());
    assert_eq!(tab.notifier.at_level(NotificationLevel::Error).len(), 3);
}

// =============================================================================
// Persistence
// =============================================================================

#[test]
fn test_cart_survives_reopening() {
    let site = Site::new();
    {
        let mut tab = site.open_tab();
        tab.cart.add_item("Gulab Jamun", 90);
        tab.cart.add_item("Gulab Jamun", 90);
        tab.cart.add_item("Mango Lassi", 120);
    }

    let reopened = site.open_tab();
    assert_eq!(reopened.cart.quantity_of("Gulab Jamun"), Some(2));
    assert_eq!(reopened.cart.total(), Decimal::from(300));
    // initialize renders once and announces nothing
    assert_eq!(reopened.renderer.count(), 1);
    assert!(reopened.notifier.notifications().is_empty());
}

#[test]
fn test_malformed_document_opens_empty() {
    let site = Site::new();
    site.store()
        .set(DEFAULT_STORAGE_KEY, b"{not json")
        .unwrap();

    let tab = site.open_tab();
    assert!(tab.cart.is_empty());
    assert_eq!(tab.renderer.last().unwrap().len(), 0);
}

#[test]
fn test_legacy_document_is_normalized() {
    let site = Site::new();
    site.store()
        .set(
            DEFAULT_STORAGE_KEY,
            br#"[{"dish":"Naan","price":40,"quantity":1},{"name":"Naan","unitPrice":"45","quantity":2},{"name":"","unitPrice":"1","quantity":1}]"#,
        )
        .unwrap();

    let tab = site.open_tab();
    assert_eq!(tab.cart.len(), 1);
    assert_eq!(tab.cart.quantity_of("Naan"), Some(3));
    assert_eq!(tab.cart.total(), Decimal::from(120));
}

#[test]
fn test_unwritable_store_degrades_to_session_cart() {
    let site = Site::new();
    let blocker = site.root().join("blocked");
    std::fs::write(&blocker, b"not a directory").unwrap();

    let notifier = RecordingNotifier::new();
    let mut cart = CartModel::open(
        FileStore::new(&blocker),
        DEFAULT_STORAGE_KEY,
        RecordingRenderer::new(),
        notifier.clone(),
    );
    cart.add_item("Naan", 40);
    cart.add_item("Naan", 40);

    assert_eq!(cart.quantity_of("Naan"), Some(2));
    // one per failed write, plus the failed read on open
    let warnings = notifier.at_level(NotificationLevel::Warning);
    assert!(warnings.len() >= 2);
    assert!(
        warnings
            .iter()
            .all(|w| w.message.contains("kept for this session"))
    );
}
