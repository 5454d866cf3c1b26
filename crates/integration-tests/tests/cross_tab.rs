//! Integration tests for carts open in several tabs at once.

use rust_decimal::Decimal;
use tandoor_cart::{DEFAULT_STORAGE_KEY, PersistentStore, StorageEvent};
use tandoor_integration_tests::Site;

#[test]
fn test_second_tab_follows_first_tab_writes() {
    let site = Site::new();
    let mut first = site.open_tab();
    let mut second = site.open_tab();

    first.cart.add_item("Butter Chicken", 340);
    first.cart.add_item("Garlic Naan", 60);
    assert!(second.cart.is_empty());

    assert!(second.observe_write(&site));
    assert_eq!(second.cart.snapshot(), first.cart.snapshot());
    assert_eq!(second.renderer.last().unwrap().total(), Decimal::from(400));
}

#[test]
fn test_resync_does_not_write_back_or_notify() {
    let site = Site::new();
    let mut first = site.open_tab();
    let mut second = site.open_tab();
    first.cart.add_item("Kulfi", 110);

    let notifications = second.notifier.notifications().len();
    second.observe_write(&site);

    assert_eq!(second.notifier.notifications().len(), notifications);
    assert_eq!(
        site.store().get(DEFAULT_STORAGE_KEY).unwrap(),
        first.cart.store().get(DEFAULT_STORAGE_KEY).unwrap()
    );
}

#[test]
fn test_last_writer_wins() {
    let site = Site::new();
    let mut first = site.open_tab();
    let mut second = site.open_tab();

    first.cart.add_item("Naan", 40);
    // second never saw the event and overwrites with its own view
    second.cart.add_item("Kulfi", 110);

    first.observe_write(&site);
    assert!(!first.cart.contains("Naan"));
    assert!(first.cart.contains("Kulfi"));
}

#[test]
fn test_removed_key_empties_other_tabs() {
    let site = Site::new();
    let mut first = site.open_tab();
    first.cart.add_item("Naan", 40);
    let mut second = site.open_tab();
    assert!(second.cart.contains("Naan"));

    first.cart.store_mut().remove(DEFAULT_STORAGE_KEY).unwrap();
    assert!(second.cart.handle_storage_event(&StorageEvent {
        key: DEFAULT_STORAGE_KEY.to_string(),
        new_value: None,
    }));
    assert!(second.cart.is_empty());
}

#[test]
fn test_events_for_other_keys_are_ignored() {
    let site = Site::new();
    let mut tab = site.open_tab();
    tab.cart.add_item("Naan", 40);
    let renders = tab.renderer.count();

    assert!(!tab.cart.handle_storage_event(&StorageEvent {
        key: "language".to_string(),
        new_value: Some(b"hi".to_vec()),
    }));
    assert_eq!(tab.renderer.count(), renders);
    assert!(tab.cart.contains("Naan"));
}
