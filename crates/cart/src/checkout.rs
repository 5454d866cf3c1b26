//! Checkout by messaging hand-off.
//!
//! There is no payment step: checkout formats the cart as a chat message,
//! opens the restaurant's messaging deep-link prefilled with it, and empties
//! the cart. Opening is fire-and-forget, so the cart is cleared whether or
//! not the visitor's device actually opened the chat.

use tandoor_core::{CurrencyCode, NotificationLevel, Price};
use tracing::{info, instrument, warn};
use url::Url;

use crate::cart::{CartModel, CartSnapshot};
use crate::error::CartError;
use crate::link::{DeepLink, LinkOpener};
use crate::store::PersistentStore;

const ORDER_GREETING: &str = "Hello! I would like to order:";

/// Format an order message from a snapshot.
///
/// ```text
/// Hello! I would like to order:
///
/// Paneer Tikka x2 - ₹500.00
/// Naan x1 - ₹40.00
///
/// Total: ₹540.00
/// ```
#[must_use]
pub fn order_message(snapshot: &CartSnapshot, currency: CurrencyCode) -> String {
    let lines: Vec<String> = snapshot
        .lines()
        .iter()
        .map(|line| {
            format!(
                "{} x{} - {}",
                line.name(),
                line.quantity(),
                Price::new(line.line_total(), currency)
            )
        })
        .collect();

    format!(
        "{ORDER_GREETING}\n\n{}\n\nTotal: {}",
        lines.join("\n"),
        Price::new(snapshot.total(), currency)
    )
}

/// Sends the cart to the restaurant's chat and clears it.
#[derive(Debug, Clone)]
pub struct CheckoutDispatcher<O> {
    link: DeepLink,
    currency: CurrencyCode,
    opener: O,
}

impl<O: LinkOpener> CheckoutDispatcher<O> {
    #[must_use]
    pub const fn new(link: DeepLink, currency: CurrencyCode, opener: O) -> Self {
        Self {
            link,
            currency,
            opener,
        }
    }

    /// Dispatch the current cart.
    ///
    /// An empty cart is refused with a warning notification and left
    /// untouched. Otherwise the prefilled link is opened, the cart is
    /// cleared, and the visitor is told the order was sent. Returns the URL
    /// that was opened, or `None` if checkout was refused.
    #[instrument(skip_all, fields(key = cart.key()))]
    pub fn dispatch<S: PersistentStore>(&self, cart: &mut CartModel<S>) -> Option<Url> {
        let snapshot = cart.snapshot();
        if snapshot.is_empty() {
            warn!("Checkout refused, cart is empty");
            cart.report(&CartError::EmptyCartCheckout);
            return None;
        }

        let message = order_message(&snapshot, self.currency);
        let url = self.link.with_text(&message);
        self.opener.open(&url);
        info!(
            lines = snapshot.len(),
            items = snapshot.item_count(),
            total = %snapshot.total(),
            "Order handed off to messaging"
        );

        cart.clear();
        cart.notify(
            "Order sent! Please confirm in the chat.",
            NotificationLevel::Success,
        );
        Some(url)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::cart::DEFAULT_STORAGE_KEY;
    use crate::link::DEFAULT_BASE_URL;
    use crate::store::MemoryStore;
    use crate::testing::{Notification, RecordingNotifier, RecordingOpener, RecordingRenderer};

    fn setup() -> (
        CartModel<MemoryStore>,
        RecordingNotifier,
        CheckoutDispatcher<RecordingOpener>,
        RecordingOpener,
    ) {
        let notifier = RecordingNotifier::new();
        let cart = CartModel::open(
            MemoryStore::new(),
            DEFAULT_STORAGE_KEY,
            RecordingRenderer::new(),
            notifier.clone(),
        );
        let opener = RecordingOpener::new();
        let link = DeepLink::new(DEFAULT_BASE_URL, "918866998866").unwrap();
        let dispatcher = CheckoutDispatcher::new(link, CurrencyCode::INR, opener.clone());
        (cart, notifier, dispatcher, opener)
    }

    #[test]
    fn test_order_message_format() {
        let (mut cart, _, _, _) = setup();
        cart.add_item("Paneer Tikka", 250);
        cart.add_item("Paneer Tikka", 250);
        cart.add_item("Naan", 40);

        assert_eq!(
            order_message(&cart.snapshot(), CurrencyCode::INR),
            "Hello! I would like to order:\n\nPaneer Tikka x2 - ₹500.00\nNaan x1 - ₹40.00\n\nTotal: ₹540.00"
        );
    }

    #[test]
    fn test_order_message_fractional_prices() {
        let (mut cart, _, _, _) = setup();
        cart.add_item("Masala Chai", Decimal::new(455, 1));
        cart.update_quantity("Masala Chai", 3);

        let message = order_message(&cart.snapshot(), CurrencyCode::USD);
        assert!(message.contains("Masala Chai x3 - $136.50"));
        assert!(message.ends_with("Total: $136.50"));
    }

    #[test]
    fn test_empty_cart_is_refused() {
        let (mut cart, notifier, dispatcher, opener) = setup();

        assert!(dispatcher.dispatch(&mut cart).is_none());
        assert!(cart.is_empty());
        assert!(opener.opened().is_empty());
        assert_eq!(
            notifier.notifications(),
            vec![Notification::new(
                "Your cart is empty!",
                NotificationLevel::Warning
            )]
        );
        // clear() was not invoked, so nothing was ever written
        assert!(cart.store().get(DEFAULT_STORAGE_KEY).unwrap().is_none());
    }

    #[test]
    fn test_dispatch_opens_link_and_clears_cart() {
        let (mut cart, notifier, dispatcher, opener) = setup();
        cart.add_item("Dal", 150);

        let url = dispatcher.dispatch(&mut cart).unwrap();

        assert_eq!(opener.opened(), vec![url.clone()]);
        assert!(url.as_str().starts_with("https://wa.me/918866998866?text=Hello%21"));
        let text = url.query_pairs().next().unwrap().1.into_owned();
        assert!(text.contains("Dal x1 - ₹150.00"));

        assert!(cart.is_empty());
        assert_eq!(
            cart.store().get(DEFAULT_STORAGE_KEY).unwrap(),
            Some(b"[]".to_vec())
        );
        let tail: Vec<_> = notifier.notifications().into_iter().rev().take(2).collect();
        assert_eq!(tail[0].level, NotificationLevel::Success);
        assert_eq!(tail[1].message, "Cart cleared!");
    }
}
