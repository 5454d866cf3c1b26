//! Terminal collaborators for the cart model.
//!
//! Notifications are written to stderr as they happen. The renderer only
//! keeps the latest snapshot, which the command prints once it finishes, so
//! a command that redraws several times still shows a single cart.

use std::cell::RefCell;
use std::rc::Rc;

use tandoor_cart::{CartRenderer, CartSnapshot, LinkOpener, NotificationSink};
use tandoor_core::{CurrencyCode, NotificationLevel, Price};
use url::Url;

/// Writes notifications to stderr, one line each.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl NotificationSink for ConsoleNotifier {
    #[allow(clippy::print_stderr)]
    fn notify(&self, message: &str, level: NotificationLevel) {
        eprintln!("[{level}] {message}");
    }
}

/// Remembers the last snapshot drawn.
#[derive(Debug, Clone)]
pub struct ConsoleRenderer {
    currency: CurrencyCode,
    latest: Rc<RefCell<Option<CartSnapshot>>>,
}

impl ConsoleRenderer {
    pub fn new(currency: CurrencyCode) -> Self {
        Self {
            currency,
            latest: Rc::default(),
        }
    }

    /// Print the last snapshot drawn, if any.
    #[allow(clippy::print_stdout)]
    pub fn flush(&self) {
        if let Some(snapshot) = self.latest.borrow().as_ref() {
            print!("{}", format_cart(snapshot, self.currency));
        }
    }
}

impl CartRenderer for ConsoleRenderer {
    fn render(&self, snapshot: &CartSnapshot) {
        *self.latest.borrow_mut() = Some(snapshot.clone());
    }
}

/// Prints deep-links for the user to open.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrintOpener;

impl LinkOpener for PrintOpener {
    #[allow(clippy::print_stdout)]
    fn open(&self, url: &Url) {
        println!("Open this link to continue in the chat:\n{url}");
    }
}

/// Text rendering of a cart.
pub fn format_cart(snapshot: &CartSnapshot, currency: CurrencyCode) -> String {
    if snapshot.is_empty() {
        return "Your cart is empty\n".to_string();
    }

    let mut out = format!("Cart ({} items)\n", snapshot.item_count());
    for line in snapshot.lines() {
        out.push_str(&format!(
            "  {} x{} @ {} = {}\n",
            line.name(),
            line.quantity(),
            Price::new(line.unit_price(), currency),
            Price::new(line.line_total(), currency),
        ));
    }
    out.push_str(&format!("Total: {}\n", Price::new(snapshot.total(), currency)));
    out
}
