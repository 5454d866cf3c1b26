//! Cart commands.
//!
//! # Usage
//!
//! ```bash
//! tandoor add "Paneer Tikka" 250
//! tandoor order "garlic naan"
//! tandoor set "Paneer Tikka" 2
//! tandoor remove "Paneer Tikka"
//! tandoor show
//! tandoor clear
//! tandoor checkout
//! ```
//!
//! # Environment Variables
//!
//! - `TANDOOR_STORE_DIR` - Directory holding the persisted cart
//! - `TANDOOR_CART_KEY` - Key the cart is persisted under

use rust_decimal::Decimal;
use tandoor_cart::menu::Menu;
use tandoor_cart::store::FileStore;
use tandoor_cart::{CartConfig, CartModel, CheckoutDispatcher};
use thiserror::Error;

use super::console::{ConsoleNotifier, ConsoleRenderer, PrintOpener};

/// Errors that stop a cart command before it reaches the cart.
#[derive(Debug, Error)]
pub enum CartCommandError {
    /// Price argument is not a decimal number.
    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    /// Dish is not on the menu.
    #[error("No dish named {0:?} on the menu")]
    UnknownDish(String),

    /// Built-in menu could not be loaded.
    #[error("Menu unavailable: {0}")]
    Menu(#[from] serde_json::Error),
}

/// Open the persisted cart and run `action` against it, then print the
/// resulting cart.
fn with_cart(config: &CartConfig, action: impl FnOnce(&mut CartModel<FileStore>)) {
    let renderer = ConsoleRenderer::new(config.currency);
    let mut cart = CartModel::open(
        config.file_store(),
        config.storage_key.as_str(),
        renderer.clone(),
        ConsoleNotifier,
    );
    action(&mut cart);
    renderer.flush();
}

/// Print the cart.
pub fn show(config: &CartConfig) {
    with_cart(config, |_| {});
}

/// Add one unit of `name` at `price`.
pub fn add(config: &CartConfig, name: &str, price: &str) -> Result<(), CartCommandError> {
    let price: Decimal = price
        .trim()
        .parse()
        .map_err(|_| CartCommandError::InvalidPrice(price.to_owned()))?;
    with_cart(config, |cart| cart.add_item(name, price));
    Ok(())
}

/// Add one unit of a menu dish at its menu price.
pub fn order(config: &CartConfig, dish: &str) -> Result<(), CartCommandError> {
    let menu = Menu::builtin()?;
    let card = menu
        .find(dish)
        .ok_or_else(|| CartCommandError::UnknownDish(dish.to_owned()))?;
    tracing::info!(dish = %card.name, price = %card.price, "Ordering from menu");
    with_cart(config, |cart| cart.add_item(card.name.as_str(), card.price));
    Ok(())
}

/// Remove `name` from the cart.
pub fn remove(config: &CartConfig, name: &str) {
    with_cart(config, |cart| cart.remove_item(name));
}

/// Set the quantity of `name`.
pub fn set(config: &CartConfig, name: &str, quantity: i64) {
    with_cart(config, |cart| cart.update_quantity(name, quantity));
}

/// Empty the cart.
pub fn clear(config: &CartConfig) {
    with_cart(config, CartModel::clear);
}

/// Hand the cart to the restaurant's chat.
pub fn checkout(config: &CartConfig) {
    let dispatcher = CheckoutDispatcher::new(
        config.messaging.deep_link().clone(),
        config.currency,
        PrintOpener,
    );
    with_cart(config, |cart| {
        dispatcher.dispatch(cart);
    });
}
