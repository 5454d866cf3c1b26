//! Tandoor Cart - the restaurant site's cart subsystem.
//!
//! The cart lives on the visitor's device. Every mutation is written through
//! to a [`PersistentStore`], redrawn through a [`CartRenderer`] and announced
//! through a [`NotificationSink`]. Checkout and reservations leave the site
//! as prefilled chat messages opened through a [`LinkOpener`].
//!
//! # Modules
//!
//! - [`cart`] - Line items, snapshots and the cart model
//! - [`codec`] - Persisted document format and normalization
//! - [`store`] - Persistent store trait with memory and file backends
//! - [`notify`] - Renderer and notification contracts
//! - [`link`] - Messaging deep-links
//! - [`checkout`] - Order hand-off
//! - [`reservation`] - Table reservation hand-off
//! - [`menu`] - Menu search and filters
//! - [`config`] - Environment configuration
//!
//! # Example
//!
//! ```
//! use tandoor_cart::notify::{NoopRenderer, TracingNotifier};
//! use tandoor_cart::store::MemoryStore;
//! use tandoor_cart::{CartModel, DEFAULT_STORAGE_KEY};
//!
//! let mut cart = CartModel::open(
//!     MemoryStore::new(),
//!     DEFAULT_STORAGE_KEY,
//!     NoopRenderer,
//!     TracingNotifier,
//! );
//! cart.add_item("Paneer Tikka", 250);
//! cart.add_item("Naan", 40);
//! assert_eq!(cart.total(), rust_decimal::Decimal::from(290));
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod checkout;
pub mod codec;
pub mod config;
pub mod error;
pub mod link;
pub mod menu;
pub mod notify;
pub mod reservation;
pub mod store;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use cart::{CartModel, CartSnapshot, DEFAULT_STORAGE_KEY, LineItem, StorageEvent};
pub use checkout::CheckoutDispatcher;
pub use config::{CartConfig, ConfigError};
pub use error::{CartError, InvalidItem, StoreError};
pub use link::{DeepLink, LinkError, LinkOpener};
pub use menu::{Menu, MenuCard};
pub use notify::{CartRenderer, NotificationSink};
pub use reservation::{ReservationDispatcher, ReservationError, ReservationForm};
pub use store::PersistentStore;
