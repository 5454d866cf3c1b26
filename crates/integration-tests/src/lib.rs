//! Integration tests for the Tandoor cart.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p tandoor-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_scenarios` - Cart behaviour against a real file store
//! - `cross_tab` - Two carts sharing one store directory
//! - `hand_off` - Checkout and reservation deep-links
//!
//! Every test gets its own temporary store directory through [`Tab`].

use std::path::Path;

use tandoor_cart::store::FileStore;
use tandoor_cart::testing::{RecordingNotifier, RecordingRenderer};
use tandoor_cart::{CartModel, DEFAULT_STORAGE_KEY, PersistentStore, StorageEvent};
use tempfile::TempDir;

/// A temporary store directory shared by any number of tabs.
#[derive(Debug)]
pub struct Site {
    dir: TempDir,
}

impl Site {
    /// # Panics
    ///
    /// Panics if no temporary directory can be created.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temporary store directory"),
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    #[must_use]
    pub fn store(&self) -> FileStore {
        FileStore::new(self.root())
    }

    /// Open a new tab: a cart loaded from this site's store.
    #[must_use]
    pub fn open_tab(&self) -> Tab {
        let notifier = RecordingNotifier::new();
        let renderer = RecordingRenderer::new();
        let cart = CartModel::open(
            self.store(),
            DEFAULT_STORAGE_KEY,
            renderer.clone(),
            notifier.clone(),
        );
        Tab {
            cart,
            notifier,
            renderer,
        }
    }
}

impl Default for Site {
    fn default() -> Self {
        Self::new()
    }
}

/// One browser tab's view of the cart, with its recorded UI output.
pub struct Tab {
    pub cart: CartModel<FileStore>,
    pub notifier: RecordingNotifier,
    pub renderer: RecordingRenderer,
}

impl Tab {
    /// Deliver the storage event another tab's write would raise.
    ///
    /// # Panics
    ///
    /// Panics if the store cannot be read.
    #[allow(clippy::expect_used)]
    pub fn observe_write(&mut self, site: &Site) -> bool {
        let new_value = site
            .store()
            .get(DEFAULT_STORAGE_KEY)
            .expect("read shared store");
        self.cart.handle_storage_event(&StorageEvent {
            key: DEFAULT_STORAGE_KEY.to_string(),
            new_value,
        })
    }
}
