//! Cart host configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `TANDOOR_STORE_DIR` - Directory of the file-backed store (default: .tandoor)
//! - `TANDOOR_CART_KEY` - Persistence key of the cart (default: `cart_items`)
//! - `TANDOOR_CURRENCY` - ISO currency code for messages (default: INR)
//! - `TANDOOR_MESSAGING_BASE_URL` - Messaging deep-link base (default: <https://wa.me/>)
//! - `TANDOOR_MESSAGING_DESTINATION` - Restaurant's chat number (default: 918866998866)

use std::path::PathBuf;

use tandoor_core::CurrencyCode;
use thiserror::Error;

use crate::cart::DEFAULT_STORAGE_KEY;
use crate::link::{DEFAULT_BASE_URL, DeepLink, LinkError};
use crate::store::FileStore;

const DEFAULT_STORE_DIR: &str = ".tandoor";
const DEFAULT_DESTINATION: &str = "918866998866";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Cart host configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartConfig {
    /// Directory the file store writes into
    pub store_dir: PathBuf,
    /// Fixed key the cart is persisted under
    pub storage_key: String,
    /// Currency used when formatting chat messages
    pub currency: CurrencyCode,
    /// Messaging deep-link settings
    pub messaging: MessagingConfig,
}

/// Messaging deep-link configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessagingConfig {
    pub base_url: String,
    pub destination: String,
    link: DeepLink,
}

impl CartConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unusable value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let env = Lookup(&lookup);

        let store_dir = PathBuf::from(env.or_default("TANDOOR_STORE_DIR", DEFAULT_STORE_DIR));
        let storage_key = env.or_default("TANDOOR_CART_KEY", DEFAULT_STORAGE_KEY);
        let currency = env
            .or_default("TANDOOR_CURRENCY", "INR")
            .parse::<CurrencyCode>()
            .map_err(|e| invalid("TANDOOR_CURRENCY", e))?;
        let messaging = MessagingConfig::from_lookup(&env)?;

        Ok(Self {
            store_dir,
            storage_key,
            currency,
            messaging,
        })
    }

    /// Open the file store this configuration points at.
    #[must_use]
    pub fn file_store(&self) -> FileStore {
        FileStore::new(self.store_dir.clone())
    }
}

impl MessagingConfig {
    fn from_lookup(env: &Lookup<'_>) -> Result<Self, ConfigError> {
        let base_url = env.or_default("TANDOOR_MESSAGING_BASE_URL", DEFAULT_BASE_URL);
        let destination = env.or_default("TANDOOR_MESSAGING_DESTINATION", DEFAULT_DESTINATION);
        let link = DeepLink::new(&base_url, &destination).map_err(|e| {
            let var = if matches!(e, LinkError::InvalidDestination(_)) {
                "TANDOOR_MESSAGING_DESTINATION"
            } else {
                "TANDOOR_MESSAGING_BASE_URL"
            };
            invalid(var, e)
        })?;

        Ok(Self {
            base_url,
            destination,
            link,
        })
    }

    /// The validated deep-link template.
    #[must_use]
    pub const fn deep_link(&self) -> &DeepLink {
        &self.link
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

struct Lookup<'a>(&'a dyn Fn(&str) -> Option<String>);

impl Lookup<'_> {
    /// Get a variable with a default value; blank values count as unset.
    fn or_default(&self, key: &str, default: &str) -> String {
        (self.0)(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| default.to_string())
    }
}

fn invalid(key: &str, reason: impl ToString) -> ConfigError {
    ConfigError::InvalidEnvVar(key.to_string(), reason.to_string())
}
