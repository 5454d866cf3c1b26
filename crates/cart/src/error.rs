//! Error types for the cart subsystem.
//!
//! None of these cross the [`CartModel`](crate::CartModel) boundary as a
//! returned error: the model converts them into notifications where they are
//! detected. They exist so that the conversion is a single, typed mapping
//! instead of ad hoc strings at every call site.

use tandoor_core::{DishNameError, NotificationLevel};
use thiserror::Error;

/// Persistent store failures.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("storage I/O error for key {key}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// The write would exceed the store's byte quota.
    #[error("storage quota exceeded: {requested} bytes requested, {available} available")]
    QuotaExceeded { requested: usize, available: usize },

    /// The value could not be encoded for writing.
    #[error("could not encode value for key {key}: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// The key cannot be mapped onto the store.
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),
}

/// Why an add-item request was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidItem {
    #[error("invalid dish name: {0}")]
    Name(#[from] DishNameError),

    /// NaN, infinite, or outside the range a `Decimal` can hold.
    #[error("price is not representable as a decimal amount")]
    Unrepresentable,

    #[error("price cannot be negative")]
    Negative,
}

/// Cart subsystem errors.
#[derive(Debug, Error)]
pub enum CartError {
    /// Bad add-item input.
    #[error("invalid item: {0}")]
    InvalidItem(#[from] InvalidItem),

    /// Persistence read or write failed.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(#[from] StoreError),

    /// Checkout attempted with no items.
    #[error("checkout attempted with an empty cart")]
    EmptyCartCheckout,
}

impl CartError {
    /// Level at which this error is surfaced to the visitor.
    #[must_use]
    pub const fn level(&self) -> NotificationLevel {
        match self {
            Self::InvalidItem(_) => NotificationLevel::Error,
            Self::StorageUnavailable(_) | Self::EmptyCartCheckout => NotificationLevel::Warning,
        }
    }

    /// Message shown to the visitor.
    ///
    /// Internal details (file paths, quota numbers) stay in the logs.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidItem(_) => "Error adding item to cart",
            Self::StorageUnavailable(_) => {
                "Your cart could not be saved on this device; it is kept for this session"
            }
            Self::EmptyCartCheckout => "Your cart is empty!",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels() {
        assert_eq!(
            CartError::from(InvalidItem::Negative).level(),
            NotificationLevel::Error
        );
        assert_eq!(
            CartError::EmptyCartCheckout.level(),
            NotificationLevel::Warning
        );
        let quota = StoreError::QuotaExceeded {
            requested: 10,
            available: 0,
        };
        assert_eq!(CartError::from(quota).level(), NotificationLevel::Warning);
    }

    #[test]
    fn test_user_message_hides_details() {
        let err = CartError::from(StoreError::InvalidKey("../etc".to_string()));
        assert!(!err.user_message().contains("etc"));
        assert!(err.to_string().contains("../etc"));
    }
}
