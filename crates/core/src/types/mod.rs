//! Core types for Tandoor.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod contact;
pub mod diet;
pub mod dish;
pub mod level;
pub mod price;

pub use contact::{Email, EmailError, PhoneNumber, PhoneNumberError};
pub use diet::{Diet, DietFilter};
pub use dish::{DishName, DishNameError};
pub use level::NotificationLevel;
pub use price::{CurrencyCode, Price};
