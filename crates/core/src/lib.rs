//! Tandoor Core - Shared domain types.
//!
//! This crate provides the types used across all Tandoor components:
//! - `cart` - Cart subsystem, checkout and reservation hand-off
//! - `cli` - Command-line host driving the cart against a file store
//!
//! # Architecture
//!
//! The core crate contains only types and validation - no I/O, no storage,
//! no logging. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for dish names, prices, contact details,
//!   notification levels and dietary tags

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
