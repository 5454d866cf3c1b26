//! Subcommand implementations.

pub mod cart;
pub mod console;
pub mod menu;
pub mod reserve;
