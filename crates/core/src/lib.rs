//! NORDIC Core - Shared types library.
//!
//! This crate provides common types used across all NORDIC components:
//! - `storefront` - Public-facing furniture shop
//! - `integration-tests` - End-to-end tests over the storefront router
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no HTTP,
//! no templating. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, categories, and products
//! - [`cart`] - The shopping cart state machine

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod types;

pub use cart::{Cart, CartEntry};
pub use types::*;
