//! Session-related types.
//!
//! The cart lives entirely in the session: there is no database, and cart
//! state is intentionally lost when the session expires or the process
//! restarts.

/// Session keys for storefront data.
pub mod keys {
    /// Key for storing the shopping cart.
    pub const CART: &str = "cart";
}
