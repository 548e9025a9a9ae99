//! Integer ruble price type.
//!
//! The catalog carries whole-ruble prices only (no kopecks), so `Price`
//! wraps an `i64` amount in rubles. Display formatting (`89 900 ₽`) lives
//! in the storefront's template filter layer, not here.

use serde::{Deserialize, Serialize};

/// A price in whole rubles.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Price(i64);

impl Price {
    /// Create a price from a whole-ruble amount.
    #[must_use]
    pub const fn from_rubles(rubles: i64) -> Self {
        Self(rubles)
    }

    /// Get the amount in rubles.
    #[must_use]
    pub const fn rubles(&self) -> i64 {
        self.0
    }

    /// Line total for this price at the given quantity.
    ///
    /// Saturates instead of overflowing; quantities are user-controlled
    /// and have no enforced upper bound.
    #[must_use]
    pub fn times(&self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(i64::from(quantity)))
    }

    /// Sum two prices, saturating on overflow.
    #[must_use]
    pub const fn plus(&self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Price {
    fn from(rubles: i64) -> Self {
        Self(rubles)
    }
}

impl From<Price> for i64 {
    fn from(price: Price) -> Self {
        price.0
    }
}
