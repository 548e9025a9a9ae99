//! Shopping cart state machine.
//!
//! A [`Cart`] is an ordered collection of entries, one per product id, in
//! first-added order. It is a pure data structure: the storefront stores it
//! in the session and mutates it through the operations here. Totals are
//! derived on demand and never cached.

use serde::{Deserialize, Serialize};

use crate::types::{Price, Product, ProductId};

/// A single cart line: a product snapshot plus its quantity.
///
/// Invariant: `quantity >= 1`. Entries that would reach quantity 0 are
/// removed from the cart instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartEntry {
    /// Snapshot of the product this entry was added from.
    pub product: Product,
    /// Number of units, always at least 1.
    pub quantity: u32,
}

impl CartEntry {
    /// Line total: price × quantity.
    #[must_use]
    pub fn line_price(&self) -> Price {
        self.product.price.times(self.quantity)
    }
}

/// The shopping cart: an ordered list with at most one entry per product id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// The cart entries, in first-added order.
    #[must_use]
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Whether the cart has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add one unit of a product.
    ///
    /// If the product is already in the cart its quantity is incremented by
    /// one; otherwise a new entry with quantity 1 is appended. Never errors:
    /// repeated adds accumulate quantity.
    pub fn add(&mut self, product: &Product) {
        match self.entry_mut(product.id) {
            Some(entry) => entry.quantity = entry.quantity.saturating_add(1),
            None => self.entries.push(CartEntry {
                product: product.clone(),
                quantity: 1,
            }),
        }
    }

    /// Set the quantity of an existing entry.
    ///
    /// A quantity of 0 removes the entry. Setting a quantity on a product
    /// that is not in the cart is a no-op: only existing entries can be
    /// resized. No upper bound is enforced.
    pub fn set_quantity(&mut self, id: ProductId, quantity: u32) {
        if quantity == 0 {
            self.remove(id);
            return;
        }
        if let Some(entry) = self.entry_mut(id) {
            entry.quantity = quantity;
        }
    }

    /// Remove the entry for a product, if present.
    pub fn remove(&mut self, id: ProductId) {
        self.entries.retain(|entry| entry.product.id != id);
    }

    /// Empty the cart. Checkout confirmation uses this.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Total number of units across all entries.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.entries
            .iter()
            .fold(0, |sum, entry| sum.saturating_add(entry.quantity))
    }

    /// Total price across all entries.
    #[must_use]
    pub fn total_price(&self) -> Price {
        self.entries
            .iter()
            .fold(Price::default(), |sum, entry| sum.plus(entry.line_price()))
    }

    fn entry_mut(&mut self, id: ProductId) -> Option<&mut CartEntry> {
        self.entries.iter_mut().find(|entry| entry.product.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    fn product(id: i32, price: i64, category: Category) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("product-{id}"),
            price: Price::from_rubles(price),
            category,
            image: format!("https://cdn.example.com/{id}.jpg"),
        }
    }

    fn sofa() -> Product {
        product(1, 89_900, Category::Sofas)
    }

    fn chair() -> Product {
        product(3, 12_900, Category::Chairs)
    }

    #[test]
    fn test_empty_cart() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_price(), Price::from_rubles(0));
    }

    #[test]
    fn test_add_accumulates_quantity() {
        let mut cart = Cart::new();
        for _ in 0..5 {
            cart.add(&sofa());
        }
        assert_eq!(cart.entries().len(), 1);
        assert_eq!(cart.entries()[0].quantity, 5);
    }

    #[test]
    fn test_add_preserves_first_added_order() {
        let mut cart = Cart::new();
        cart.add(&chair());
        cart.add(&sofa());
        cart.add(&chair());

        let ids: Vec<i32> = cart
            .entries()
            .iter()
            .map(|entry| entry.product.id.as_i32())
            .collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn test_totals_scenario() {
        // add id=1 (89900) twice, then id=3 (12900) once
        let mut cart = Cart::new();
        cart.add(&sofa());
        cart.add(&sofa());
        cart.add(&chair());

        assert_eq!(cart.entries().len(), 2);
        assert_eq!(cart.total_items(), 3);
        assert_eq!(cart.total_price(), Price::from_rubles(192_700));
    }

    #[test]
    fn test_set_quantity_zero_removes() {
        let mut cart = Cart::new();
        cart.add(&sofa());
        cart.set_quantity(ProductId::new(1), 0);

        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
    }

    #[test]
    fn test_set_quantity_replaces_without_touching_others() {
        let mut cart = Cart::new();
        cart.add(&sofa());
        cart.add(&chair());

        cart.set_quantity(ProductId::new(3), 7);

        assert_eq!(cart.entries()[0].quantity, 1);
        assert_eq!(cart.entries()[1].quantity, 7);
        assert_eq!(cart.total_items(), 8);
    }

    #[test]
    fn test_set_quantity_missing_entry_is_noop() {
        let mut cart = Cart::new();
        cart.add(&sofa());
        cart.set_quantity(ProductId::new(99), 4);

        assert_eq!(cart.entries().len(), 1);
        assert_eq!(cart.entries()[0].quantity, 1);
    }

    #[test]
    fn test_remove_missing_entry_is_noop() {
        let mut cart = Cart::new();
        cart.add(&chair());
        cart.remove(ProductId::new(99));
        assert_eq!(cart.entries().len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add(&sofa());
        cart.add(&chair());
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total_price(), Price::from_rubles(0));
    }

    #[test]
    fn test_line_price() {
        let mut cart = Cart::new();
        cart.add(&chair());
        cart.set_quantity(ProductId::new(3), 3);
        assert_eq!(cart.entries()[0].line_price(), Price::from_rubles(38_700));
    }

    #[test]
    fn test_session_serde_roundtrip() {
        // The storefront stores the cart in the session as JSON.
        let mut cart = Cart::new();
        cart.add(&sofa());
        cart.add(&chair());
        cart.set_quantity(ProductId::new(1), 2);

        let json = serde_json::to_string(&cart).expect("serialize");
        let back: Cart = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, cart);
        assert_eq!(back.total_price(), Price::from_rubles(192_700));
    }
}
