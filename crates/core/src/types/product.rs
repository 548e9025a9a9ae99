//! Catalog product type.

use serde::{Deserialize, Serialize};

use super::{Category, Price, ProductId};

/// A purchasable product.
///
/// Products are immutable: the catalog is fixed at process start and entries
/// are never created or destroyed at runtime. Cart entries hold a snapshot of
/// the product they were added from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique, stable product ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Price in whole rubles.
    pub price: Price,
    /// Category the product belongs to.
    pub category: Category,
    /// Product image URL.
    pub image: String,
}
