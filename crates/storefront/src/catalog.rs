//! The fixed product catalog.
//!
//! The catalog is hard-coded display data, defined once at process start and
//! never mutated. Filtering derives a visible subset from the selected
//! category, preserving catalog order.

use nordic_core::{Category, CategoryFilter, Price, Product, ProductId};

const CDN_BASE: &str = "https://cdn.poehali.dev/projects/46ddac88-416a-43b8-b383-42029bd0bb0e/files";

/// The fixed set of purchasable products.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// The NORDIC furniture catalog.
    #[must_use]
    pub fn nordic() -> Self {
        let entry = |id: i32, name: &str, price: i64, category: Category, image: &str| Product {
            id: ProductId::new(id),
            name: name.to_string(),
            price: Price::from_rubles(price),
            category,
            image: format!("{CDN_BASE}/{image}"),
        };

        Self {
            products: vec![
                entry(
                    1,
                    "Модульный диван Oslo",
                    89_900,
                    Category::Sofas,
                    "23cf28c8-395a-4b5c-9eae-70560212aa41.jpg",
                ),
                entry(
                    2,
                    "Обеденный стол Nord",
                    45_900,
                    Category::Tables,
                    "467dbe65-96d7-45d7-987a-cc6da19f5ad5.jpg",
                ),
                entry(
                    3,
                    "Стул Loft",
                    12_900,
                    Category::Chairs,
                    "ed64f49c-7544-4b14-b209-c4db9c224af0.jpg",
                ),
                entry(
                    4,
                    "Диван Copenhagen",
                    95_900,
                    Category::Sofas,
                    "23cf28c8-395a-4b5c-9eae-70560212aa41.jpg",
                ),
                entry(
                    5,
                    "Журнальный столик Minimal",
                    18_900,
                    Category::Tables,
                    "467dbe65-96d7-45d7-987a-cc6da19f5ad5.jpg",
                ),
                entry(
                    6,
                    "Кресло Relax",
                    34_900,
                    Category::Chairs,
                    "ed64f49c-7544-4b14-b209-c4db9c224af0.jpg",
                ),
            ],
        }
    }

    /// All products, in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Products passing the category filter, catalog order preserved.
    #[must_use]
    pub fn filter(&self, selection: CategoryFilter) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|product| selection.matches(product.category))
            .collect()
    }

    /// Look up a product by id.
    #[must_use]
    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// Filter selections for the category buttons, in display order.
    #[must_use]
    pub fn category_filters() -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(Category::ALL.into_iter().map(CategoryFilter::Only))
            .collect()
    }
}
