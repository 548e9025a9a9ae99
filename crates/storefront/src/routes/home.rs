//! Home page route handlers.
//!
//! The home page is the single storefront surface: hero heading, category
//! filter buttons, and the product grid. Category switching swaps the grid
//! fragment via HTMX without a full page reload.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::instrument;

use nordic_core::{CategoryFilter, Product};

use crate::filters;
use crate::state::AppState;

/// Product display data for templates.
#[derive(Clone)]
pub struct ProductView {
    pub id: i32,
    pub name: String,
    pub price: String,
    pub image: String,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.as_i32(),
            name: product.name.clone(),
            price: filters::format_rubles(product.price),
            image: product.image.clone(),
        }
    }
}

/// Category filter button display data for templates.
#[derive(Clone)]
pub struct CategoryButtonView {
    pub slug: &'static str,
    pub title: &'static str,
    pub selected: bool,
}

/// Category selection query parameters.
#[derive(Debug, Deserialize)]
pub struct CategoryQuery {
    pub category: Option<String>,
}

impl CategoryQuery {
    /// Resolve the selection, defaulting to `All` for absent or unknown slugs.
    fn selection(&self) -> CategoryFilter {
        self.category
            .as_deref()
            .map_or(CategoryFilter::All, CategoryFilter::from_slug)
    }
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub categories: Vec<CategoryButtonView>,
    pub products: Vec<ProductView>,
}

/// Product grid fragment template (for HTMX category switching).
#[derive(Template, WebTemplate)]
#[template(path = "partials/product_grid.html")]
pub struct ProductGridTemplate {
    pub categories: Vec<CategoryButtonView>,
    pub products: Vec<ProductView>,
}

fn category_buttons(selection: CategoryFilter) -> Vec<CategoryButtonView> {
    crate::catalog::Catalog::category_filters()
        .into_iter()
        .map(|filter| CategoryButtonView {
            slug: filter.slug(),
            title: filter.title(),
            selected: filter == selection,
        })
        .collect()
}

fn visible_products(state: &AppState, selection: CategoryFilter) -> Vec<ProductView> {
    state
        .catalog()
        .filter(selection)
        .into_iter()
        .map(ProductView::from)
        .collect()
}

/// Display the home page.
#[allow(clippy::unused_async)]
#[instrument(skip(state))]
pub async fn home(
    State(state): State<AppState>,
    Query(query): Query<CategoryQuery>,
) -> impl IntoResponse {
    let selection = query.selection();

    HomeTemplate {
        categories: category_buttons(selection),
        products: visible_products(&state, selection),
    }
}

/// Product grid fragment for a category selection (HTMX).
#[allow(clippy::unused_async)]
#[instrument(skip(state))]
pub async fn grid(
    State(state): State<AppState>,
    Query(query): Query<CategoryQuery>,
) -> impl IntoResponse {
    let selection = query.selection();

    ProductGridTemplate {
        categories: category_buttons(selection),
        products: visible_products(&state, selection),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nordic_core::Category;

    #[test]
    fn test_selection_defaults_to_all() {
        let query = CategoryQuery { category: None };
        assert_eq!(query.selection(), CategoryFilter::All);

        let query = CategoryQuery {
            category: Some("unknown".to_string()),
        };
        assert_eq!(query.selection(), CategoryFilter::All);
    }

    #[test]
    fn test_selection_parses_slug() {
        let query = CategoryQuery {
            category: Some("sofas".to_string()),
        };
        assert_eq!(query.selection(), CategoryFilter::Only(Category::Sofas));
    }

    #[test]
    fn test_category_buttons_mark_selection() {
        let buttons = category_buttons(CategoryFilter::Only(Category::Tables));
        let selected: Vec<&str> = buttons
            .iter()
            .filter(|b| b.selected)
            .map(|b| b.slug)
            .collect();
        assert_eq!(selected, vec!["tables"]);
    }
}
