//! Product categories and the category filter.
//!
//! The storefront carries a closed set of furniture categories. Slugs are
//! stable lowercase identifiers used in URLs and form values; titles are the
//! Russian display names rendered on the filter buttons.

use serde::{Deserialize, Serialize};

/// A product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Sofas,
    Tables,
    Chairs,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Self; 3] = [Self::Sofas, Self::Tables, Self::Chairs];

    /// Stable slug used in URLs and form values.
    #[must_use]
    pub const fn slug(&self) -> &'static str {
        match self {
            Self::Sofas => "sofas",
            Self::Tables => "tables",
            Self::Chairs => "chairs",
        }
    }

    /// Russian display title.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Sofas => "Диваны",
            Self::Tables => "Столы",
            Self::Chairs => "Стулья",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

/// Error parsing a category slug.
#[derive(Debug, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct CategoryParseError(String);

impl std::str::FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sofas" => Ok(Self::Sofas),
            "tables" => Ok(Self::Tables),
            "chairs" => Ok(Self::Chairs),
            _ => Err(CategoryParseError(s.to_string())),
        }
    }
}

/// The category filter selection: everything, or a single category.
///
/// Defaults to [`CategoryFilter::All`]. Selection only ever comes from the
/// rendered category list, so parsing an unknown slug falls back to `All`
/// rather than erroring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Stable slug used in URLs and form values.
    #[must_use]
    pub const fn slug(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(category) => category.slug(),
        }
    }

    /// Russian display title.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::All => "Все",
            Self::Only(category) => category.title(),
        }
    }

    /// Parse a slug, falling back to `All` for anything unknown.
    #[must_use]
    pub fn from_slug(slug: &str) -> Self {
        slug.parse::<Category>().map_or(Self::All, Self::Only)
    }

    /// Whether a product of the given category passes this filter.
    #[must_use]
    pub fn matches(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => *selected == category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_slug_roundtrip() {
        for category in Category::ALL {
            assert_eq!(category.slug().parse::<Category>().ok(), Some(category));
        }
    }

    #[test]
    fn test_category_unknown_slug() {
        assert!("beds".parse::<Category>().is_err());
        assert!("".parse::<Category>().is_err());
        // Slugs are case-sensitive
        assert!("Sofas".parse::<Category>().is_err());
    }

    #[test]
    fn test_filter_from_slug() {
        assert_eq!(CategoryFilter::from_slug("all"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_slug("chairs"),
            CategoryFilter::Only(Category::Chairs)
        );
        // Unknown slugs fall back to All
        assert_eq!(CategoryFilter::from_slug("beds"), CategoryFilter::All);
    }

    #[test]
    fn test_filter_matches() {
        assert!(CategoryFilter::All.matches(Category::Sofas));
        assert!(CategoryFilter::Only(Category::Tables).matches(Category::Tables));
        assert!(!CategoryFilter::Only(Category::Tables).matches(Category::Chairs));
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Category::Sofas).expect("serialize");
        assert_eq!(json, "\"sofas\"");
        let back: Category = serde_json::from_str("\"chairs\"").expect("deserialize");
        assert_eq!(back, Category::Chairs);
    }
}
