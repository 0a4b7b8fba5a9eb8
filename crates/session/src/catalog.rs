//! Read-only product and creator catalog.
//!
//! The catalog is loaded once (from a JSON fixture file or the built-in demo
//! set) and never mutated by the session layer; the session only queries it
//! by id or through [`ProductFilter`].

use std::collections::BTreeSet;
use std::path::Path;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use begeto_core::{CreatorId, Price, ProductId};

pub mod fixtures;

/// A product listed on the marketplace.
///
/// Immutable once loaded; cart lines hold their own snapshot copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Display name of the maker.
    pub maker: String,
    pub maker_id: CreatorId,
    pub country: String,
    pub price: Price,
    pub image: String,
    pub description: String,
    pub category: Category,
    pub cultural_context: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub trending: bool,
    #[serde(default)]
    pub custom_made: bool,
}

/// A creator (maker) profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creator {
    pub id: CreatorId,
    pub name: String,
    pub country: String,
    pub region: String,
    pub bio: String,
    pub avatar: String,
    pub cover_image: String,
    pub specialties: Vec<String>,
    pub products_count: u32,
    pub rating: f32,
    pub joined_date: NaiveDate,
}

/// Product categories offered on the marketplace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Dresses,
    Headwear,
    Jewelry,
    Tops,
    Outerwear,
    Accessories,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Self; 6] = [
        Self::Dresses,
        Self::Headwear,
        Self::Jewelry,
        Self::Tops,
        Self::Outerwear,
        Self::Accessories,
    ];
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Dresses => "Dresses",
            Self::Headwear => "Headwear",
            Self::Jewelry => "Jewelry",
            Self::Tops => "Tops",
            Self::Outerwear => "Outerwear",
            Self::Accessories => "Accessories",
        };
        write!(f, "{name}")
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dresses" => Ok(Self::Dresses),
            "headwear" => Ok(Self::Headwear),
            "jewelry" => Ok(Self::Jewelry),
            "tops" => Ok(Self::Tops),
            "outerwear" => Ok(Self::Outerwear),
            "accessories" => Ok(Self::Accessories),
            _ => Err(format!("invalid category: {s}")),
        }
    }
}

/// Sort order for filtered product listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductSort {
    /// Featured products first (listing order otherwise preserved).
    #[default]
    Featured,
    PriceLowToHigh,
    PriceHighToLow,
    /// Reverse id order, the marketplace's stand-in for recency.
    Newest,
}

/// Filter and sort criteria for product listings.
///
/// An empty filter matches every product.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    /// Case-insensitive match against product name, maker, or country.
    pub query: Option<String>,
    /// Categories to include; empty means all.
    pub categories: Vec<Category>,
    /// Countries to include; empty means all.
    pub countries: Vec<String>,
    /// Inclusive price bounds.
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub sort: ProductSort,
}

impl ProductFilter {
    fn matches(&self, product: &Product) -> bool {
        let matches_query = self.query.as_deref().is_none_or(|q| {
            let q = q.to_lowercase();
            product.name.to_lowercase().contains(&q)
                || product.maker.to_lowercase().contains(&q)
                || product.country.to_lowercase().contains(&q)
        });
        let matches_category =
            self.categories.is_empty() || self.categories.contains(&product.category);
        let matches_country =
            self.countries.is_empty() || self.countries.contains(&product.country);
        let matches_min = self.min_price.is_none_or(|min| product.price.amount >= min);
        let matches_max = self.max_price.is_none_or(|max| product.price.amount <= max);

        matches_query && matches_category && matches_country && matches_min && matches_max
    }
}

/// Errors that can occur while loading a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
}

/// On-disk catalog layout: one JSON object holding both collections.
#[derive(Debug, Serialize, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    products: Vec<Product>,
    #[serde(default)]
    creators: Vec<Creator>,
}

/// Catalog store holding all products and creators in memory.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    products: Vec<Product>,
    creators: Vec<Creator>,
}

impl CatalogStore {
    /// Build a catalog from already-loaded records.
    #[must_use]
    pub const fn new(products: Vec<Product>, creators: Vec<Creator>) -> Self {
        Self { products, creators }
    }

    /// Load a catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|e| CatalogError::Io(e.to_string()))?;
        let store = Self::from_json(&content)?;
        tracing::info!(
            path = %path.display(),
            products = store.products.len(),
            creators = store.creators.len(),
            "Loaded catalog"
        );
        Ok(store)
    }

    /// Parse a catalog from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not match the catalog layout.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile =
            serde_json::from_str(json).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Ok(Self::new(file.products, file.creators))
    }

    /// Get a product by id.
    #[must_use]
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Get a creator by id.
    #[must_use]
    pub fn creator(&self, id: &CreatorId) -> Option<&Creator> {
        self.creators.iter().find(|c| &c.id == id)
    }

    /// All products, unfiltered, in listing order.
    #[must_use]
    pub fn all_products(&self) -> &[Product] {
        &self.products
    }

    /// All creators, in listing order.
    #[must_use]
    pub fn creators(&self) -> &[Creator] {
        &self.creators
    }

    /// Products matching the filter, in the filter's sort order.
    #[must_use]
    pub fn products(&self, filter: &ProductFilter) -> Vec<&Product> {
        let mut matched: Vec<&Product> =
            self.products.iter().filter(|p| filter.matches(p)).collect();

        match filter.sort {
            ProductSort::Featured => matched.sort_by_key(|p| !p.featured),
            ProductSort::PriceLowToHigh => {
                matched.sort_by(|a, b| a.price.amount.cmp(&b.price.amount));
            }
            ProductSort::PriceHighToLow => {
                matched.sort_by(|a, b| b.price.amount.cmp(&a.price.amount));
            }
            ProductSort::Newest => matched.sort_by(|a, b| b.id.cmp(&a.id)),
        }

        matched
    }

    /// Distinct product countries, sorted, for building country filters.
    #[must_use]
    pub fn countries(&self) -> Vec<&str> {
        self.products
            .iter()
            .map(|p| p.country.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn store() -> CatalogStore {
        fixtures::demo_catalog()
    }

    #[test]
    fn test_product_lookup() {
        let store = store();
        let known = store.all_products().first().unwrap().id.clone();
        assert!(store.product(&known).is_some());
        assert!(store.product(&ProductId::new("no-such-product")).is_none());
    }

    #[test]
    fn test_creator_lookup() {
        let store = store();
        let known = store.creators().first().unwrap().id.clone();
        assert!(store.creator(&known).is_some());
        assert!(store.creator(&CreatorId::new("no-such-creator")).is_none());
    }

    #[test]
    fn test_empty_filter_matches_all() {
        let store = store();
        let listed = store.products(&ProductFilter::default());
        assert_eq!(listed.len(), store.all_products().len());
    }

    #[test]
    fn test_query_matches_name_maker_and_country() {
        let store = store();
        let by_country = ProductFilter {
            query: Some("ghana".to_owned()),
            ..ProductFilter::default()
        };
        let matched = store.products(&by_country);
        assert!(!matched.is_empty());
        assert!(matched.iter().all(|p| p.country == "Ghana"));
    }

    #[test]
    fn test_category_filter() {
        let store = store();
        let filter = ProductFilter {
            categories: vec![Category::Dresses],
            ..ProductFilter::default()
        };
        let matched = store.products(&filter);
        assert!(!matched.is_empty());
        assert!(matched.iter().all(|p| p.category == Category::Dresses));
    }

    #[test]
    fn test_price_range_filter() {
        let store = store();
        let filter = ProductFilter {
            min_price: Some(Decimal::from(40)),
            max_price: Some(Decimal::from(60)),
            ..ProductFilter::default()
        };
        for product in store.products(&filter) {
            assert!(product.price.amount >= Decimal::from(40));
            assert!(product.price.amount <= Decimal::from(60));
        }
    }

    #[test]
    fn test_sort_price_low_to_high() {
        let store = store();
        let filter = ProductFilter {
            sort: ProductSort::PriceLowToHigh,
            ..ProductFilter::default()
        };
        let listed = store.products(&filter);
        for pair in listed.windows(2) {
            assert!(pair[0].price.amount <= pair[1].price.amount);
        }
    }

    #[test]
    fn test_sort_featured_first() {
        let store = store();
        let listed = store.products(&ProductFilter::default());
        let first_plain = listed.iter().position(|p| !p.featured);
        let last_featured = listed.iter().rposition(|p| p.featured);
        if let (Some(plain), Some(featured)) = (first_plain, last_featured) {
            assert!(featured < plain);
        }
    }

    #[test]
    fn test_countries_are_distinct_and_sorted() {
        let store = store();
        let countries = store.countries();
        for pair in countries.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            CatalogStore::from_json("not json"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_category_display_roundtrip() {
        for category in Category::ALL {
            let parsed: Category = category.to_string().parse().unwrap();
            assert_eq!(parsed, category);
        }
    }
}
