use crate::domain::model::Product;
use std::collections::BTreeSet;

/// Category constraint: everything, or one exact category.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    fn accepts(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }
}

/// Inclusive price window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub fn up_to(max: f64) -> Self {
        Self { min: 0.0, max }
    }

    pub fn unbounded() -> Self {
        Self {
            min: 0.0,
            max: f64::INFINITY,
        }
    }

    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }
}

/// The conjunction of search/category/price/rating constraints currently
/// applied. The default accepts every product.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    pub search: String,
    pub category: CategoryFilter,
    pub price: PriceRange,
    /// Accepted floor(rating) buckets; empty set accepts all.
    pub ratings: BTreeSet<u8>,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: CategoryFilter::All,
            price: PriceRange::unbounded(),
            ratings: BTreeSet::new(),
        }
    }
}

impl FilterCriteria {
    pub fn matches(&self, product: &Product) -> bool {
        let matches_search = product
            .title
            .to_lowercase()
            .contains(&self.search.to_lowercase());
        let matches_category = self.category.accepts(&product.category);
        let matches_price = self.price.contains(product.price);
        let matches_rating =
            self.ratings.is_empty() || self.ratings.contains(&product.rating.bucket());

        matches_search && matches_category && matches_price && matches_rating
    }
}

/// Pure multi-criteria filter; output order preserves input order.
pub fn filter_products<'a>(products: &'a [Product], criteria: &FilterCriteria) -> Vec<&'a Product> {
    products.iter().filter(|p| criteria.matches(p)).collect()
}
