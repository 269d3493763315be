use crate::domain::model::{Product, ProductId};
use std::collections::BTreeSet;

/// The fetched, read-only set of purchasable products. Populated once by the
/// initial load and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct Catalogue {
    products: Vec<Product>,
}

impl Catalogue {
    pub fn from_products(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Distinct categories present in the catalogue, sorted. Feeds the
    /// filter dialog's category choices.
    pub fn categories(&self) -> Vec<&str> {
        let set: BTreeSet<&str> = self.products.iter().map(|p| p.category.as_str()).collect();
        set.into_iter().collect()
    }
}
