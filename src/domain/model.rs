use serde::{Deserialize, Serialize};

/// Catalogue-wide product identifier, as assigned by the listing API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub rate: f64,
    pub count: u64,
}

impl Rating {
    /// Rounded-down star bucket (0-5) used by the rating filter.
    pub fn bucket(&self) -> u8 {
        self.rate.floor().clamp(0.0, 5.0) as u8
    }
}

/// One purchasable record as returned by the product-listing endpoint.
/// Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    pub image: String,
    pub rating: Rating,
}

/// One distinct product's entry in the cart. Name, price and image are
/// snapshotted at add time; quantity stays >= 1 for as long as the line exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub image: String,
    pub quantity: u32,
}

impl CartLine {
    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}
