use crate::domain::model::Product;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Fire-once source of the product catalogue.
#[async_trait]
pub trait ProductSource: Send + Sync {
    async fn fetch_products(&self) -> Result<Vec<Product>>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn page_size(&self) -> usize;
}
