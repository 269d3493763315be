use crate::domain::model::Product;
use crate::domain::ports::ProductSource;
use crate::utils::error::{Result, StoreError};
use async_trait::async_trait;
use reqwest::Client;

/// Product listing fetched over HTTP. The endpoint is expected to return a
/// JSON array of product records.
pub struct HttpProductSource {
    client: Client,
    endpoint: String,
}

impl HttpProductSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl ProductSource for HttpProductSource {
    async fn fetch_products(&self) -> Result<Vec<Product>> {
        tracing::debug!("Making API request to: {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await?;

        tracing::debug!("API response status: {}", response.status());
        if !response.status().is_success() {
            return Err(StoreError::HttpStatusError {
                status: response.status(),
            });
        }

        let products: Vec<Product> = response.json().await?;
        Ok(products)
    }
}
