use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "storefront")]
#[command(about = "A terminal storefront: browse a product catalogue and fill a cart")]
pub struct CliConfig {
    /// Product-listing endpoint returning a JSON array of products.
    #[arg(long, default_value = "https://fakestoreapi.com/products")]
    pub api_endpoint: String,

    #[arg(long, default_value = "8")]
    pub page_size: usize,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn page_size(&self) -> usize {
        self.page_size
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_endpoint", &self.api_endpoint)?;
        validate_positive_number("page_size", self.page_size, 1)?;
        Ok(())
    }
}
