pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod shell;
pub mod utils;
pub mod view;

pub use crate::adapters::http::HttpProductSource;
pub use crate::config::CliConfig;
pub use crate::core::cart::CartStore;
pub use crate::core::catalogue::Catalogue;
pub use crate::core::filter::{filter_products, CategoryFilter, FilterCriteria, PriceRange};
pub use crate::core::pager::PAGE_SIZE;
pub use crate::core::session::{BrowseSession, PageView};
pub use crate::domain::model::{CartLine, Product, ProductId, Rating};
pub use crate::domain::ports::{ConfigProvider, ProductSource};
pub use crate::utils::error::{Result, StoreError};
