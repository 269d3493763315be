pub mod cart;
pub mod catalogue;
pub mod filter;
pub mod pager;
pub mod session;

pub use crate::domain::model::{CartLine, Product, ProductId, Rating};
pub use crate::domain::ports::{ConfigProvider, ProductSource};
pub use crate::utils::error::Result;
