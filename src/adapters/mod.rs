// Adapters layer: concrete bindings for external systems (http product listing).

pub mod http;

pub use http::HttpProductSource;
