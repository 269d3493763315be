use crate::core::cart::CartStore;
use crate::core::catalogue::Catalogue;
use crate::core::filter::{filter_products, CategoryFilter, FilterCriteria, PriceRange};
use crate::core::pager::{page_slice, total_pages};
use crate::domain::model::{Product, ProductId};
use crate::domain::ports::{ConfigProvider, ProductSource};
use crate::utils::error::Result;
use std::collections::BTreeSet;

/// One rendered window into the filtered catalogue.
#[derive(Debug)]
pub struct PageView<'a> {
    pub items: Vec<&'a Product>,
    pub page: usize,
    pub total_pages: usize,
    pub total_matches: usize,
}

/// Single-threaded owner of all mutable browsing state: catalogue, filter
/// criteria, current page, cart, and the fetch-error flag. Every user intent
/// is a synchronous method; mutations apply atomically between dispatches.
pub struct BrowseSession<C: ConfigProvider> {
    config: C,
    catalogue: Catalogue,
    fetch_error: Option<String>,
    criteria: FilterCriteria,
    page: usize,
    cart: CartStore,
}

impl<C: ConfigProvider> BrowseSession<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            catalogue: Catalogue::default(),
            fetch_error: None,
            criteria: FilterCriteria::default(),
            page: 1,
            cart: CartStore::new(),
        }
    }

    /// Fire-once catalogue fetch. On failure the error flag is recorded and
    /// the catalogue stays empty; there is no retry.
    pub async fn load(&mut self, source: &dyn ProductSource) -> Result<()> {
        match source.fetch_products().await {
            Ok(products) => {
                tracing::info!("Fetched {} products", products.len());
                self.catalogue = Catalogue::from_products(products);
                self.fetch_error = None;
                Ok(())
            }
            Err(e) => {
                tracing::error!("Catalogue fetch failed: {}", e);
                self.fetch_error = Some(format!("Network error: {}", e));
                Err(e)
            }
        }
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.criteria.search = query.into();
        self.page = 1;
    }

    /// Filter-dialog commit: category, price window [0, ceiling] and rating
    /// buckets change together, and the page resets to 1. The search text is
    /// left untouched.
    pub fn apply_filters(
        &mut self,
        category: CategoryFilter,
        price_ceiling: f64,
        ratings: BTreeSet<u8>,
    ) {
        tracing::debug!(
            "Applying filters: category={:?} ceiling={} ratings={:?}",
            category,
            price_ceiling,
            ratings
        );
        self.criteria.category = category;
        self.criteria.price = PriceRange::up_to(price_ceiling);
        self.criteria.ratings = ratings;
        self.page = 1;
    }

    pub fn clear_filters(&mut self) {
        let search = std::mem::take(&mut self.criteria.search);
        self.criteria = FilterCriteria {
            search,
            ..Default::default()
        };
        self.page = 1;
    }

    pub fn next_page(&mut self) {
        if self.fetch_error.is_some() {
            return;
        }
        if self.page < self.page_count() {
            self.page += 1;
        }
    }

    pub fn previous_page(&mut self) {
        if self.fetch_error.is_some() {
            return;
        }
        if self.page > 1 {
            self.page -= 1;
        }
    }

    /// Filter + page recomputation for rendering.
    pub fn visible_page(&self) -> PageView<'_> {
        let filtered = filter_products(self.catalogue.products(), &self.criteria);
        let page_size = self.config.page_size();
        let total_pages = total_pages(filtered.len(), page_size);
        let items = page_slice(&filtered, page_size, self.page).to_vec();
        PageView {
            items,
            page: self.page,
            total_pages,
            total_matches: filtered.len(),
        }
    }

    /// Add one unit of a catalogue product to the cart; unknown ids are
    /// ignored. Returns the line's resulting quantity.
    pub fn add_to_cart(&mut self, id: ProductId) -> Option<u32> {
        match self.catalogue.get(id) {
            Some(product) => Some(self.cart.add(product)),
            None => {
                tracing::debug!("add_to_cart: no product with id {}", id);
                None
            }
        }
    }

    pub fn remove_from_cart(&mut self, id: ProductId) {
        self.cart.remove_item(id);
    }

    pub fn increment_quantity(&mut self, id: ProductId) {
        self.cart.increment(id);
    }

    pub fn decrement_quantity(&mut self, id: ProductId) {
        self.cart.decrement(id);
    }

    pub fn set_quantity(&mut self, id: ProductId, quantity: u32) {
        self.cart.set_quantity(id, quantity);
    }

    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn current_page(&self) -> usize {
        self.page
    }

    pub fn fetch_error(&self) -> Option<&str> {
        self.fetch_error.as_deref()
    }

    fn page_count(&self) -> usize {
        let filtered = filter_products(self.catalogue.products(), &self.criteria);
        total_pages(filtered.len(), self.config.page_size())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Rating;
    use crate::utils::error::StoreError;
    use async_trait::async_trait;

    struct StaticSource {
        products: Vec<Product>,
    }

    #[async_trait]
    impl ProductSource for StaticSource {
        async fn fetch_products(&self) -> Result<Vec<Product>> {
            Ok(self.products.clone())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl ProductSource for FailingSource {
        async fn fetch_products(&self) -> Result<Vec<Product>> {
            Err(StoreError::HttpStatusError {
                status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            })
        }
    }

    struct TestConfig;

    impl ConfigProvider for TestConfig {
        fn api_endpoint(&self) -> &str {
            "http://unused.test"
        }

        fn page_size(&self) -> usize {
            8
        }
    }

    fn product(id: u64, category: &str, rate: f64) -> Product {
        Product {
            id: ProductId(id),
            title: format!("Product {}", id),
            price: 25.0,
            description: String::new(),
            category: category.to_string(),
            image: String::new(),
            rating: Rating { rate, count: 10 },
        }
    }

    async fn loaded_session(products: Vec<Product>) -> BrowseSession<TestConfig> {
        let mut session = BrowseSession::new(TestConfig);
        session
            .load(&StaticSource { products })
            .await
            .expect("static source cannot fail");
        session
    }

    #[tokio::test]
    async fn test_load_failure_sets_error_flag_and_blocks_paging() {
        let mut session = BrowseSession::new(TestConfig);
        let result = session.load(&FailingSource).await;

        assert!(result.is_err());
        assert!(session.fetch_error().unwrap().starts_with("Network error:"));
        assert!(session.catalogue().is_empty());

        session.next_page();
        assert_eq!(session.current_page(), 1);
    }

    #[tokio::test]
    async fn test_changing_criteria_resets_page() {
        let products: Vec<_> = (1..=20).map(|i| product(i, "electronics", 4.5)).collect();
        let mut session = loaded_session(products).await;

        session.next_page();
        assert_eq!(session.current_page(), 2);

        session.set_search("product");
        assert_eq!(session.current_page(), 1);

        session.next_page();
        session.apply_filters(CategoryFilter::All, 1000.0, BTreeSet::new());
        assert_eq!(session.current_page(), 1);
    }

    #[tokio::test]
    async fn test_navigation_clamps_at_both_ends() {
        let products: Vec<_> = (1..=10).map(|i| product(i, "electronics", 4.5)).collect();
        let mut session = loaded_session(products).await;

        session.previous_page();
        assert_eq!(session.current_page(), 1);

        session.next_page();
        session.next_page();
        session.next_page();
        assert_eq!(session.current_page(), 2);
    }

    #[tokio::test]
    async fn test_visible_page_windows_the_filtered_list() {
        let mut products: Vec<_> = (1..=12).map(|i| product(i, "electronics", 4.5)).collect();
        products.extend((13..=20).map(|i| product(i, "jewelery", 4.5)));
        let mut session = loaded_session(products).await;

        session.apply_filters(
            CategoryFilter::Only("electronics".to_string()),
            1000.0,
            BTreeSet::new(),
        );
        session.next_page();

        let view = session.visible_page();
        assert_eq!(view.total_matches, 12);
        assert_eq!(view.total_pages, 2);
        assert_eq!(view.page, 2);
        let ids: Vec<_> = view.items.iter().map(|p| p.id.0).collect();
        assert_eq!(ids, vec![9, 10, 11, 12]);
    }

    #[tokio::test]
    async fn test_add_to_cart_ignores_unknown_id() {
        let mut session = loaded_session(vec![product(1, "electronics", 4.5)]).await;

        assert_eq!(session.add_to_cart(ProductId(1)), Some(1));
        assert_eq!(session.add_to_cart(ProductId(1)), Some(2));
        assert_eq!(session.add_to_cart(ProductId(99)), None);
        assert_eq!(session.cart().total_items(), 1);
    }
}
