use httpmock::prelude::*;
use storefront::{BrowseSession, CliConfig, HttpProductSource, ProductId};

fn catalogue_json() -> serde_json::Value {
    serde_json::json!([
        {
            "id": 1,
            "title": "Fjallraven Backpack",
            "price": 109.95,
            "description": "Fits 15 inch laptops",
            "category": "men's clothing",
            "image": "https://example.com/1.jpg",
            "rating": {"rate": 3.9, "count": 120}
        },
        {
            "id": 2,
            "title": "SanDisk SSD 1TB",
            "price": 109.0,
            "description": "Easy upgrade for faster boot-up",
            "category": "electronics",
            "image": "https://example.com/2.jpg",
            "rating": {"rate": 2.9, "count": 470}
        },
        {
            "id": 3,
            "title": "Gold Chain Bracelet",
            "price": 695.0,
            "description": "From our Legends Collection",
            "category": "jewelery",
            "image": "https://example.com/3.jpg",
            "rating": {"rate": 4.6, "count": 400}
        }
    ])
}

async fn loaded_session() -> BrowseSession<CliConfig> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/products");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(catalogue_json());
    });

    let endpoint = server.url("/products");
    let source = HttpProductSource::new(endpoint.clone());
    let mut session = BrowseSession::new(CliConfig {
        api_endpoint: endpoint,
        page_size: 8,
        verbose: false,
    });
    session.load(&source).await.unwrap();
    session
}

#[tokio::test]
async fn test_add_merges_lines_and_snapshots_fields() {
    let mut session = loaded_session().await;

    assert_eq!(session.add_to_cart(ProductId(1)), Some(1));
    assert_eq!(session.add_to_cart(ProductId(1)), Some(2));
    assert_eq!(session.add_to_cart(ProductId(3)), Some(1));

    let cart = session.cart();
    assert_eq!(cart.total_items(), 2);

    let line = cart.line(ProductId(1)).unwrap();
    assert_eq!(line.name, "Fjallraven Backpack");
    assert_eq!(line.price, 109.95);
    assert_eq!(line.image, "https://example.com/1.jpg");
    assert_eq!(line.quantity, 2);
}

#[tokio::test]
async fn test_decrement_to_zero_removes_the_line() {
    let mut session = loaded_session().await;
    session.add_to_cart(ProductId(2));
    session.add_to_cart(ProductId(2));

    session.decrement_quantity(ProductId(2));
    assert_eq!(session.cart().line(ProductId(2)).unwrap().quantity, 1);

    session.decrement_quantity(ProductId(2));
    assert!(session.cart().line(ProductId(2)).is_none());
    assert!(session.cart().is_empty());
}

#[tokio::test]
async fn test_set_quantity_zero_is_store_enforced_removal() {
    let mut session = loaded_session().await;
    session.add_to_cart(ProductId(1));
    session.set_quantity(ProductId(1), 4);
    assert_eq!(session.cart().line(ProductId(1)).unwrap().quantity, 4);

    session.set_quantity(ProductId(1), 0);
    assert!(session.cart().is_empty());
}

#[tokio::test]
async fn test_cart_total_and_rendered_views() {
    let mut session = loaded_session().await;
    session.add_to_cart(ProductId(2));
    session.add_to_cart(ProductId(2));
    session.add_to_cart(ProductId(3));

    // 2 x 109.00 + 1 x 695.00
    let total = session.cart().total_price();
    assert!((total - 913.0).abs() < 1e-9);

    let cart_text = storefront::view::cart::render(session.cart()).unwrap();
    assert!(cart_text.contains("SanDisk SSD 1TB"));
    assert!(cart_text.contains("x 2"));
    assert!(cart_text.contains("Total: $913.00"));

    session.remove_from_cart(ProductId(2));
    session.remove_from_cart(ProductId(99)); // silent no-op
    let cart_text = storefront::view::cart::render(session.cart()).unwrap();
    assert!(cart_text.contains("Total: $695.00"));
}
