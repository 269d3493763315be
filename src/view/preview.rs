use crate::domain::model::Product;
use crate::utils::error::Result;
use std::fmt::Write;

/// Per-product detail card (the preview dialog).
pub fn render(product: &Product) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "{}", product.title)?;
    writeln!(out, "Category: {}", product.category)?;
    writeln!(out, "Description: {}", product.description)?;
    writeln!(out, "Price: ${:.2}", product.price)?;
    writeln!(
        out,
        "Rating: {:.1}★ ({} ratings)",
        product.rating.rate, product.rating.count
    )?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{ProductId, Rating};

    #[test]
    fn test_detail_card_fields() {
        let product = Product {
            id: ProductId(1),
            title: "Fjallraven Backpack".to_string(),
            price: 109.95,
            description: "Fits 15 inch laptops".to_string(),
            category: "men's clothing".to_string(),
            image: String::new(),
            rating: Rating {
                rate: 3.9,
                count: 120,
            },
        };

        let out = render(&product).unwrap();
        assert!(out.contains("Fjallraven Backpack"));
        assert!(out.contains("Category: men's clothing"));
        assert!(out.contains("Price: $109.95"));
        assert!(out.contains("Rating: 3.9★ (120 ratings)"));
    }
}
