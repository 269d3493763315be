use crate::core::cart::CartStore;
use crate::utils::clock::DisplayClock;
use crate::utils::error::Result;
use std::fmt::Write;

/// Store banner: brand line, decorative clock, cart badge (line count).
pub fn render(clock: &DisplayClock, cart: &CartStore) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "==============  S T O R E F R O N T  ==============")?;
    writeln!(out, "{:^52}", clock.now_string())?;
    writeln!(out, "Cart: {} item(s)", cart.total_items())?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Product, ProductId, Rating};

    fn product(id: u64) -> Product {
        Product {
            id: ProductId(id),
            title: format!("Product {}", id),
            price: 10.0,
            description: String::new(),
            category: "electronics".to_string(),
            image: String::new(),
            rating: Rating {
                rate: 4.0,
                count: 1,
            },
        }
    }

    #[test]
    fn test_badge_counts_lines_not_quantities() {
        let mut cart = CartStore::new();
        let p = product(1);
        cart.add(&p);
        cart.add(&p);
        cart.add(&product(2));

        let out = render(&DisplayClock::new(), &cart).unwrap();
        assert!(out.contains("Cart: 2 item(s)"));
        assert!(out.contains("PKT"));
    }
}
