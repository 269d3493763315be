use crate::domain::model::{CartLine, Product, ProductId};

/// Ordered collection of cart lines, unique by product identifier.
///
/// Every operation is a total function: acting on an identifier that has no
/// line is a silent no-op. The store owns the decrement-to-zero policy, so a
/// line's quantity never reaches 0 while the line exists.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    lines: Vec<CartLine>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `product`. A first add creates the line with a
    /// name/price/image snapshot; later adds only bump the quantity.
    /// Returns the line's resulting quantity.
    pub fn add(&mut self, product: &Product) -> u32 {
        if let Some(line) = self.line_mut(product.id) {
            line.quantity += 1;
            return line.quantity;
        }

        self.lines.push(CartLine {
            id: product.id,
            name: product.title.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity: 1,
        });
        1
    }

    pub fn remove_item(&mut self, id: ProductId) {
        self.lines.retain(|line| line.id != id);
    }

    /// Set an existing line's quantity. A quantity of 0 removes the line.
    pub fn set_quantity(&mut self, id: ProductId, quantity: u32) {
        if quantity == 0 {
            self.remove_item(id);
            return;
        }
        if let Some(line) = self.line_mut(id) {
            line.quantity = quantity;
        }
    }

    pub fn increment(&mut self, id: ProductId) {
        if let Some(line) = self.line_mut(id) {
            line.quantity += 1;
        }
    }

    /// One unit less; a quantity-1 line is removed entirely.
    pub fn decrement(&mut self, id: ProductId) {
        let Some(line) = self.line_mut(id) else {
            return;
        };
        if line.quantity == 1 {
            self.remove_item(id);
        } else {
            line.quantity -= 1;
        }
    }

    pub fn line(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id == id)
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines (the cart badge), not the sum of quantities.
    pub fn total_items(&self) -> usize {
        self.lines.len()
    }

    pub fn total_price(&self) -> f64 {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    fn line_mut(&mut self, id: ProductId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.id == id)
    }
}
