use crate::core::cart::CartStore;
use crate::utils::error::Result;
use crate::view::truncate;
use std::fmt::Write;

const NAME_WIDTH: usize = 32;

/// Cart listing: one row per line with unit price, quantity and subtotal,
/// followed by the computed total.
pub fn render(cart: &CartStore) -> Result<String> {
    let mut out = String::new();

    if cart.is_empty() {
        writeln!(
            out,
            "Your cart is empty. Try adding some items to the cart."
        )?;
        return Ok(out);
    }

    for line in cart.lines() {
        writeln!(
            out,
            "[{:>3}] {:<width$} ${:>8.2} x {:<3} = ${:>9.2}",
            line.id,
            truncate(&line.name, NAME_WIDTH),
            line.price,
            line.quantity,
            line.subtotal(),
            width = NAME_WIDTH,
        )?;
    }

    writeln!(out, "{:-<width$}", "", width = NAME_WIDTH + 34)?;
    writeln!(out, "Total: ${:.2}", cart.total_price())?;
    Ok(out)
}
