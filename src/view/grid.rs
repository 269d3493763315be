use crate::core::session::PageView;
use crate::utils::error::Result;
use crate::view::truncate;
use std::fmt::Write;

const TITLE_WIDTH: usize = 40;

/// Product grid for the current page, with pagination status. Pagination is
/// hidden while the fetch-error flag is set, mirroring the original UI.
pub fn render(view: &PageView<'_>, fetch_error: Option<&str>) -> Result<String> {
    let mut out = String::new();

    if let Some(error) = fetch_error {
        writeln!(out, "Could not load the catalogue: {}", error)?;
        writeln!(out, "Restart the storefront to try again.")?;
        return Ok(out);
    }

    if view.items.is_empty() {
        writeln!(out, "No products match the current filters.")?;
    }

    for product in &view.items {
        writeln!(
            out,
            "[{:>3}] {:<width$} ${:>8.2}  {:.1}★ ({})  {}",
            product.id,
            truncate(&product.title, TITLE_WIDTH),
            product.price,
            product.rating.rate,
            product.rating.count,
            product.category,
            width = TITLE_WIDTH,
        )?;
    }

    if view.total_pages > 0 {
        writeln!(
            out,
            "Page {}/{} · {} matching product(s)",
            view.page, view.total_pages, view.total_matches
        )?;
    }

    Ok(out)
}
