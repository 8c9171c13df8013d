use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::pipeline::paginate::{PageWindow, MAX_VISIBLE_PAGES};
use crate::pipeline;
use crate::query::ListingQuery;
use crate::store::Catalog;

use super::helpers::facets;

/// Catalog-wide search with numbered pages: each page replaces the last.
pub async fn run<C: Catalog + ?Sized>(
    catalog: &C,
    query: &ListingQuery,
    page_size: usize,
) -> Result<CmdResult> {
    let products = catalog.list_all().await?;
    let available = facets(&products);

    let page = pipeline::run(
        products,
        &query.filter(),
        query.sort,
        query.page,
        page_size,
    );
    let window = PageWindow::new(page.page, page.total_pages(), MAX_VISIBLE_PAGES);

    let mut result = CmdResult::default();
    match query.q.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
        Some(q) if page.total_count == 0 => {
            result.add_message(CmdMessage::info(format!("No products found for \"{}\".", q)))
        }
        Some(q) => result.add_message(CmdMessage::info(format!(
            "{} products found for \"{}\".",
            page.total_count, q
        ))),
        None if page.total_count == 0 => {
            result.add_message(CmdMessage::info("No products match these filters."))
        }
        None => {}
    }
    if page.items.is_empty() && page.total_count > 0 {
        result.add_message(CmdMessage::warning(format!(
            "Page {} is past the last page ({}).",
            page.page,
            page.total_pages()
        )));
    }

    Ok(result
        .with_listing(page)
        .with_page_window(window)
        .with_facets(available))
}
