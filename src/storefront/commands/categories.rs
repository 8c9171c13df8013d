use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::Catalog;

/// The navigation tree: categories with their subcategories.
pub async fn run<C: Catalog + ?Sized>(catalog: &C) -> Result<CmdResult> {
    let categories = catalog.categories().await?;
    Ok(CmdResult::default().with_categories(categories))
}
