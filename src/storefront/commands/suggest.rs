use crate::commands::CmdResult;
use crate::error::Result;
use crate::pipeline::filter::matches_text;
use crate::store::Catalog;

/// Type-ahead suggestions: the first `limit` products whose title,
/// category or subcategory contains the text. Text shorter than
/// `min_chars` (after trimming) yields nothing.
pub async fn run<C: Catalog + ?Sized>(
    catalog: &C,
    text: &str,
    min_chars: usize,
    limit: usize,
) -> Result<CmdResult> {
    let text = text.trim();
    if text.chars().count() < min_chars {
        return Ok(CmdResult::default());
    }

    let needle = text.to_lowercase();
    let suggestions = catalog
        .list_all()
        .await?
        .into_iter()
        .filter(|p| matches_text(p, &needle))
        .take(limit)
        .collect();

    Ok(CmdResult::default().with_products(suggestions))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryCatalog;

    #[tokio::test]
    async fn short_text_gives_nothing() {
        let catalog = InMemoryCatalog::bundled();
        let res = run(&catalog, " á ", 2, 5).await.unwrap();
        assert!(res.products.is_empty());
    }

    #[tokio::test]
    async fn caps_at_limit_in_catalog_order() {
        let catalog = InMemoryCatalog::bundled();
        let res = run(&catalog, "áo", 2, 5).await.unwrap();
        let ids: Vec<u32> = res.products.iter().map(|p| p.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[tokio::test]
    async fn matches_subcategory_slugs() {
        let catalog = InMemoryCatalog::bundled();
        let res = run(&catalog, "quan-short", 2, 5).await.unwrap();
        let ids: Vec<u32> = res.products.iter().map(|p| p.id.0).collect();
        assert_eq!(ids, vec![20, 21, 25]);
    }
}
