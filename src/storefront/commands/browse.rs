use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, StoreError};
use crate::model::Product;
use crate::pipeline;
use crate::pipeline::paginate::paginate;
use crate::query::ListingQuery;
use crate::store::Catalog;

use super::helpers::{facets, resolve_category};

/// Category listing with "load more" paging. The listing is the window for
/// page N; `shown` holds pages 1 through N as the shopper sees them.
pub async fn run<C: Catalog + ?Sized>(
    catalog: &C,
    slug: &str,
    sub_slug: Option<&str>,
    query: &ListingQuery,
    page_size: usize,
) -> Result<CmdResult> {
    let category = resolve_category(catalog, slug).await?;

    let products = match sub_slug {
        Some(sub) => {
            if category.sub_category(sub).is_none() {
                return Err(StoreError::InvalidCategory(format!("{}/{}", slug, sub)));
            }
            let mut products = catalog.list_by_sub_category(sub).await?;
            products.retain(|p| p.category.as_deref() == Some(category.name.as_str()));
            products
        }
        None => catalog.list_by_category(&category.name).await?,
    };

    let available = facets(&products);
    let refined = pipeline::refine(products, &query.filter(), query.sort);
    let page = paginate(refined.clone(), query.page, page_size);
    let shown = load_more(refined, page.page, page_size);
    tracing::debug!(
        category = %category.name,
        matched = page.total_count,
        page = page.page,
        shown = shown.len(),
        "browse"
    );

    let mut result = CmdResult::default();
    if page.total_count == 0 {
        result.add_message(CmdMessage::info("No products match these filters."));
    } else if page.has_more {
        result.add_message(CmdMessage::info(format!(
            "Showing {} of {} products.",
            shown.len(),
            page.total_count
        )));
    }

    Ok(result
        .with_listing(page)
        .with_shown(shown)
        .with_facets(available)
        .with_categories(vec![category]))
}

/// Pages 1 through `through`, one after another. Stops at the first empty
/// window.
fn load_more(refined: Vec<Product>, through: usize, page_size: usize) -> Vec<Product> {
    let mut shown = Vec::new();
    for n in 1..=through {
        let window = paginate(refined.clone(), n, page_size);
        if window.items.is_empty() {
            break;
        }
        shown.extend(window.items);
    }
    shown
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::sort::SortKey;
    use crate::store::memory::fixtures::CatalogFixture;
    use crate::store::memory::InMemoryCatalog;
    use crate::store::seed;

    #[tokio::test]
    async fn lists_a_whole_category() {
        let catalog = InMemoryCatalog::bundled();
        let res = run(&catalog, "nam", None, &ListingQuery::default(), 12)
            .await
            .unwrap();
        let page = res.listing.unwrap();
        assert_eq!(page.total_count, 7);
        assert!(!page.has_more);
        assert!(page
            .items
            .iter()
            .all(|p| p.category.as_deref() == Some(seed::MEN)));
        assert_eq!(res.categories[0].slug, "nam");
    }

    #[tokio::test]
    async fn sub_category_stays_inside_its_parent() {
        let catalog = InMemoryCatalog::bundled();
        let res = run(&catalog, "be-trai", Some("ao-thun"), &ListingQuery::default(), 12)
            .await
            .unwrap();
        let ids: Vec<u32> = res.listing.unwrap().items.iter().map(|p| p.id.0).collect();
        assert_eq!(ids, vec![18, 19]);
    }

    #[tokio::test]
    async fn unknown_slugs_are_invalid_category() {
        let catalog = InMemoryCatalog::bundled();
        let err = run(&catalog, "sale", None, &ListingQuery::default(), 12)
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidCategory(_)));

        let err = run(&catalog, "nam", Some("vay"), &ListingQuery::default(), 12)
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidCategory(ref s) if s == "nam/vay"));
    }

    #[tokio::test]
    async fn load_more_appends_pages() {
        let mut fixture = CatalogFixture::new();
        for i in 1..=25 {
            fixture = fixture.with_product(
                Product::new(i, format!("Item {}", i), 1000).in_category(seed::WOMEN, "ao-thun"),
            );
        }
        let catalog = fixture.build();

        let first = run(&catalog, "nu", None, &ListingQuery::default(), 12)
            .await
            .unwrap();
        let first_shown = first.shown.unwrap();
        assert_eq!(first_shown.len(), 12);
        assert!(first.listing.unwrap().has_more);

        let third = run(&catalog, "nu", None, &ListingQuery::default().with_page(3), 12)
            .await
            .unwrap();
        let shown = third.shown.unwrap();
        assert_eq!(shown.len(), 25);
        assert_eq!(&shown[..12], &first_shown[..]);

        let window = third.listing.unwrap();
        assert_eq!(window.items.len(), 1);
        assert!(window.items.len() <= window.page_size);
        assert!(!window.has_more);
    }

    #[tokio::test]
    async fn load_more_past_the_end_keeps_everything() {
        let catalog = InMemoryCatalog::bundled();
        let res = run(&catalog, "nam", None, &ListingQuery::default().with_page(4), 12)
            .await
            .unwrap();
        assert!(res.listing.unwrap().items.is_empty());
        assert_eq!(res.shown.unwrap().len(), 7);
    }

    #[tokio::test]
    async fn applies_query_state() {
        let catalog = InMemoryCatalog::bundled();
        let query = ListingQuery::from_query_string("sizes=32&sort=price-desc");
        let res = run(&catalog, "nam", None, &query, 12).await.unwrap();
        let page = res.listing.unwrap();
        let ids: Vec<u32> = page.items.iter().map(|p| p.id.0).collect();
        assert_eq!(ids, vec![11, 12, 13]);
        assert_eq!(query.sort, SortKey::PriceDesc);
    }

    #[tokio::test]
    async fn empty_result_says_so() {
        let catalog = InMemoryCatalog::bundled();
        let query = ListingQuery::from_query_string("sizes=XS");
        let res = run(&catalog, "nam", None, &query, 12).await.unwrap();
        assert_eq!(res.listing.unwrap().total_count, 0);
        assert_eq!(res.messages.len(), 1);
    }
}
