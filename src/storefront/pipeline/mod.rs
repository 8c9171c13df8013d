//! # Listing Pipeline
//!
//! Category browsing and search both turn a product list into a page of
//! results the same way:
//!
//! ```text
//!  source ──► filter ──► sort ──► paginate ──► Page<Product>
//! ```
//!
//! - [`filter`]: conjunctive predicates, order preserving
//! - [`sort`]: stable orderings, Vietnamese collation for names
//! - [`paginate`]: 1-based page windows plus page-number navigation
//!
//! Each stage takes ownership of its input and returns a new value; the
//! catalog copy handed in is the only thing consumed. Running the pipeline
//! twice on equal input gives equal output.
//!
//! The pipeline only ever returns one page window. Listings that keep
//! earlier pages on screen ("load more") build that list themselves.

pub mod collation;
pub mod filter;
pub mod paginate;
pub mod sort;

use crate::model::Product;
use filter::ProductFilter;
use paginate::Page;
use sort::SortKey;

/// Filter then sort, without paging.
pub fn refine(products: Vec<Product>, filter: &ProductFilter, sort: SortKey) -> Vec<Product> {
    let mut refined = filter.apply(products);
    sort::sort_products(&mut refined, sort);
    refined
}

/// The full pipeline.
pub fn run(
    products: Vec<Product>,
    filter: &ProductFilter,
    sort: SortKey,
    page: usize,
    page_size: usize,
) -> Page<Product> {
    let source_count = products.len();
    let refined = refine(products, filter, sort);
    tracing::debug!(
        source = source_count,
        matched = refined.len(),
        %sort,
        page,
        page_size,
        "listing pipeline"
    );
    paginate::paginate(refined, page, page_size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed::{self, PRODUCTS};

    #[test]
    fn men_sorted_by_price_on_one_search_page() {
        let filter = ProductFilter::default().with_categories([seed::MEN]);
        let page = run(
            PRODUCTS.clone(),
            &filter,
            SortKey::PriceAsc,
            1,
            paginate::SEARCH_PAGE_SIZE,
        );
        assert_eq!(page.total_count, 7);
        assert_eq!(page.items.len(), 7);
        assert!(!page.has_more);
        assert_eq!(page.items[0].price, 149_000);
        assert_eq!(page.items[0].id.0, 10);
    }

    #[test]
    fn identical_calls_give_identical_pages() {
        let filter = ProductFilter::default().with_sizes(["L"]);
        let a = run(PRODUCTS.clone(), &filter, SortKey::NameDesc, 2, 5);
        let b = run(PRODUCTS.clone(), &filter, SortKey::NameDesc, 2, 5);
        assert_eq!(a, b);
        assert_eq!(PRODUCTS.len(), 25);
    }

    #[test]
    fn second_page_is_only_the_second_window() {
        let filter = ProductFilter::default();
        let page = run(PRODUCTS.clone(), &filter, SortKey::Default, 2, 12);
        assert_eq!(page.items.len(), 12);
        assert!(page.items.len() <= page.page_size);
        assert_eq!(page.items[0].id.0, 13);
        assert!(page.has_more);
    }

    #[test]
    fn page_beyond_results_is_empty_not_an_error() {
        let page = run(
            PRODUCTS.clone(),
            &ProductFilter::default(),
            SortKey::Default,
            4,
            12,
        );
        assert!(page.items.is_empty());
        assert_eq!(page.total_count, 25);
    }
}
