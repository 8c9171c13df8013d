use proptest::prelude::*;
use storefront::model::Product;
use storefront::pipeline::collation::collation_key;
use storefront::pipeline::filter::{PriceRange, ProductFilter};
use storefront::pipeline::paginate::paginate;
use storefront::pipeline::sort::{sort_products, SortKey};
use storefront::pipeline::{refine, run};
use storefront::query::ListingQuery;
use storefront::store::seed;

const TITLES: &[&str] = &[
    "Áo thun nam basic",
    "áo thun nam basic",
    "Ao thun nam basic",
    "Quần jean nữ",
    "Quần short bé trai",
    "Đầm maxi",
    "Váy bé gái hoa nhí",
    "Ốp lưng",
    "ưu đãi",
    "Zebra",
];
const CATEGORIES: &[&str] = &[seed::WOMEN, seed::MEN, seed::GIRLS, seed::BOYS];
const SIZES: &[&str] = &["S", "M", "L", "XL", "32", "4-5 tuổi"];
const NEEDLES: &[&str] = &["áo", "QUẦN", "nam", "bé", "jean", "  ", "không có"];

/// Prices on a coarse grid so ties are common.
fn price() -> impl Strategy<Value = u64> {
    (0u64..=12).prop_map(|n| n * 100_000)
}

/// Products with ids 1..=n in catalog order.
fn products() -> impl Strategy<Value = Vec<Product>> {
    let product = (
        prop::sample::select(TITLES),
        price(),
        prop::option::of(prop::sample::select(CATEGORIES)),
        prop::sample::subsequence(SIZES, 0..=3),
    );
    prop::collection::vec(product, 0..40).prop_map(|parts| {
        parts
            .into_iter()
            .enumerate()
            .map(|(i, (title, price, category, sizes))| {
                let mut product = Product::new(i as u32 + 1, title, price).with_sizes(&sizes);
                product.category = category.map(str::to_string);
                product
            })
            .collect()
    })
}

fn filters() -> impl Strategy<Value = ProductFilter> {
    (
        prop::option::of(prop::sample::select(NEEDLES)),
        prop::sample::subsequence(SIZES, 0..=2),
        prop::sample::subsequence(CATEGORIES, 0..=2),
        price(),
        price(),
    )
        .prop_map(|(text, sizes, categories, min, max)| {
            let mut filter = ProductFilter::default()
                .with_sizes(sizes)
                .with_categories(categories)
                .with_price(PriceRange::new(min, max));
            filter.text_query = text.map(str::to_string);
            filter
        })
}

fn ids(products: &[Product]) -> Vec<u32> {
    products.iter().map(|p| p.id.0).collect()
}

/// Text items in the shape decoding produces: non-blank and unique.
fn text_list() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[A-Za-z0-9ÉạưỨ ,&=+%-]{1,8}", 0..4).prop_map(|items| {
        let mut out: Vec<String> = Vec::new();
        for item in items {
            if !item.trim().is_empty() && !out.contains(&item) {
                out.push(item);
            }
        }
        out
    })
}

fn listing_queries() -> impl Strategy<Value = ListingQuery> {
    (
        prop::option::of("[a-zA-Z0-9àáạăâđêôơư ,&+=#?%]{0,12}"),
        text_list(),
        text_list(),
        prop::sample::select(SortKey::ALL.to_vec()),
        0u64..=2_000_000,
        0u64..=2_000_000,
        1usize..500,
    )
        .prop_map(|(q, categories, sizes, sort, min, max, page)| ListingQuery {
            q: q.map(|q| q.trim().to_string()).filter(|q| !q.is_empty()),
            categories,
            sizes,
            sort,
            price: PriceRange::new(min, max),
            page,
        })
}

proptest! {
    #[test]
    fn filter_keeps_exactly_the_matching_products(products in products(), filter in filters()) {
        let out = filter.apply(products.clone());
        let expected: Vec<Product> = products.iter().filter(|p| filter.matches(p)).cloned().collect();
        prop_assert_eq!(&out, &expected);
        prop_assert!(out.iter().all(|p| filter.matches(p)));
    }

    #[test]
    fn filter_is_idempotent(products in products(), filter in filters()) {
        let once = filter.apply(products);
        let twice = filter.apply(once.clone());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn refining_twice_changes_nothing(
        products in products(),
        filter in filters(),
        sort in prop::sample::select(SortKey::ALL.to_vec()),
    ) {
        let once = refine(products, &filter, sort);
        let twice = refine(once.clone(), &filter, sort);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn price_sorts_are_stable(products in products()) {
        let mut asc = products.clone();
        sort_products(&mut asc, SortKey::PriceAsc);
        for pair in asc.windows(2) {
            prop_assert!(pair[0].price <= pair[1].price);
            if pair[0].price == pair[1].price {
                prop_assert!(pair[0].id < pair[1].id);
            }
        }

        let mut desc = products.clone();
        sort_products(&mut desc, SortKey::PriceDesc);
        for pair in desc.windows(2) {
            prop_assert!(pair[0].price >= pair[1].price);
            if pair[0].price == pair[1].price {
                prop_assert!(pair[0].id < pair[1].id);
            }
        }

        let mut sorted_ids = ids(&asc);
        sorted_ids.sort_unstable();
        prop_assert_eq!(sorted_ids, ids(&products));
    }

    #[test]
    fn name_sorts_are_stable(products in products()) {
        let mut asc = products.clone();
        sort_products(&mut asc, SortKey::NameAsc);
        for pair in asc.windows(2) {
            let (a, b) = (collation_key(&pair[0].title), collation_key(&pair[1].title));
            prop_assert!(a <= b);
            if a == b {
                prop_assert!(pair[0].id < pair[1].id);
            }
        }

        let mut desc = products;
        sort_products(&mut desc, SortKey::NameDesc);
        for pair in desc.windows(2) {
            let (a, b) = (collation_key(&pair[0].title), collation_key(&pair[1].title));
            prop_assert!(a >= b);
            if a == b {
                prop_assert!(pair[0].id < pair[1].id);
            }
        }
    }

    #[test]
    fn pages_are_bounded_windows(total in 0usize..80, page in 0usize..10, size in 0usize..25) {
        let items: Vec<usize> = (0..total).collect();
        let out = paginate(items.clone(), page, size);
        let (page, size) = (page.max(1), size.max(1));

        prop_assert!(out.items.len() <= out.page_size);
        prop_assert_eq!(out.page_size, size);
        prop_assert_eq!(out.total_count, total);
        prop_assert_eq!(out.has_more, page * size < total);

        let expected: Vec<usize> = items.into_iter().skip((page - 1) * size).take(size).collect();
        prop_assert_eq!(out.items, expected);
    }

    #[test]
    fn pipeline_pages_never_exceed_page_size(
        products in products(),
        filter in filters(),
        page in 1usize..6,
        size in 1usize..15,
    ) {
        let out = run(products.clone(), &filter, SortKey::PriceAsc, page, size);
        prop_assert!(out.items.len() <= size);
        prop_assert_eq!(out.has_more, page * size < out.total_count);
        prop_assert_eq!(out, run(products, &filter, SortKey::PriceAsc, page, size));
    }

    #[test]
    fn decoding_an_encoded_query_gives_it_back(query in listing_queries()) {
        let encoded = query.to_query_string();
        prop_assert_eq!(ListingQuery::from_query_string(&encoded), query);
    }
}
