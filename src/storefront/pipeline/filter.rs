//! Product filtering.
//!
//! A [`ProductFilter`] is a conjunction of independent predicates. Each
//! predicate is inactive when its input is empty, so `ProductFilter::default()`
//! keeps everything that fits the default price range.

use crate::model::Product;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const DEFAULT_PRICE_MIN: u64 = 0;
pub const DEFAULT_PRICE_MAX: u64 = 1_000_000;

/// Inclusive price bounds, in đồng.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: u64,
    pub max: u64,
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_PRICE_MIN,
            max: DEFAULT_PRICE_MAX,
        }
    }
}

impl PriceRange {
    /// Bounds are kept as given. A reversed range matches nothing.
    pub fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    /// Parses a lower bound typed by the shopper. Anything unusable becomes 0.
    pub fn parse_min(raw: &str) -> u64 {
        parse_amount(raw).unwrap_or(DEFAULT_PRICE_MIN)
    }

    /// Parses an upper bound typed by the shopper. Anything unusable becomes `ceiling`.
    pub fn parse_max(raw: &str, ceiling: u64) -> u64 {
        parse_amount(raw).unwrap_or(ceiling)
    }

    /// Both bounds from raw text. Each bound falls back on its own.
    pub fn parse(min: &str, max: &str, ceiling: u64) -> Self {
        Self::new(Self::parse_min(min), Self::parse_max(max, ceiling))
    }

    pub fn contains(&self, price: u64) -> bool {
        self.min <= price && price <= self.max
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// Accepts plain digits and the `.`/`,` thousands separators used when
/// prices are shown to shoppers ("199.000").
fn parse_amount(raw: &str) -> Option<u64> {
    let digits: String = raw
        .trim()
        .chars()
        .filter(|c| !matches!(c, '.' | ',' | '_' | ' '))
        .collect();
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductFilter {
    pub text_query: Option<String>,
    pub sizes: BTreeSet<String>,
    pub price: PriceRange,
    pub categories: BTreeSet<String>,
}

impl ProductFilter {
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text_query = Some(text.into());
        self
    }

    pub fn with_sizes<I, S>(mut self, sizes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sizes.extend(sizes.into_iter().map(Into::into));
        self
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories.extend(categories.into_iter().map(Into::into));
        self
    }

    pub fn with_price(mut self, price: PriceRange) -> Self {
        self.price = price;
        self
    }

    /// The trimmed, lowercased query, if there is one worth matching.
    fn needle(&self) -> Option<String> {
        self.text_query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase)
    }

    pub fn matches(&self, product: &Product) -> bool {
        self.matches_with_needle(product, self.needle().as_deref())
    }

    fn matches_with_needle(&self, product: &Product, needle: Option<&str>) -> bool {
        if let Some(needle) = needle {
            if !matches_text(product, needle) {
                return false;
            }
        }
        if !self.sizes.is_empty() && !product.sizes.iter().any(|s| self.sizes.contains(s)) {
            return false;
        }
        if !self.price.contains(product.price) {
            return false;
        }
        if !self.categories.is_empty() {
            match &product.category {
                Some(c) if self.categories.contains(c) => {}
                _ => return false,
            }
        }
        true
    }

    /// Keeps the matching products, preserving their relative order.
    pub fn apply(&self, products: Vec<Product>) -> Vec<Product> {
        let needle = self.needle();
        products
            .into_iter()
            .filter(|p| self.matches_with_needle(p, needle.as_deref()))
            .collect()
    }
}

/// Case-insensitive substring match against title, category or subcategory.
/// `needle` must already be lowercased.
pub fn matches_text(product: &Product, needle: &str) -> bool {
    product.title.to_lowercase().contains(needle)
        || product
            .category
            .as_deref()
            .is_some_and(|c| c.to_lowercase().contains(needle))
        || product
            .sub_category
            .as_deref()
            .is_some_and(|s| s.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed::{self, PRODUCTS};

    fn ids(products: &[Product]) -> Vec<u32> {
        products.iter().map(|p| p.id.0).collect()
    }

    #[test]
    fn empty_filter_keeps_everything_in_range() {
        let out = ProductFilter::default().apply(PRODUCTS.clone());
        assert_eq!(out.len(), 25);
        assert_eq!(out, *PRODUCTS);
    }

    #[test]
    fn text_matches_title_category_or_subcategory() {
        let by_title = ProductFilter::default().with_text("POLO").apply(PRODUCTS.clone());
        assert_eq!(ids(&by_title), vec![9]);

        let by_category = ProductFilter::default().with_text("bé trai").apply(PRODUCTS.clone());
        assert_eq!(ids(&by_category), vec![18, 19, 20, 21, 25]);

        let by_slug = ProductFilter::default().with_text("quan-jean").apply(PRODUCTS.clone());
        assert_eq!(ids(&by_slug), vec![11, 12, 13]);
    }

    #[test]
    fn blank_text_is_inactive() {
        let out = ProductFilter::default().with_text("   ").apply(PRODUCTS.clone());
        assert_eq!(out.len(), 25);
    }

    #[test]
    fn sizes_need_one_shared_label() {
        let out = ProductFilter::default()
            .with_sizes(["XS", "28"])
            .apply(PRODUCTS.clone());
        assert_eq!(ids(&out), vec![3, 13]);
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let out = ProductFilter::default()
            .with_price(PriceRange::new(149_000, 179_000))
            .apply(PRODUCTS.clone());
        assert!(out.iter().all(|p| (149_000..=179_000).contains(&p.price)));
        assert_eq!(ids(&out), vec![3, 8, 10, 16, 17, 19]);
    }

    #[test]
    fn categories_are_membership() {
        let out = ProductFilter::default()
            .with_categories([seed::MEN, seed::GIRLS])
            .apply(PRODUCTS.clone());
        assert_eq!(out.len(), 7 + 5);
    }

    #[test]
    fn predicates_combine_conjunctively() {
        let filter = ProductFilter::default()
            .with_text("áo thun")
            .with_sizes(["XL"])
            .with_categories([seed::MEN])
            .with_price(PriceRange::new(0, 200_000));
        let out = filter.apply(PRODUCTS.clone());
        assert_eq!(ids(&out), vec![8, 10]);
    }

    #[test]
    fn sound_and_complete_against_matches() {
        let filter = ProductFilter::default()
            .with_sizes(["M"])
            .with_price(PriceRange::new(200_000, 500_000));
        let out = filter.apply(PRODUCTS.clone());
        let expected: Vec<_> = PRODUCTS.iter().filter(|p| filter.matches(p)).cloned().collect();
        assert_eq!(out, expected);
        assert!(out.iter().all(|p| p.has_size("M") && filter.price.contains(p.price)));
    }

    #[test]
    fn products_without_category_fail_category_filter() {
        let out = ProductFilter::default()
            .with_categories([seed::MEN])
            .apply(vec![Product::new(1, "Loose", 10)]);
        assert!(out.is_empty());
    }

    #[test]
    fn malformed_prices_fall_back() {
        assert_eq!(PriceRange::parse_min("abc"), 0);
        assert_eq!(PriceRange::parse_min(""), 0);
        assert_eq!(PriceRange::parse_min("-5"), 0);
        assert_eq!(PriceRange::parse_max("lots", 1_000_000), 1_000_000);
        assert_eq!(PriceRange::parse_max("199.000", 1_000_000), 199_000);
        assert_eq!(PriceRange::parse_min("1,500"), 1500);
    }

    #[test]
    fn reversed_bounds_match_nothing() {
        let range = PriceRange::parse("500000", "100000", 1_000_000);
        assert_eq!(range, PriceRange { min: 500_000, max: 100_000 });
        assert!(!range.contains(300_000));

        let out = ProductFilter::default().with_price(range).apply(PRODUCTS.clone());
        assert!(out.is_empty());
    }
}
