//! # Listing state in the URL
//!
//! The address bar is the only place listing state lives between page loads:
//!
//! ```text
//! /search?q=%C3%A1o&sizes=S,M&sort=price-asc&minPrice=0&maxPrice=500000&page=2
//! ```
//!
//! [`ListingQuery`] is that state as a value. `to_query_string` and
//! `from_query_string` convert in each direction. Decoding an encoded query
//! gives it back when it is in the shape decoding produces: `q` absent or
//! trimmed and non-blank, list entries non-blank and unique, `page` at
//! least 1. Anything else comes back in that shape instead.
//!
//! Decoding never fails. Unknown keys are skipped, bad numbers fall back
//! to their defaults, an unknown sort becomes `default`, and page numbers
//! below 1 become 1.

use crate::pipeline::filter::{PriceRange, ProductFilter, DEFAULT_PRICE_MAX};
use crate::pipeline::sort::SortKey;
use serde::Serialize;
use std::borrow::Cow;

pub const KEY_QUERY: &str = "q";
pub const KEY_CATEGORIES: &str = "categories";
pub const KEY_SIZES: &str = "sizes";
pub const KEY_SORT: &str = "sort";
pub const KEY_MIN_PRICE: &str = "minPrice";
pub const KEY_MAX_PRICE: &str = "maxPrice";
pub const KEY_PAGE: &str = "page";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingQuery {
    pub q: Option<String>,
    pub categories: Vec<String>,
    pub sizes: Vec<String>,
    pub sort: SortKey,
    pub price: PriceRange,
    pub page: usize,
}

impl Default for ListingQuery {
    fn default() -> Self {
        Self {
            q: None,
            categories: Vec::new(),
            sizes: Vec::new(),
            sort: SortKey::Default,
            price: PriceRange::default(),
            page: 1,
        }
    }
}

impl ListingQuery {
    pub fn search(text: impl Into<String>) -> Self {
        Self {
            q: Some(text.into()),
            ..Self::default()
        }
    }

    /// The filter this state describes.
    pub fn filter(&self) -> ProductFilter {
        ProductFilter {
            text_query: self.q.clone(),
            sizes: self.sizes.iter().cloned().collect(),
            price: self.price,
            categories: self.categories.iter().cloned().collect(),
        }
    }

    /// Same state, back on page 1. Any change of filter or sort resets paging.
    pub fn first_page(&self) -> Self {
        Self {
            page: 1,
            ..self.clone()
        }
    }

    pub fn with_page(&self, page: usize) -> Self {
        Self {
            page: page.max(1),
            ..self.clone()
        }
    }

    /// Encodes non-default fields, in a fixed key order. Default state
    /// encodes to the empty string.
    pub fn to_query_string(&self) -> String {
        let mut pairs: Vec<(&str, String)> = Vec::new();

        if let Some(q) = self.q.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
            pairs.push((KEY_QUERY, urlencoding::encode(q).into_owned()));
        }
        if !self.categories.is_empty() {
            pairs.push((KEY_CATEGORIES, encode_list(&self.categories)));
        }
        if !self.sizes.is_empty() {
            pairs.push((KEY_SIZES, encode_list(&self.sizes)));
        }
        if self.sort != SortKey::Default {
            pairs.push((KEY_SORT, self.sort.to_string()));
        }
        if !self.price.is_default() {
            pairs.push((KEY_MIN_PRICE, self.price.min.to_string()));
            pairs.push((KEY_MAX_PRICE, self.price.max.to_string()));
        }
        if self.page > 1 {
            pairs.push((KEY_PAGE, self.page.to_string()));
        }

        pairs
            .into_iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Decodes with the default price ceiling.
    pub fn from_query_string(raw: &str) -> Self {
        Self::decode(raw, DEFAULT_PRICE_MAX)
    }

    /// Decodes a query string, or a full path with one. A missing or
    /// unusable `maxPrice` becomes `ceiling`.
    pub fn decode(raw: &str, ceiling: u64) -> Self {
        let query = match raw.split_once('?') {
            Some((_, q)) => q,
            None => raw,
        };
        let query = query.split('#').next().unwrap_or_default();

        let mut out = Self::default();
        let mut min_raw = String::new();
        let mut max_raw = String::new();

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match key {
                KEY_QUERY => {
                    let q = decode_component(value);
                    out.q = if q.trim().is_empty() { None } else { Some(q) };
                }
                KEY_CATEGORIES => out.categories.extend(decode_list(value)),
                KEY_SIZES => out.sizes.extend(decode_list(value)),
                KEY_SORT => out.sort = SortKey::parse_lenient(&decode_component(value)),
                KEY_MIN_PRICE => min_raw = decode_component(value),
                KEY_MAX_PRICE => max_raw = decode_component(value),
                KEY_PAGE => {
                    out.page = decode_component(value)
                        .trim()
                        .parse::<usize>()
                        .unwrap_or(1)
                        .max(1)
                }
                _ => {}
            }
        }

        dedup_in_order(&mut out.categories);
        dedup_in_order(&mut out.sizes);
        out.price = PriceRange::parse(&min_raw, &max_raw, ceiling);
        out
    }
}

fn encode_list(items: &[String]) -> String {
    items
        .iter()
        .map(|s| urlencoding::encode(s))
        .collect::<Vec<Cow<'_, str>>>()
        .join(",")
}

fn decode_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(decode_component)
        .filter(|s| !s.trim().is_empty())
        .collect()
}

/// Percent-decodes one component. `+` is a space, as browsers send it.
/// Bytes that are not UTF-8 are replaced rather than rejected.
fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    let bytes = urlencoding::decode_binary(spaced.as_bytes());
    String::from_utf8_lossy(&bytes).into_owned()
}

fn dedup_in_order(items: &mut Vec<String>) {
    let mut seen = std::collections::HashSet::new();
    items.retain(|s| seen.insert(s.clone()));
}
