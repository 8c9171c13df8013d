//! Page windows over an already filtered and sorted listing.
//!
//! Pages are 1-based. Everything here is pure: whether successive pages are
//! appended ("load more") or replace each other is decided by the caller.

use serde::Serialize;
use std::ops::RangeInclusive;

/// Page size for category browsing, which loads more in place.
pub const BROWSE_PAGE_SIZE: usize = 12;
/// Page size for search results, which navigate by page number.
pub const SEARCH_PAGE_SIZE: usize = 20;
/// Number of page buttons shown at once.
pub const MAX_VISIBLE_PAGES: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub has_more: bool,
}

impl<T> Page<T> {
    pub fn total_pages(&self) -> usize {
        total_pages(self.total_count, self.page_size)
    }

    /// Items left after this page.
    pub fn remaining(&self) -> usize {
        self.total_count
            .saturating_sub(self.page.saturating_mul(self.page_size))
    }
}

/// Slices out page `page` of `items`. A page past the end is empty.
pub fn paginate<T>(items: Vec<T>, page: usize, page_size: usize) -> Page<T> {
    let page = page.max(1);
    let page_size = page_size.max(1);
    let total_count = items.len();
    let start = (page - 1).saturating_mul(page_size);
    let end = page.saturating_mul(page_size);

    let window = if start >= total_count {
        Vec::new()
    } else {
        items
            .into_iter()
            .skip(start)
            .take(end.min(total_count) - start)
            .collect()
    };

    Page {
        items: window,
        page,
        page_size,
        total_count,
        has_more: end < total_count,
    }
}

pub fn total_pages(total_count: usize, page_size: usize) -> usize {
    total_count.div_ceil(page_size.max(1))
}

/// Page-number buttons around the current page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    pub current: usize,
    pub total_pages: usize,
    pub pages: Vec<usize>,
    pub has_prev: bool,
    pub has_next: bool,
}

impl PageWindow {
    /// `None` when there is at most one page and no navigation is shown.
    pub fn new(current: usize, total_pages: usize, max_visible: usize) -> Option<Self> {
        if total_pages <= 1 {
            return None;
        }
        let current = current.clamp(1, total_pages);
        let range = visible_range(current, total_pages, max_visible.max(1));
        Some(Self {
            current,
            total_pages,
            pages: range.collect(),
            has_prev: current > 1,
            has_next: current < total_pages,
        })
    }
}

/// Centres the window on `current`, shifting it back when it would run
/// past the last page.
fn visible_range(current: usize, total_pages: usize, max_visible: usize) -> RangeInclusive<usize> {
    let mut start = current.saturating_sub(max_visible / 2).max(1);
    let end = (start + max_visible - 1).min(total_pages);
    if end + 1 - start < max_visible {
        start = (end + 1).saturating_sub(max_visible).max(1);
    }
    start..=end
}
