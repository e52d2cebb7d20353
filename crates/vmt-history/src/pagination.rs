//! Offset pagination for the movement table.

use serde::Serialize;

/// Rows per page when nothing else is requested.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// A window into a result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Maximum number of items to return.
    pub limit: usize,
    /// Number of items to skip.
    pub offset: usize,
}

impl PageRequest {
    pub fn new(limit: usize, offset: usize) -> Self {
        Self { limit, offset }
    }

    /// The request for a 1-based page number. Page 0 is treated as page 1.
    pub fn for_page(page_size: usize, page_number: usize) -> Self {
        let page_number = page_number.max(1);
        Self {
            limit: page_size,
            offset: (page_number - 1).saturating_mul(page_size),
        }
    }

    /// 1-based page number of this request.
    pub fn page_number(&self) -> usize {
        if self.limit == 0 {
            1
        } else {
            (self.offset / self.limit) + 1
        }
    }

    /// Cut this window out of `items`. Out-of-range windows yield an empty
    /// page with the full total.
    pub fn slice<T, I>(&self, items: I) -> Page<T>
    where
        I: IntoIterator<Item = T>,
    {
        let all: Vec<T> = items.into_iter().collect();
        let total = all.len();
        let items = all.into_iter().skip(self.offset).take(self.limit).collect();
        Page::new(items, total, self.limit, self.offset)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::for_page(DEFAULT_PAGE_SIZE, 1)
    }
}

/// One page of results plus the totals needed to render a pager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    /// The items in this page.
    pub items: Vec<T>,
    /// Number of items across all pages.
    pub total: usize,
    /// Maximum number of items per page.
    pub limit: usize,
    /// Number of items skipped before this page.
    pub offset: usize,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: usize, limit: usize, offset: usize) -> Self {
        Self {
            items,
            total,
            limit,
            offset,
        }
    }

    /// Whether more items follow this page.
    pub fn has_more(&self) -> bool {
        self.offset + self.items.len() < self.total
    }

    /// 1-based page number.
    pub fn page_number(&self) -> usize {
        if self.limit == 0 {
            1
        } else {
            (self.offset / self.limit) + 1
        }
    }

    /// Number of pages; at least 1, even for an empty result.
    pub fn total_pages(&self) -> usize {
        if self.limit == 0 {
            1
        } else {
            self.total.div_ceil(self.limit).max(1)
        }
    }

    pub fn is_first_page(&self) -> bool {
        self.offset == 0
    }

    pub fn is_last_page(&self) -> bool {
        !self.has_more()
    }

    /// 1-based positions of the first and last item on this page, or
    /// `None` when the page is empty.
    pub fn range(&self) -> Option<(usize, usize)> {
        if self.items.is_empty() {
            None
        } else {
            Some((self.offset + 1, self.offset + self.items.len()))
        }
    }

    /// Pager caption: `Showing 11-20 of 57 entries`.
    ///
    /// An empty page reads `Showing 0-0 of N entries`.
    pub fn showing(&self) -> String {
        let (first, last) = self.range().unwrap_or((0, 0));
        format!("Showing {first}-{last} of {} entries", self.total)
    }

    /// Transform the items, keeping the totals.
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            limit: self.limit,
            offset: self.offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_page() {
        assert_eq!(PageRequest::for_page(10, 1), PageRequest::new(10, 0));
        assert_eq!(PageRequest::for_page(10, 3), PageRequest::new(10, 20));
        assert_eq!(PageRequest::for_page(10, 0), PageRequest::new(10, 0));
        assert_eq!(PageRequest::for_page(10, 3).page_number(), 3);
        assert_eq!(PageRequest::default(), PageRequest::new(DEFAULT_PAGE_SIZE, 0));
    }

    #[test]
    fn test_slice_middle_and_last_page() {
        let page = PageRequest::for_page(10, 2).slice(1..=25);
        assert_eq!(page.items, (11..=20).collect::<Vec<_>>());
        assert_eq!(page.total, 25);
        assert_eq!(page.total_pages(), 3);
        assert!(page.has_more());
        assert_eq!(page.showing(), "Showing 11-20 of 25 entries");

        let last = PageRequest::for_page(10, 3).slice(1..=25);
        assert_eq!(last.items, (21..=25).collect::<Vec<_>>());
        assert!(last.is_last_page());
        assert_eq!(last.showing(), "Showing 21-25 of 25 entries");
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        let page = PageRequest::for_page(10, 9).slice(1..=25);
        assert!(page.items.is_empty());
        assert_eq!(page.total, 25);
        assert_eq!(page.page_number(), 9);
        assert_eq!(page.range(), None);
        assert_eq!(page.showing(), "Showing 0-0 of 25 entries");
    }

    #[test]
    fn test_empty_result() {
        let page = PageRequest::default().slice(Vec::<u8>::new());
        assert_eq!(page.total_pages(), 1);
        assert!(page.is_first_page());
        assert!(page.is_last_page());
        assert_eq!(page.showing(), "Showing 0-0 of 0 entries");
    }

    #[test]
    fn test_map_keeps_totals() {
        let page = PageRequest::for_page(2, 2).slice(["a", "b", "c"]).map(str::len);
        assert_eq!(page.items, vec![1]);
        assert_eq!(page.total, 3);
        assert_eq!(page.offset, 2);
    }
}
