use std::ops::Range;

/// Number of pages needed to show `len` items, `page_size` per page.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Index range of the items shown on 1-based `page`.
///
/// Pages past the end yield an empty range anchored at `len`.
pub fn page_range(len: usize, page: usize, page_size: usize) -> Range<usize> {
    let start = page.saturating_sub(1).saturating_mul(page_size).min(len);
    let end = page.saturating_mul(page_size).min(len);
    start..end
}

/// Prev/next state of a pager showing page `current` of `total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    pub current: u32,
    pub total: u32,
}

impl Pager {
    pub fn new(current: u32, total: u32) -> Self {
        Self { current, total }
    }

    /// A single page (or none) needs no controls.
    pub fn is_visible(&self) -> bool {
        self.total > 1
    }

    pub fn has_previous(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.current < self.total
    }

    pub fn previous(&self) -> Option<u32> {
        self.has_previous().then(|| self.current - 1)
    }

    pub fn next(&self) -> Option<u32> {
        self.has_next().then(|| self.current + 1)
    }

    /// Whether `page` is a valid navigation target.
    pub fn accepts(&self, page: u32) -> bool {
        page >= 1 && page <= self.total
    }
}
