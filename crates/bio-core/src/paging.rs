//! Pure pagination arithmetic over an ordered record set

/// Default rows per page across all tables.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// A window onto an ordered sequence: page size plus a 1-based page number.
///
/// The window never rejects an out-of-range page; [`PageWindow::clamped`]
/// silently corrects it against the current record count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page_size: usize,
    pub current_page: usize,
}

impl Default for PageWindow {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl PageWindow {
    /// A window on page 1. `page_size` of zero is corrected to one.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            current_page: 1,
        }
    }

    /// `max(1, ceil(len / page_size))` — an empty set still has one page.
    pub fn total_pages(&self, len: usize) -> usize {
        len.div_ceil(self.page_size).max(1)
    }

    /// The same window with `current_page` clamped into `[1, total_pages]`.
    pub fn clamped(&self, len: usize) -> Self {
        Self {
            page_size: self.page_size,
            current_page: self.current_page.clamp(1, self.total_pages(len)),
        }
    }

    /// First visible row index (after clamping).
    pub fn start_index(&self, len: usize) -> usize {
        (self.clamped(len).current_page - 1) * self.page_size
    }

    /// One past the last visible row index.
    pub fn end_index(&self, len: usize) -> usize {
        (self.start_index(len) + self.page_size).min(len)
    }

    pub fn has_previous(&self, len: usize) -> bool {
        self.clamped(len).current_page > 1
    }

    pub fn has_next(&self, len: usize) -> bool {
        let clamped = self.clamped(len);
        clamped.current_page < clamped.total_pages(len)
    }
}

/// Slice the visible page out of `rows`, preserving order.
///
/// Pure: the input is untouched and the corrected window is handed back so
/// the caller can adopt the clamp.
pub fn paginate<'a, T>(rows: &'a [T], window: &PageWindow) -> (&'a [T], PageWindow) {
    let corrected = window.clamped(rows.len());
    let start = corrected.start_index(rows.len());
    let end = corrected.end_index(rows.len());
    (&rows[start..end], corrected)
}
