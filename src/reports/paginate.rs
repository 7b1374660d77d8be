//! Pagination
//!
//! Slices a filtered sequence into fixed-size pages and lays out the strip of
//! page-number buttons around the current page.
//!
//! The button window is at most `max_visible_buttons` wide. It starts half a
//! window before the current page and slides right as the user moves on; near
//! the last page it is pinned to the end so it stays full. An empty sequence
//! still renders one (disabled) page button.

use serde::Serialize;

/// Default number of rows per page
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Default number of page-number buttons in the strip
pub const MAX_VISIBLE_BUTTONS: usize = 10;

/// Layout of the pagination strip for one render
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationWindow {
    /// Target of the "first" control, always 1
    pub first_page: usize,
    pub prev_enabled: bool,
    /// Contiguous ascending page numbers to show as buttons
    pub page_numbers: Vec<usize>,
    pub next_enabled: bool,
    /// Target of the "last" control; 1 when there are no pages
    pub last_page: usize,
    /// Page the buttons are laid out around
    pub current_page: usize,
}

impl PaginationWindow {
    pub fn first_enabled(&self) -> bool {
        self.prev_enabled
    }

    pub fn last_enabled(&self) -> bool {
        self.next_enabled
    }

    pub fn is_current(&self, page: usize) -> bool {
        page == self.current_page
    }
}

/// The visible slice of a paginated sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub visible: &'a [T],
    pub window: PaginationWindow,
    /// Requested page after clamping into range
    pub effective_page: usize,
    /// Real page count; 0 for an empty sequence
    pub total_pages: usize,
    pub total_items: usize,
}

/// Computes page slices and button windows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page_size: usize,
    max_visible_buttons: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Paginator {
    /// Create a paginator; a zero page size is treated as 1
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            max_visible_buttons: MAX_VISIBLE_BUTTONS,
        }
    }

    pub fn with_max_visible_buttons(mut self, max_visible_buttons: usize) -> Self {
        self.max_visible_buttons = max_visible_buttons.max(1);
        self
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// `ceil(len / page_size)`
    pub fn total_pages(&self, len: usize) -> usize {
        len.div_ceil(self.page_size)
    }

    /// Clamp a requested page into `1..=max(total_pages, 1)`
    pub fn clamp_page(&self, requested: i64, total_pages: usize) -> usize {
        let upper = total_pages.max(1) as i64;
        requested.clamp(1, upper) as usize
    }

    /// Lay out the button strip around `effective_page`
    pub fn window(&self, effective_page: usize, total_pages: usize) -> PaginationWindow {
        let display_pages = total_pages.max(1);
        let max = self.max_visible_buttons;

        let mut start_page = effective_page.saturating_sub(max / 2).max(1);
        let mut end_page = start_page + max - 1;

        if end_page > display_pages {
            end_page = display_pages;
            start_page = (end_page + 1).saturating_sub(max).max(1);
        }

        PaginationWindow {
            first_page: 1,
            prev_enabled: effective_page > 1,
            page_numbers: (start_page..=end_page).collect(),
            next_enabled: effective_page < total_pages,
            last_page: display_pages,
            current_page: effective_page,
        }
    }

    /// Slice `items` for `requested_page` and compute its button window
    pub fn paginate<'a, T>(&self, items: &'a [T], requested_page: i64) -> Page<'a, T> {
        let total_items = items.len();
        let total_pages = self.total_pages(total_items);
        let effective_page = self.clamp_page(requested_page, total_pages);

        let start = ((effective_page - 1) * self.page_size).min(total_items);
        let end = (start + self.page_size).min(total_items);

        Page {
            visible: &items[start..end],
            window: self.window(effective_page, total_pages),
            effective_page,
            total_pages,
            total_items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    #[test]
    fn test_third_page_of_twenty_three() {
        let data = items(23);
        let page = Paginator::new(10).paginate(&data, 3);

        assert_eq!(page.visible, &[20, 21, 22]);
        assert_eq!(page.effective_page, 3);
        assert_eq!(page.window.page_numbers, vec![1, 2, 3]);
        assert!(page.window.prev_enabled);
        assert!(!page.window.next_enabled);
        assert_eq!(page.window.last_page, 3);
    }

    #[test]
    fn test_empty_sequence_renders_single_disabled_page() {
        let data: Vec<usize> = Vec::new();
        let page = Paginator::new(10).paginate(&data, 1);

        assert!(page.visible.is_empty());
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.effective_page, 1);
        assert_eq!(page.window.page_numbers, vec![1]);
        assert!(!page.window.prev_enabled);
        assert!(!page.window.next_enabled);
        assert_eq!(page.window.last_page, 1);
    }

    #[test]
    fn test_far_out_of_range_page_clamps_to_last() {
        let data = items(50);
        let page = Paginator::new(10).paginate(&data, 999);

        assert_eq!(page.effective_page, 5);
        assert_eq!(page.visible, &[40, 41, 42, 43, 44, 45, 46, 47, 48, 49]);
        assert_eq!(page.window.page_numbers.last(), Some(&5));
        assert!(!page.window.next_enabled);
    }

    #[test]
    fn test_zero_and_negative_pages_clamp_to_first() {
        let data = items(30);
        let paginator = Paginator::new(10);
        for requested in [0, -1, -999, i64::MIN] {
            let page = paginator.paginate(&data, requested);
            assert_eq!(page.effective_page, 1);
            assert_eq!(page.visible.len(), 10);
            assert!(!page.window.prev_enabled);
        }
    }

    #[test]
    fn test_window_slides_with_current_page() {
        let paginator = Paginator::new(10);

        let window = paginator.window(1, 20);
        assert_eq!(window.page_numbers, (1..=10).collect::<Vec<_>>());

        let window = paginator.window(6, 20);
        assert_eq!(window.page_numbers, (1..=10).collect::<Vec<_>>());

        let window = paginator.window(7, 20);
        assert_eq!(window.page_numbers, (2..=11).collect::<Vec<_>>());

        let window = paginator.window(10, 20);
        assert_eq!(window.page_numbers, (5..=14).collect::<Vec<_>>());

        let window = paginator.window(20, 20);
        assert_eq!(window.page_numbers, (11..=20).collect::<Vec<_>>());
    }

    #[test]
    fn test_window_invariants_hold_for_all_pages() {
        let paginator = Paginator::new(10);
        for total_items in [1usize, 9, 10, 11, 95, 100, 101, 345] {
            let data = items(total_items);
            let total_pages = paginator.total_pages(total_items);
            for requested in -3..(total_pages as i64 + 4) {
                let page = paginator.paginate(&data, requested);
                let numbers = &page.window.page_numbers;

                assert!(page.effective_page >= 1 && page.effective_page <= total_pages);
                assert_eq!(numbers.len(), total_pages.min(MAX_VISIBLE_BUTTONS));
                assert!(numbers.contains(&page.effective_page));
                assert!(numbers.windows(2).all(|pair| pair[1] == pair[0] + 1));
                assert!(page.visible.len() <= 10);
            }
        }
    }

    #[test]
    fn test_paginate_is_idempotent() {
        let data = items(47);
        let paginator = Paginator::new(10);
        assert_eq!(paginator.paginate(&data, 4), paginator.paginate(&data, 4));
    }

    #[test]
    fn test_narrow_window() {
        let paginator = Paginator::new(5).with_max_visible_buttons(3);
        let window = paginator.window(4, 10);
        assert_eq!(window.page_numbers, vec![3, 4, 5]);
    }

    #[test]
    fn test_zero_page_size_is_treated_as_one() {
        let paginator = Paginator::new(0);
        assert_eq!(paginator.page_size(), 1);
        assert_eq!(paginator.total_pages(3), 3);
    }
}
