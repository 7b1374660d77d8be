//! Loan report pipeline
//!
//! Filters records by period, slices the matches into pages and formats the
//! visible rows for a renderer.

pub mod controller;
pub mod filter;
pub mod format;
pub mod paginate;

pub use controller::{
    NavCommand, PageState, RenderInstruction, ReportController, ReportView, EMPTY_NOTICE,
};
pub use filter::filter_by_period;
pub use format::{DisplayRow, RowFormatter, COLUMN_HEADERS};
pub use paginate::{Page, PaginationWindow, Paginator, DEFAULT_PAGE_SIZE, MAX_VISIBLE_BUTTONS};

/// Controller configuration, derived from the user settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSettings {
    pub page_size: usize,
    pub max_visible_buttons: usize,
    pub year_offset: i32,
    pub absence_marker: String,
    pub date_format: String,
    pub reset_page_on_refilter: bool,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            max_visible_buttons: MAX_VISIBLE_BUTTONS,
            year_offset: 543,
            absence_marker: "-".to_string(),
            date_format: "%d-%m-%Y".to_string(),
            reset_page_on_refilter: true,
        }
    }
}
