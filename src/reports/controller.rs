//! Report controller
//!
//! Runs the filter, paginate and format steps for each period selection or
//! navigation event and hands the result to a [`ReportView`]. The current
//! page lives in a [`PageState`] value owned by the caller; the controller
//! itself keeps no state between calls.

use serde::Serialize;

use crate::error::{ReportError, ReportResult};
use crate::models::{PeriodQuery, PeriodSelector};
use crate::storage::RecordStore;

use super::filter::filter_by_period;
use super::format::{DisplayRow, RowFormatter};
use super::paginate::{PaginationWindow, Paginator};
use super::ReportSettings;

/// Informational message for an empty result
pub const EMPTY_NOTICE: &str = "No records match the selected month and year";

/// Current page of a report view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageState {
    current_page: usize,
    page_size: usize,
}

impl PageState {
    /// Start at page 1
    pub fn new(page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Move to `page` (at least 1; the upper bound is applied on render)
    pub fn with_page(self, page: usize) -> Self {
        Self {
            current_page: page.max(1),
            ..self
        }
    }

    pub fn reset(self) -> Self {
        self.with_page(1)
    }
}

/// Navigation requests from the pagination strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    First,
    Prev,
    Next,
    Last,
    /// Jump to a page number, clamped into range on render
    Goto(i64),
}

impl NavCommand {
    /// Resolve to a target page against the window last shown
    ///
    /// Prev and Next are no-ops when their control is disabled.
    pub fn resolve(&self, window: &PaginationWindow) -> i64 {
        let current = window.current_page as i64;
        match self {
            Self::First => window.first_page as i64,
            Self::Prev if window.prev_enabled => current - 1,
            Self::Next if window.next_enabled => current + 1,
            Self::Prev | Self::Next => current,
            Self::Last => window.last_page as i64,
            Self::Goto(page) => *page,
        }
    }
}

/// Everything a renderer needs to draw one report page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderInstruction {
    pub selector: PeriodSelector,
    pub rows: Vec<DisplayRow>,
    /// True when no record matched the period
    pub empty_state: bool,
    pub window: PaginationWindow,
    /// Page state after clamping; store this for the next event
    pub page: PageState,
    pub total_matches: usize,
}

impl RenderInstruction {
    /// Non-blocking message to show alongside the render, if any
    pub fn notice(&self) -> Option<&'static str> {
        self.empty_state.then_some(EMPTY_NOTICE)
    }

    /// 1-based position of the first visible row within all matches
    pub fn first_row_number(&self) -> usize {
        if self.rows.is_empty() {
            0
        } else {
            (self.page.current_page() - 1) * self.page.page_size() + 1
        }
    }

    /// 1-based position of the last visible row within all matches
    pub fn last_row_number(&self) -> usize {
        if self.rows.is_empty() {
            0
        } else {
            self.first_row_number() + self.rows.len() - 1
        }
    }
}

/// Rendering collaborator
pub trait ReportView {
    /// Redraw the table and pagination strip
    fn render(&mut self, instruction: &RenderInstruction);

    /// Blocking message: the period selection was rejected
    fn alert(&mut self, message: &str);

    /// Non-blocking informational message
    fn inform(&mut self, message: &str);
}

/// Orchestrates filtering and pagination over a record store
pub struct ReportController<'a, S: RecordStore + ?Sized> {
    store: &'a S,
    settings: ReportSettings,
    formatter: RowFormatter,
}

impl<'a, S: RecordStore + ?Sized> ReportController<'a, S> {
    pub fn new(store: &'a S, settings: ReportSettings) -> Self {
        let formatter = RowFormatter::new(
            settings.year_offset,
            settings.date_format.clone(),
            settings.absence_marker.clone(),
        );
        Self {
            store,
            settings,
            formatter,
        }
    }

    pub fn settings(&self) -> &ReportSettings {
        &self.settings
    }

    /// Page state for a freshly opened report
    pub fn initial_page(&self) -> PageState {
        PageState::new(self.settings.page_size)
    }

    fn paginator(&self, page: &PageState) -> Paginator {
        Paginator::new(page.page_size()).with_max_visible_buttons(self.settings.max_visible_buttons)
    }

    /// Validate the period, filter a fresh snapshot and build the page
    ///
    /// # Errors
    ///
    /// Returns a validation error, without reading storage, when the year or
    /// month is missing or invalid.
    pub fn generate(&self, query: &PeriodQuery, page: PageState) -> ReportResult<RenderInstruction> {
        let selector = query.validate()?;

        let records = self.store.snapshot();
        let matches = filter_by_period(&records, &selector);
        let page_view = self
            .paginator(&page)
            .paginate(&matches, page.current_page() as i64);

        let rows = page_view
            .visible
            .iter()
            .map(|record| self.formatter.row(record))
            .collect();

        tracing::debug!(
            period = %selector,
            page = page_view.effective_page,
            pages = page_view.total_pages,
            "generated report page"
        );

        Ok(RenderInstruction {
            selector,
            rows,
            empty_state: matches.is_empty(),
            window: page_view.window,
            page: page.with_page(page_view.effective_page),
            total_matches: matches.len(),
        })
    }

    /// Generate for a newly chosen period
    ///
    /// Goes back to page 1 unless the reset policy is turned off, in which
    /// case the previous page carries over and is clamped.
    pub fn select_period(
        &self,
        query: &PeriodQuery,
        page: PageState,
    ) -> ReportResult<RenderInstruction> {
        let page = if self.settings.reset_page_on_refilter {
            page.reset()
        } else {
            page
        };
        self.generate(query, page)
    }

    /// Move to another page of the report last rendered
    pub fn on_navigate(
        &self,
        previous: &RenderInstruction,
        command: NavCommand,
    ) -> ReportResult<RenderInstruction> {
        let target = command.resolve(&previous.window);
        let total_pages = self.paginator(&previous.page).total_pages(previous.total_matches);
        let target = self.paginator(&previous.page).clamp_page(target, total_pages);

        let query = PeriodQuery::from(previous.selector);
        self.generate(&query, previous.page.with_page(target))
    }

    /// Every matching row for the period, across all pages
    pub fn matching_rows(&self, query: &PeriodQuery) -> ReportResult<(PeriodSelector, Vec<DisplayRow>)> {
        let selector = query.validate()?;
        let records = self.store.snapshot();
        let rows = filter_by_period(&records, &selector)
            .into_iter()
            .map(|record| self.formatter.row(record))
            .collect();
        Ok((selector, rows))
    }

    /// Push a result to the view
    ///
    /// Returns the instruction that was rendered, or `None` after a
    /// validation alert.
    pub fn present<V: ReportView + ?Sized>(
        &self,
        result: ReportResult<RenderInstruction>,
        view: &mut V,
    ) -> Option<RenderInstruction> {
        match result {
            Ok(instruction) => {
                view.render(&instruction);
                if let Some(notice) = instruction.notice() {
                    view.inform(notice);
                }
                Some(instruction)
            }
            Err(err) => {
                let message = match &err {
                    ReportError::Validation(msg) => msg.clone(),
                    other => other.to_string(),
                };
                tracing::debug!(error = %err, "report generation rejected");
                view.alert(&message);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Record;
    use crate::storage::MemoryRecordStore;

    #[derive(Default)]
    struct RecordingView {
        renders: Vec<RenderInstruction>,
        alerts: Vec<String>,
        infos: Vec<String>,
    }

    impl ReportView for RecordingView {
        fn render(&mut self, instruction: &RenderInstruction) {
            self.renders.push(instruction.clone());
        }

        fn alert(&mut self, message: &str) {
            self.alerts.push(message.to_string());
        }

        fn inform(&mut self, message: &str) {
            self.infos.push(message.to_string());
        }
    }

    fn march_store(count: usize) -> MemoryRecordStore {
        let records = (0..count)
            .map(|i| {
                Record::new(
                    format!("2024-03-{:02}T08:00", i % 28 + 1),
                    format!("S{:03}", i),
                    format!("Student {}", i),
                    "Microscope",
                )
            })
            .collect();
        MemoryRecordStore::new(records)
    }

    fn march() -> PeriodQuery {
        PeriodQuery::new("2024", "03")
    }

    #[test]
    fn test_generate_third_page() {
        let store = march_store(23);
        let controller = ReportController::new(&store, ReportSettings::default());
        let page = controller.initial_page().with_page(3);

        let instruction = controller.generate(&march(), page).unwrap();
        assert_eq!(instruction.rows.len(), 3);
        assert_eq!(instruction.rows[0].subject_id, "S020");
        assert_eq!(instruction.rows[2].subject_id, "S022");
        assert_eq!(instruction.window.page_numbers, vec![1, 2, 3]);
        assert!(instruction.window.prev_enabled);
        assert!(!instruction.window.next_enabled);
        assert_eq!((instruction.first_row_number(), instruction.last_row_number()), (21, 23));
    }

    #[test]
    fn test_generate_empty_state() {
        let store = march_store(5);
        let controller = ReportController::new(&store, ReportSettings::default());

        let instruction = controller
            .generate(&PeriodQuery::new("2024", "04"), controller.initial_page())
            .unwrap();
        assert!(instruction.empty_state);
        assert!(instruction.rows.is_empty());
        assert_eq!(instruction.window.page_numbers, vec![1]);
        assert!(!instruction.window.prev_enabled);
        assert!(!instruction.window.next_enabled);
        assert_eq!(instruction.notice(), Some(EMPTY_NOTICE));
    }

    #[test]
    fn test_generate_rejects_missing_month() {
        let store = march_store(5);
        let controller = ReportController::new(&store, ReportSettings::default());
        let query = PeriodQuery {
            year: Some("2024".into()),
            month: None,
        };

        let err = controller.generate(&query, controller.initial_page()).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_out_of_range_page_is_clamped_and_returned() {
        let store = march_store(50);
        let controller = ReportController::new(&store, ReportSettings::default());

        let instruction = controller
            .generate(&march(), controller.initial_page().with_page(999))
            .unwrap();
        assert_eq!(instruction.page.current_page(), 5);
        assert_eq!(instruction.window.page_numbers.last(), Some(&5));
    }

    #[test]
    fn test_navigation_commands() {
        let store = march_store(45);
        let controller = ReportController::new(&store, ReportSettings::default());
        let first = controller.generate(&march(), controller.initial_page()).unwrap();

        let prev = controller.on_navigate(&first, NavCommand::Prev).unwrap();
        assert_eq!(prev.page.current_page(), 1);

        let next = controller.on_navigate(&first, NavCommand::Next).unwrap();
        assert_eq!(next.page.current_page(), 2);

        let last = controller.on_navigate(&next, NavCommand::Last).unwrap();
        assert_eq!(last.page.current_page(), 5);
        assert_eq!(last.rows.len(), 5);

        let stuck = controller.on_navigate(&last, NavCommand::Next).unwrap();
        assert_eq!(stuck.page.current_page(), 5);

        let jump = controller.on_navigate(&last, NavCommand::Goto(3)).unwrap();
        assert_eq!(jump.page.current_page(), 3);

        let home = controller.on_navigate(&jump, NavCommand::First).unwrap();
        assert_eq!(home.page.current_page(), 1);

        let beyond = controller.on_navigate(&home, NavCommand::Goto(-7)).unwrap();
        assert_eq!(beyond.page.current_page(), 1);
    }

    #[test]
    fn test_select_period_resets_page_by_default() {
        let store = march_store(45);
        let controller = ReportController::new(&store, ReportSettings::default());
        let page = controller.initial_page().with_page(4);

        let instruction = controller.select_period(&march(), page).unwrap();
        assert_eq!(instruction.page.current_page(), 1);
    }

    #[test]
    fn test_select_period_can_carry_page_over() {
        let store = march_store(45);
        let settings = ReportSettings {
            reset_page_on_refilter: false,
            ..ReportSettings::default()
        };
        let controller = ReportController::new(&store, settings);
        let page = controller.initial_page().with_page(4);

        let instruction = controller.select_period(&march(), page).unwrap();
        assert_eq!(instruction.page.current_page(), 4);

        let whole_year = controller
            .select_period(&PeriodQuery::new("2023", "all"), instruction.page)
            .unwrap();
        assert_eq!(whole_year.page.current_page(), 1);
    }

    #[test]
    fn test_matching_rows_spans_all_pages() {
        let store = march_store(23);
        let controller = ReportController::new(&store, ReportSettings::default());

        let (selector, rows) = controller.matching_rows(&march()).unwrap();
        assert_eq!(selector, PeriodSelector::monthly(2024, 3));
        assert_eq!(rows.len(), 23);
        assert!(controller.matching_rows(&PeriodQuery::new("24x", "03")).is_err());
    }

    #[test]
    fn test_present_routes_to_view() {
        let store = march_store(3);
        let controller = ReportController::new(&store, ReportSettings::default());
        let mut view = RecordingView::default();

        let shown = controller.present(
            controller.generate(&march(), controller.initial_page()),
            &mut view,
        );
        assert!(shown.is_some());
        assert_eq!(view.renders.len(), 1);
        assert!(view.infos.is_empty());

        controller.present(
            controller.generate(&PeriodQuery::new("2024", "05"), controller.initial_page()),
            &mut view,
        );
        assert_eq!(view.renders.len(), 2);
        assert_eq!(view.infos, vec![EMPTY_NOTICE.to_string()]);

        let rejected = controller.present(
            controller.generate(&PeriodQuery::new("", "05"), controller.initial_page()),
            &mut view,
        );
        assert!(rejected.is_none());
        assert_eq!(view.renders.len(), 2);
        assert_eq!(view.alerts, vec!["Please select a month and a year".to_string()]);
    }
}
