//! Application state for the TUI
//!
//! The App struct holds the staged period inputs, the page state and the
//! last rendered report page.

use crate::config::settings::Settings;
use crate::error::ReportResult;
use crate::models::{MonthSelection, PeriodQuery, PeriodSelector};
use crate::reports::{NavCommand, PageState, RenderInstruction, ReportController, ReportView};
use crate::storage::RecordStore;

use super::widgets::{Notification, NotificationQueue, TextInput};

/// Mode of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Typing into the year field
    EditingYear,
    /// Typing a page number to jump to
    GotoPage,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
    /// Blocking message; must be dismissed before anything else
    Alert(String),
}

/// What the report view currently shows
#[derive(Debug, Default)]
pub struct ReportScreen {
    /// Last successfully rendered page
    pub last: Option<RenderInstruction>,

    pub active_dialog: ActiveDialog,

    pub notifications: NotificationQueue,
}

impl ReportView for ReportScreen {
    fn render(&mut self, instruction: &RenderInstruction) {
        self.last = Some(instruction.clone());
    }

    fn alert(&mut self, message: &str) {
        self.active_dialog = ActiveDialog::Alert(message.to_string());
    }

    fn inform(&mut self, message: &str) {
        self.notifications.push(Notification::info(message));
    }
}

/// Main application state
pub struct App<'a> {
    controller: ReportController<'a, dyn RecordStore + 'a>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Current input mode
    pub input_mode: InputMode,

    /// Year field of the period bar
    pub year_input: TextInput,

    /// Year text before editing started, restored on Esc
    year_backup: String,

    /// Month picked in the period bar
    pub month: MonthSelection,

    /// Page number being typed
    pub goto_input: String,

    /// Page to request on the next render
    pub page: PageState,

    pub screen: ReportScreen,

    /// Status message to display
    pub status_message: Option<String>,
}

impl<'a> App<'a> {
    /// Create a new App with the period pre-filled to the current month
    pub fn new(store: &'a dyn RecordStore, settings: &Settings) -> Self {
        Self::with_period(store, settings, PeriodSelector::current_month())
    }

    /// Create a new App with a given starting period
    pub fn with_period(
        store: &'a dyn RecordStore,
        settings: &Settings,
        period: PeriodSelector,
    ) -> Self {
        let controller = ReportController::new(store, settings.report_settings());
        let page = controller.initial_page();
        Self {
            controller,
            should_quit: false,
            input_mode: InputMode::default(),
            year_input: TextInput::new()
                .label("Year")
                .placeholder("YYYY")
                .content(period.year.to_string()),
            year_backup: String::new(),
            month: period.month,
            goto_input: String::new(),
            page,
            screen: ReportScreen::default(),
            status_message: None,
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.screen.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.screen.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        !matches!(self.screen.active_dialog, ActiveDialog::None)
    }

    /// The staged period inputs, not yet validated
    pub fn query(&self) -> PeriodQuery {
        PeriodQuery::new(self.year_input.value(), self.month.to_string())
    }

    /// Last rendered page, if any
    pub fn last(&self) -> Option<&RenderInstruction> {
        self.screen.last.as_ref()
    }

    fn apply(&mut self, result: ReportResult<RenderInstruction>) {
        if let Some(instruction) = self.controller.present(result, &mut self.screen) {
            self.page = instruction.page;
            self.clear_status();
        }
    }

    /// Render the current inputs at the current page
    pub fn refresh(&mut self) {
        let result = self.controller.generate(&self.query(), self.page);
        self.apply(result);
    }

    /// Generate the report for the staged period
    pub fn select_period(&mut self) {
        let result = self.controller.select_period(&self.query(), self.page);
        self.apply(result);
    }

    /// Move within the report last rendered
    pub fn navigate(&mut self, command: NavCommand) {
        let result = match self.screen.last.as_ref() {
            Some(last) => self.controller.on_navigate(last, command),
            None => {
                self.select_period();
                return;
            }
        };
        self.apply(result);
    }

    /// Drop expired notifications
    pub fn tick(&mut self) {
        self.screen.notifications.remove_expired();
    }

    /// Start editing the year field
    pub fn begin_year_edit(&mut self) {
        self.year_backup = self.year_input.value().to_string();
        self.year_input.focused = true;
        self.year_input.move_end();
        self.input_mode = InputMode::EditingYear;
    }

    /// Finish editing the year and regenerate
    pub fn commit_year_edit(&mut self) {
        self.year_input.focused = false;
        self.input_mode = InputMode::Normal;
        self.select_period();
    }

    /// Abandon the year edit
    pub fn cancel_year_edit(&mut self) {
        let backup = std::mem::take(&mut self.year_backup);
        self.year_input = std::mem::take(&mut self.year_input).content(backup);
        self.year_input.focused = false;
        self.input_mode = InputMode::Normal;
    }

    pub fn next_month(&mut self) {
        self.month = self.month.next();
    }

    pub fn prev_month(&mut self) {
        self.month = self.month.prev();
    }

    pub fn all_months(&mut self) {
        self.month = MonthSelection::All;
    }

    /// Add a digit to the page-number prompt
    pub fn push_goto_digit(&mut self, digit: char) {
        self.input_mode = InputMode::GotoPage;
        self.goto_input.push(digit);
    }

    pub fn pop_goto_digit(&mut self) {
        self.goto_input.pop();
        if self.goto_input.is_empty() {
            self.input_mode = InputMode::Normal;
        }
    }

    /// Jump to the typed page; numbers too large for `i64` go to the last page
    pub fn commit_goto(&mut self) {
        let typed = std::mem::take(&mut self.goto_input);
        self.input_mode = InputMode::Normal;
        if typed.is_empty() {
            return;
        }
        let page = typed.parse::<i64>().unwrap_or(i64::MAX);
        self.navigate(NavCommand::Goto(page));

        let shown = self.page.current_page();
        if usize::try_from(page).map_or(true, |requested| requested != shown) {
            self.screen.notifications.push(Notification::warning(format!(
                "Page {} does not exist, showing page {}",
                typed, shown
            )));
        }
    }

    pub fn cancel_goto(&mut self) {
        self.goto_input.clear();
        self.input_mode = InputMode::Normal;
    }
}
