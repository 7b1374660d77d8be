//! TUI Views module
//!
//! The report screen: period bar, table, pagination strip and status bar,
//! with dialogs and notifications drawn on top.

pub mod pagination;
pub mod period_bar;
pub mod report;
pub mod status_bar;

use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::{notification_rect, ReportLayout};
use super::widgets::NotificationWidget;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = ReportLayout::new(frame.area());

    period_bar::render(frame, app, layout.period_bar);
    report::render(frame, app, layout.table);
    pagination::render(frame, app, layout.pagination);
    status_bar::render(frame, app, layout.status_bar);

    if let Some(notification) = app.screen.notifications.current() {
        let area = notification_rect(48, 4, frame.area());
        frame.render_widget(NotificationWidget::new(notification), area);
    }

    match &app.screen.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame),
        ActiveDialog::Alert(message) => dialogs::alert::render(frame, message),
        ActiveDialog::None => {}
    }
}
