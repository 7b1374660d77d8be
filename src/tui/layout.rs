//! Layout definitions for the TUI
//!
//! Period bar on top, report table, pagination strip, status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the report screen
pub struct ReportLayout {
    /// Year and month selectors
    pub period_bar: Rect,
    /// Report table
    pub table: Rect,
    /// First / Prev / page numbers / Next / Last
    pub pagination: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl ReportLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Period bar
                Constraint::Min(5),    // Table
                Constraint::Length(3), // Pagination
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            period_bar: chunks[0],
            table: chunks[1],
            pagination: chunks[2],
            status_bar: chunks[3],
        }
    }
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

/// Top-right corner box for toast notifications
pub fn notification_rect(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect::new(r.x + r.width - width, r.y, width, height)
}
