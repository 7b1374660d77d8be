//! Report table view

use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::reports::{COLUMN_HEADERS, EMPTY_NOTICE};
use crate::tui::app::App;

/// Render the rows of the current page
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let Some(last) = app.last() else {
        let text = Paragraph::new("Press r to load the report")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    };

    if last.empty_state {
        let text = Paragraph::new(EMPTY_NOTICE)
            .alignment(Alignment::Center)
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let widths = [
        Constraint::Length(12), // Loan date
        Constraint::Length(12), // Return date
        Constraint::Length(12), // Subject ID
        Constraint::Min(16),    // Subject name
        Constraint::Min(12),    // Item
        Constraint::Length(14), // Handler
        Constraint::Length(10), // Status
    ];

    let header = Row::new(
        COLUMN_HEADERS
            .iter()
            .map(|title| Cell::from(*title).style(Style::default().add_modifier(Modifier::BOLD))),
    )
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let rows = last.rows.iter().map(|row| {
        let status_color = match row.status.as_str() {
            "Returned" => Color::Green,
            "Overdue" | "Rejected" => Color::Red,
            "Borrowed" => Color::Cyan,
            _ => Color::White,
        };
        let mut cells: Vec<Cell> = row.cells().iter().map(|cell| Cell::from(*cell)).collect();
        if let Some(status) = cells.pop() {
            cells.push(status.style(Style::default().fg(status_color)));
        }
        Row::new(cells)
    });

    let title = format!(
        " Rows {}-{} of {} ",
        last.first_row_number(),
        last.last_row_number(),
        last.total_matches
    );
    let table = Table::new(rows, widths)
        .header(header)
        .block(block.title(title));

    frame.render_widget(table, area);
}
