//! Period bar
//!
//! Year field, month picker and the period currently on screen.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::MonthSelection;
use crate::tui::app::{App, InputMode};

/// Label for the month picker
pub fn month_label(month: MonthSelection) -> String {
    match month {
        MonthSelection::All => "All months".to_string(),
        MonthSelection::Month(m) => chrono::Month::try_from(m as u8)
            .map(|name| format!("{:02} {}", m, name.name()))
            .unwrap_or_else(|_| format!("{:02}", m)),
    }
}

/// Render the period bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let editing = app.input_mode == InputMode::EditingYear;
    let border_color = if editing { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .title(" Loan Report ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(14),
            Constraint::Length(26),
            Constraint::Min(10),
        ])
        .split(inner);

    frame.render_widget(&app.year_input, columns[0]);

    let month = Line::from(vec![
        Span::styled("Month", Style::default().fg(Color::Cyan)),
        Span::raw(": "),
        Span::styled(month_label(app.month), Style::default().fg(Color::Yellow)),
    ]);
    frame.render_widget(Paragraph::new(month), columns[1]);

    let showing = match app.last() {
        Some(last) => format!("Showing {}", last.selector),
        None => "Nothing shown yet".to_string(),
    };
    frame.render_widget(
        Paragraph::new(showing).style(Style::default().fg(Color::DarkGray)),
        columns[2],
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_label() {
        assert_eq!(month_label(MonthSelection::Month(3)), "03 March");
        assert_eq!(month_label(MonthSelection::All), "All months");
    }
}
