//! Status bar view
//!
//! Shows the report summary, any status message and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::display::format_summary;
use crate::tui::app::{App, InputMode};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![];

    if let Some(last) = app.last() {
        spans.push(Span::styled(
            format!(" {}", format_summary(last)),
            Style::default().fg(Color::White),
        ));
    }

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Yellow),
        ));
    }

    let hints = match app.input_mode {
        InputMode::Normal => " ←/→:Page  y:Year  m:Month  r:Apply  ?:Help  q:Quit ",
        InputMode::EditingYear => " Enter:Apply  Esc:Cancel ",
        InputMode::GotoPage => " Enter:Go  Esc:Cancel ",
    };

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.chars().count());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::DarkGray)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
