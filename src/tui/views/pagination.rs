//! Pagination strip
//!
//! `« First  ‹ Prev  1 2 [3] 4  Next ›  Last »`, with disabled controls
//! dimmed and the current page highlighted.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::reports::PaginationWindow;
use crate::tui::app::{App, InputMode};

fn control(label: &'static str, enabled: bool) -> Span<'static> {
    let style = if enabled {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Span::styled(label, style)
}

/// Build the strip as styled spans
pub fn strip_line(window: &PaginationWindow) -> Line<'static> {
    let mut spans = vec![
        control("« First", window.first_enabled()),
        Span::raw("  "),
        control("‹ Prev", window.prev_enabled),
        Span::raw("  "),
    ];

    for &page in &window.page_numbers {
        if window.is_current(page) {
            spans.push(Span::styled(
                format!("[{}]", page),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(
                page.to_string(),
                Style::default().fg(Color::Cyan),
            ));
        }
        spans.push(Span::raw(" "));
    }

    spans.push(Span::raw(" "));
    spans.push(control("Next ›", window.next_enabled));
    spans.push(Span::raw("  "));
    spans.push(control("Last »", window.last_enabled()));

    Line::from(spans)
}

/// Render the pagination strip
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let title = if app.input_mode == InputMode::GotoPage {
        format!(" Go to page: {}_ ", app.goto_input)
    } else {
        String::new()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(title);

    let line = match app.last() {
        Some(last) => strip_line(&last.window),
        None => Line::from(""),
    };

    frame.render_widget(
        Paragraph::new(line).alignment(Alignment::Center).block(block),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::Paginator;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_strip_text() {
        let window = Paginator::new(10).window(2, 3);
        assert_eq!(
            text(&strip_line(&window)),
            "« First  ‹ Prev  1 [2] 3  Next ›  Last »"
        );
    }

    #[test]
    fn test_disabled_controls_are_dimmed() {
        let window = Paginator::new(10).window(1, 0);
        let line = strip_line(&window);
        assert_eq!(line.spans[0].style.fg, Some(Color::DarkGray));
        assert_eq!(line.spans.last().unwrap().style.fg, Some(Color::DarkGray));
    }
}
