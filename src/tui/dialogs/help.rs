//! Help dialog
//!
//! Lists the keyboard shortcuts

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame) {
    let area = centered_rect(60, 70, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines())
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    )])
}

fn help_lines() -> Vec<Line<'static>> {
    vec![
        section("Pages"),
        Line::from(""),
        key_line("←/h", "Previous page"),
        key_line("→/l", "Next page"),
        key_line("Home/g", "First page"),
        key_line("End/G", "Last page"),
        key_line("0-9 Enter", "Go to page number"),
        Line::from(""),
        section("Period"),
        Line::from(""),
        key_line("y", "Edit year"),
        key_line("m/M", "Next/previous month"),
        key_line("a", "All months of the year"),
        key_line("r/Enter", "Show report for the selected period"),
        Line::from(""),
        key_line("?", "Show/hide help"),
        key_line("q", "Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().fg(Color::DarkGray),
        )]),
    ]
}

/// Create a formatted key line
fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}
