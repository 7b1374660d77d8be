//! Report formatting for terminal output

use tabled::settings::Style;
use tabled::Table;

use crate::reports::{DisplayRow, PaginationWindow, RenderInstruction, EMPTY_NOTICE};

/// Widest free-text cell before it is cut with an ellipsis
const MAX_TEXT_CELL: usize = 28;

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

/// Format the visible rows as a table
///
/// Long names and item labels are cut to keep rows on one line. An empty
/// result prints the no-data notice instead of a headers-only table.
pub fn format_report_table(instruction: &RenderInstruction) -> String {
    if instruction.empty_state {
        return EMPTY_NOTICE.to_string();
    }

    let rows: Vec<DisplayRow> = instruction
        .rows
        .iter()
        .map(|row| DisplayRow {
            subject_name: truncate(&row.subject_name, MAX_TEXT_CELL),
            item_label: truncate(&row.item_label, MAX_TEXT_CELL),
            ..row.clone()
        })
        .collect();

    Table::new(&rows).with(Style::rounded()).to_string()
}

/// Format the pagination strip
///
/// Disabled controls are wrapped in parentheses and the current page is
/// bracketed, e.g. `(« First) (‹ Prev) [1] 2 3 Next › Last »`.
pub fn format_pagination_strip(window: &PaginationWindow) -> String {
    fn control(label: &str, enabled: bool) -> String {
        if enabled {
            label.to_string()
        } else {
            format!("({})", label)
        }
    }

    let mut parts = vec![
        control("« First", window.first_enabled()),
        control("‹ Prev", window.prev_enabled),
    ];
    parts.extend(window.page_numbers.iter().map(|&page| {
        if window.is_current(page) {
            format!("[{}]", page)
        } else {
            page.to_string()
        }
    }));
    parts.push(control("Next ›", window.next_enabled));
    parts.push(control("Last »", window.last_enabled()));

    parts.join(" ")
}

/// One-line summary of what is on screen
pub fn format_summary(instruction: &RenderInstruction) -> String {
    if instruction.empty_state {
        return format!("No records for {}", instruction.selector);
    }

    format!(
        "Showing {}-{} of {} records, page {} of {} for {}",
        instruction.first_row_number(),
        instruction.last_row_number(),
        instruction.total_matches,
        instruction.page.current_page(),
        instruction.window.last_page,
        instruction.selector
    )
}

/// Full terminal rendering of one report page
pub fn format_report(instruction: &RenderInstruction) -> String {
    let table = format_report_table(instruction);
    let width = table.lines().next().map(|l| l.chars().count()).unwrap_or(40);

    let mut output = String::new();
    output.push_str(&format!("Loan Report: {}\n", instruction.selector));
    output.push_str(&separator(width));
    output.push('\n');
    output.push_str(&table);
    output.push('\n');
    output.push_str(&format_pagination_strip(&instruction.window));
    output.push('\n');
    output.push_str(&format_summary(instruction));
    output.push('\n');
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PeriodQuery, Record};
    use crate::reports::{ReportController, ReportSettings};
    use crate::storage::MemoryRecordStore;

    fn store(count: usize) -> MemoryRecordStore {
        MemoryRecordStore::new(
            (0..count)
                .map(|i| {
                    Record::new(
                        format!("2024-03-{:02}", i % 28 + 1),
                        format!("6401{:02}", i),
                        format!("Student {}", i),
                        "Camera",
                    )
                })
                .collect(),
        )
    }

    fn render(count: usize, page: usize) -> RenderInstruction {
        let store = store(count);
        let controller = ReportController::new(&store, ReportSettings::default());
        controller
            .generate(
                &PeriodQuery::new("2024", "03"),
                controller.initial_page().with_page(page),
            )
            .unwrap()
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello World", 5), "He...");
        assert_eq!(truncate("Hi", 5), "Hi");
        assert_eq!(truncate("สมชาย ใจดี", 5), "สม...");
    }

    #[test]
    fn test_table_contains_headers_and_dates() {
        let table = format_report_table(&render(3, 1));
        assert!(table.contains("Loan Date"));
        assert!(table.contains("Subject Name"));
        assert!(table.contains("01-03-2567"));
        assert!(table.contains("640102"));
    }

    #[test]
    fn test_table_cuts_long_names() {
        let long_name = "Somchai Jaidee Wongsawat Srisuk Na Ayutthaya";
        let store = MemoryRecordStore::new(vec![Record::new(
            "2024-03-05",
            "6401",
            long_name,
            "Camera",
        )]);
        let controller = ReportController::new(&store, ReportSettings::default());
        let instruction = controller
            .generate(&PeriodQuery::new("2024", "03"), controller.initial_page())
            .unwrap();

        let table = format_report_table(&instruction);
        assert!(!table.contains(long_name));
        assert!(table.contains(&truncate(long_name, MAX_TEXT_CELL)));
        assert_eq!(instruction.rows[0].subject_name, long_name);
    }

    #[test]
    fn test_empty_result_prints_notice_instead_of_table() {
        let output = format_report(&render(0, 1));
        assert!(output.contains(EMPTY_NOTICE));
        assert!(!output.contains("Loan Date"));
        assert!(output.contains("[1]"));
    }

    #[test]
    fn test_strip_marks_current_and_disabled() {
        let strip = format_pagination_strip(&render(23, 3).window);
        assert_eq!(strip, "« First ‹ Prev 1 2 [3] (Next ›) (Last »)");

        let strip = format_pagination_strip(&render(0, 1).window);
        assert_eq!(strip, "(« First) (‹ Prev) [1] (Next ›) (Last »)");
    }

    #[test]
    fn test_summary() {
        assert_eq!(
            format_summary(&render(23, 3)),
            "Showing 21-23 of 23 records, page 3 of 3 for 2024-03"
        );
        assert_eq!(format_summary(&render(0, 1)), "No records for 2024-03");
    }

    #[test]
    fn test_full_report_layout() {
        let output = format_report(&render(12, 2));
        assert!(output.starts_with("Loan Report: 2024-03\n"));
        assert!(output.contains("[2]"));
        assert!(output.ends_with("page 2 of 2 for 2024-03\n"));
    }
}
