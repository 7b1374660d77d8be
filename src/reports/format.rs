//! Row formatting for the loan report
//!
//! Converts records into display rows. Dates are shown in the regional
//! calendar: the Gregorian year is shifted by a fixed offset (543 for the
//! Buddhist era) and day and month are zero-padded. A value that cannot be
//! read becomes the absence marker for that cell only.

use std::fmt::Write as _;

use chrono::format::{Item, Numeric, Pad, StrftimeItems};
use chrono::{Datelike, NaiveDateTime};
use serde::Serialize;
use tabled::Tabled;

use crate::models::{parse_timestamp, Record};

/// Column headers, in display order
pub const COLUMN_HEADERS: [&str; 7] = [
    "Loan Date",
    "Return Date",
    "Subject ID",
    "Subject Name",
    "Item",
    "Handler",
    "Status",
];

/// One table row, already formatted for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Tabled)]
pub struct DisplayRow {
    #[tabled(rename = "Loan Date")]
    pub loan_date: String,
    #[tabled(rename = "Return Date")]
    pub return_date: String,
    #[tabled(rename = "Subject ID")]
    pub subject_id: String,
    #[tabled(rename = "Subject Name")]
    pub subject_name: String,
    #[tabled(rename = "Item")]
    pub item_label: String,
    #[tabled(rename = "Handler")]
    pub handler_name: String,
    #[tabled(rename = "Status")]
    pub status: String,
}

impl DisplayRow {
    /// Cells in column order
    pub fn cells(&self) -> [&str; 7] {
        [
            &self.loan_date,
            &self.return_date,
            &self.subject_id,
            &self.subject_name,
            &self.item_label,
            &self.handler_name,
            &self.status,
        ]
    }
}

/// Check that a strftime pattern contains no invalid specifiers
pub fn is_valid_date_format(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

fn year_literal(value: i32, width: usize, pad: Pad) -> Item<'static> {
    let text = match pad {
        Pad::None => value.to_string(),
        Pad::Zero => format!("{:0width$}", value, width = width),
        Pad::Space => format!("{:>width$}", value, width = width),
    };
    Item::OwnedLiteral(text.into_boxed_str())
}

/// Formats records into display rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowFormatter {
    year_offset: i32,
    date_format: String,
    absence_marker: String,
}

impl Default for RowFormatter {
    fn default() -> Self {
        Self::new(543, "%d-%m-%Y", "-")
    }
}

impl RowFormatter {
    pub fn new(
        year_offset: i32,
        date_format: impl Into<String>,
        absence_marker: impl Into<String>,
    ) -> Self {
        Self {
            year_offset,
            date_format: date_format.into(),
            absence_marker: absence_marker.into(),
        }
    }

    pub fn absence_marker(&self) -> &str {
        &self.absence_marker
    }

    /// Format a parsed date-time with the shifted year
    ///
    /// Every year specifier (`%Y`, `%C`, `%y`, `%G`, `%g` and the composites
    /// built from them) is replaced by the shifted value. The date itself is
    /// not moved, so 29 February stays valid in a shifted non-leap year.
    pub fn format_datetime(&self, at: &NaiveDateTime) -> Option<String> {
        let year = at.year() + self.year_offset;
        let iso_year = at.iso_week().year() + self.year_offset;

        let items = StrftimeItems::new(&self.date_format)
            .map(|item| match item {
                Item::Error => None,
                Item::Numeric(numeric, pad) => Some(match numeric {
                    Numeric::Year => year_literal(year, 4, pad),
                    Numeric::YearDiv100 => year_literal(year.div_euclid(100), 2, pad),
                    Numeric::YearMod100 => year_literal(year.rem_euclid(100), 2, pad),
                    Numeric::IsoYear => year_literal(iso_year, 4, pad),
                    Numeric::IsoYearDiv100 => year_literal(iso_year.div_euclid(100), 2, pad),
                    Numeric::IsoYearMod100 => year_literal(iso_year.rem_euclid(100), 2, pad),
                    numeric => Item::Numeric(numeric, pad),
                }),
                item => Some(item),
            })
            .collect::<Option<Vec<_>>>()?;

        let mut out = String::new();
        write!(out, "{}", at.format_with_items(items.iter())).ok()?;
        Some(out)
    }

    /// Format a stored timestamp, falling back to the absence marker
    pub fn format_date(&self, raw: &str) -> String {
        match parse_timestamp(raw).and_then(|at| self.format_datetime(&at)) {
            Some(formatted) => formatted,
            None => {
                tracing::warn!(raw = %raw, "unreadable date, showing absence marker");
                self.absence_marker.clone()
            }
        }
    }

    /// Format an optional timestamp; absent and blank values show the marker
    pub fn format_optional_date(&self, raw: Option<&str>) -> String {
        match raw.map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => self.format_date(raw),
            None => self.absence_marker.clone(),
        }
    }

    /// Build the display row for one record
    pub fn row(&self, record: &Record) -> DisplayRow {
        DisplayRow {
            loan_date: self.format_date(&record.loan_timestamp),
            return_date: self.format_optional_date(record.return_timestamp.as_deref()),
            subject_id: record.subject_id.clone(),
            subject_name: record.subject_name.clone(),
            item_label: record.item_label.clone(),
            handler_name: record
                .handler()
                .map(str::to_string)
                .unwrap_or_else(|| self.absence_marker.clone()),
            status: record.status.label().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LoanStatus;

    #[test]
    fn test_buddhist_era_date() {
        let formatter = RowFormatter::default();
        assert_eq!(formatter.format_date("2024-03-05"), "05-03-2567");
        assert_eq!(formatter.format_date("2023-12-31T23:59:00"), "31-12-2566");
    }

    #[test]
    fn test_malformed_date_shows_marker() {
        let formatter = RowFormatter::default();
        assert_eq!(formatter.format_date("05/03/2024"), "-");
        assert_eq!(formatter.format_optional_date(None), "-");
        assert_eq!(formatter.format_optional_date(Some("  ")), "-");
    }

    #[test]
    fn test_custom_offset_and_pattern() {
        let formatter = RowFormatter::new(0, "%Y/%m/%d", "n/a");
        assert_eq!(formatter.format_date("2024-03-05"), "2024/03/05");
        assert_eq!(formatter.format_date("garbage"), "n/a");
    }

    #[test]
    fn test_every_year_specifier_is_shifted() {
        let formatter = RowFormatter::new(543, "%y|%C|%G|%F", "-");
        assert_eq!(formatter.format_date("2024-03-05"), "67|25|2567|2567-03-05");
    }

    #[test]
    fn test_escaped_percent_is_not_a_year() {
        let formatter = RowFormatter::new(543, "%%Y %d-%m-%Y", "-");
        assert_eq!(formatter.format_date("2024-03-05"), "%Y 05-03-2567");
    }

    #[test]
    fn test_leap_day_in_shifted_non_leap_year() {
        let formatter = RowFormatter::default();
        assert_eq!(formatter.format_date("2024-02-29"), "29-02-2567");
    }

    #[test]
    fn test_invalid_pattern_degrades_to_marker() {
        assert!(!is_valid_date_format("%d-%!"));
        assert!(is_valid_date_format("%d-%m-%Y"));
        let formatter = RowFormatter::new(543, "%d-%!", "-");
        assert_eq!(formatter.format_date("2024-03-05"), "-");
    }

    #[test]
    fn test_row_isolates_bad_return_date() {
        let record = Record::new("2024-03-05T10:00", "6401", "Somchai", "Projector")
            .with_return("broken")
            .with_status(LoanStatus::Returned);
        let row = RowFormatter::default().row(&record);

        assert_eq!(row.loan_date, "05-03-2567");
        assert_eq!(row.return_date, "-");
        assert_eq!(row.handler_name, "-");
        assert_eq!(row.status, "Returned");
        assert_eq!(
            row.cells(),
            ["05-03-2567", "-", "6401", "Somchai", "Projector", "-", "Returned"]
        );
    }
}
