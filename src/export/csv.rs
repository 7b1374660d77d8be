//! CSV Export functionality

use std::io::Write;

use crate::error::{ReportError, ReportResult};
use crate::reports::{DisplayRow, COLUMN_HEADERS};

/// Export display rows to CSV, header first
pub fn export_rows_csv<W: Write>(rows: &[DisplayRow], writer: &mut W) -> ReportResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(COLUMN_HEADERS)
        .map_err(|e| ReportError::Export(e.to_string()))?;

    for row in rows {
        csv_writer
            .write_record(row.cells())
            .map_err(|e| ReportError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| ReportError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Record;
    use crate::reports::RowFormatter;

    #[test]
    fn test_csv_export() {
        let formatter = RowFormatter::default();
        let rows = vec![
            formatter.row(&Record::new("2024-03-05", "6401", "Somchai", "Projector")),
            formatter.row(
                &Record::new("2024-03-07", "6402", "Lee, Ann", "Tripod")
                    .with_return("2024-03-09")
                    .with_handler("Mali"),
            ),
        ];

        let mut output = Vec::new();
        export_rows_csv(&rows, &mut output).unwrap();
        let csv_string = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = csv_string.lines().collect();

        assert_eq!(
            lines[0],
            "Loan Date,Return Date,Subject ID,Subject Name,Item,Handler,Status"
        );
        assert_eq!(lines[1], "05-03-2567,-,6401,Somchai,Projector,-,Pending");
        assert_eq!(
            lines[2],
            "07-03-2567,09-03-2567,6402,\"Lee, Ann\",Tripod,Mali,Pending"
        );
    }

    #[test]
    fn test_empty_export_has_header_only() {
        let mut output = Vec::new();
        export_rows_csv(&[], &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap().lines().count(), 1);
    }
}
