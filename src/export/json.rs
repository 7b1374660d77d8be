//! JSON Export functionality

use std::io::Write;

use crate::error::{ReportError, ReportResult};

use super::ReportExport;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Export a report to JSON
pub fn export_report_json<W: Write>(
    export: &ReportExport,
    writer: &mut W,
    pretty: bool,
) -> ReportResult<()> {
    if pretty {
        serde_json::to_writer_pretty(writer, export)
    } else {
        serde_json::to_writer(writer, export)
    }
    .map_err(|e| ReportError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PeriodSelector, Record};
    use crate::reports::RowFormatter;

    #[test]
    fn test_json_export() {
        let row = RowFormatter::default().row(&Record::new("2024-03-05", "6401", "Somchai", "Projector"));
        let export = ReportExport::new(PeriodSelector::monthly(2024, 3), vec![row]);

        let mut output = Vec::new();
        export_report_json(&export, &mut output, false).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();

        assert_eq!(value["schema_version"], EXPORT_SCHEMA_VERSION);
        assert_eq!(value["record_count"], 1);
        assert_eq!(value["period"]["year"], 2024);
        assert_eq!(value["rows"][0]["loan_date"], "05-03-2567");
        assert_eq!(value["rows"][0]["subject_name"], "Somchai");
    }
}
