//! YAML Export functionality

use std::io::Write;

use crate::error::{ReportError, ReportResult};

use super::ReportExport;

/// Export a report to YAML with a short comment header
pub fn export_report_yaml<W: Write>(export: &ReportExport, writer: &mut W) -> ReportResult<()> {
    let header = format!(
        "# Loan Report Export\n# Period: {}\n# Generated: {}\n\n",
        export.period, export.exported_at
    );
    writer
        .write_all(header.as_bytes())
        .map_err(|e| ReportError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, export).map_err(|e| ReportError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PeriodSelector;

    #[test]
    fn test_yaml_export() {
        let export = ReportExport::new(PeriodSelector::whole_year(2024), Vec::new());

        let mut output = Vec::new();
        export_report_yaml(&export, &mut output).unwrap();
        let yaml_string = String::from_utf8(output).unwrap();

        assert!(yaml_string.starts_with("# Loan Report Export\n# Period: 2024 (all months)"));
        assert!(yaml_string.contains("record_count: 0"));
        assert!(yaml_string.contains("rows: []"));
    }
}
