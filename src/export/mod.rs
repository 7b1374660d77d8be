//! Export module for loan-report
//!
//! Writes every row matching a period, across all pages, in one of:
//! - CSV: spreadsheet-compatible, one line per record
//! - JSON: rows plus report metadata
//! - YAML: the JSON document with a comment header

pub mod csv;
pub mod json;
pub mod yaml;

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::ReportResult;
use crate::models::PeriodSelector;
use crate::reports::DisplayRow;

pub use self::csv::export_rows_csv;
pub use json::{export_report_json, EXPORT_SCHEMA_VERSION};
pub use yaml::export_report_yaml;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    /// CSV format (rows only)
    Csv,
    /// JSON format (rows and metadata)
    Json,
    /// YAML format (rows and metadata, human-readable)
    Yaml,
}

/// A filtered report ready to be written out
#[derive(Debug, Clone, Serialize)]
pub struct ReportExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub period: PeriodSelector,

    pub record_count: usize,

    pub rows: Vec<DisplayRow>,
}

impl ReportExport {
    pub fn new(period: PeriodSelector, rows: Vec<DisplayRow>) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            period,
            record_count: rows.len(),
            rows,
        }
    }
}

/// Write the export in the chosen format
pub fn write_export<W: Write>(
    export: &ReportExport,
    format: ExportFormat,
    writer: &mut W,
) -> ReportResult<()> {
    tracing::info!(
        period = %export.period,
        rows = export.record_count,
        ?format,
        "exporting report"
    );
    match format {
        ExportFormat::Csv => export_rows_csv(&export.rows, writer),
        ExportFormat::Json => export_report_json(export, writer, true),
        ExportFormat::Yaml => export_report_yaml(export, writer),
    }
}
