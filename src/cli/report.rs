//! CLI command for the loan report
//!
//! Prints one page of the report for a month and year, or exports every
//! matching row to a file.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::Args;

use crate::config::{paths::ReportPaths, settings::Settings};
use crate::display::format_report;
use crate::error::{ReportError, ReportResult};
use crate::export::{write_export, ExportFormat, ReportExport};
use crate::models::{PeriodQuery, PeriodSelector};
use crate::reports::{RenderInstruction, ReportController, ReportView};
use crate::storage::JsonRecordStore;

/// Arguments for `loanrep report`
#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    /// Year (Gregorian, e.g. 2024); defaults to the current year
    #[arg(short, long)]
    pub year: Option<String>,

    /// Month 01-12, or "all" for the whole year; defaults to the current month
    #[arg(short, long)]
    pub month: Option<String>,

    /// Page number to show; out-of-range values are clamped
    #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
    pub page: i64,

    /// Record collection to read instead of the configured one
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Export every matching row to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Export format; without --output the export goes to stdout
    #[arg(short, long, value_enum)]
    pub format: Option<ExportFormat>,
}

impl ReportArgs {
    /// Period query with missing parts filled from the current month
    pub fn query(&self) -> PeriodQuery {
        let current = PeriodQuery::from(PeriodSelector::current_month());
        PeriodQuery {
            year: self.year.clone().or(current.year),
            month: self.month.clone().or(current.month),
        }
    }
}

/// Prints report pages to stdout
///
/// Alerts are held back so the caller can turn them into an error exit.
/// Notices go to stderr; the rendered page already carries the no-data line.
#[derive(Debug, Default)]
pub struct TerminalView {
    alert: Option<String>,
}

impl TerminalView {
    pub fn take_alert(&mut self) -> Option<String> {
        self.alert.take()
    }
}

impl ReportView for TerminalView {
    fn render(&mut self, instruction: &RenderInstruction) {
        print!("{}", format_report(instruction));
    }

    fn alert(&mut self, message: &str) {
        self.alert = Some(message.to_string());
    }

    fn inform(&mut self, message: &str) {
        eprintln!("note: {}", message);
    }
}

/// Record store for a command: `--file` wins over the settings
pub fn resolve_store(
    file: Option<PathBuf>,
    paths: &ReportPaths,
    settings: &Settings,
) -> JsonRecordStore {
    JsonRecordStore::new(file.unwrap_or_else(|| settings.records_path(paths)))
}

/// Handle `loanrep report`
pub fn handle_report_command(
    paths: &ReportPaths,
    settings: &Settings,
    args: ReportArgs,
) -> ReportResult<()> {
    let store = resolve_store(args.file.clone(), paths, settings);
    tracing::debug!(path = %store.path().display(), "reading records");
    let controller = ReportController::new(&store, settings.report_settings());
    let query = args.query();

    if args.output.is_some() || args.format.is_some() {
        return handle_export(&controller, &query, &args);
    }

    let page = controller
        .initial_page()
        .with_page(usize::try_from(args.page).unwrap_or(1));

    let mut view = TerminalView::default();
    let result = controller.generate(&query, page);
    if controller.present(result, &mut view).is_none() {
        let message = view
            .take_alert()
            .unwrap_or_else(|| "Please select a month and a year".to_string());
        return Err(ReportError::Validation(message));
    }

    Ok(())
}

fn handle_export(
    controller: &ReportController<'_, JsonRecordStore>,
    query: &PeriodQuery,
    args: &ReportArgs,
) -> ReportResult<()> {
    let (selector, rows) = controller.matching_rows(query)?;
    let export = ReportExport::new(selector, rows);
    let format = args.format.unwrap_or(ExportFormat::Csv);

    match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                ReportError::Export(format!(
                    "Failed to create file {}: {}",
                    path.display(),
                    e
                ))
            })?;
            let mut writer = BufWriter::new(file);
            write_export(&export, format, &mut writer)?;
            writer
                .flush()
                .map_err(|e| ReportError::Export(e.to_string()))?;
            println!(
                "Exported {} records for {} to: {}",
                export.record_count,
                export.period,
                path.display()
            );
        }
        None => {
            let stdout = std::io::stdout();
            let mut writer = stdout.lock();
            write_export(&export, format, &mut writer)?;
            writer
                .flush()
                .map_err(|e| ReportError::Export(e.to_string()))?;
        }
    }

    Ok(())
}
