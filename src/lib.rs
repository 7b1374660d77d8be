//! loan-report - paginated monthly report over equipment-loan records
//!
//! This library filters a collection of equipment-loan records by month and
//! year, slices the matches into pages with a sliding strip of page buttons,
//! and formats each row for display with dates shown in the Buddhist-era
//! calendar.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Paths, settings and tracing setup
//! - `error`: Custom error types
//! - `models`: Loan records and period selection
//! - `storage`: Read-only access to the record collection
//! - `reports`: Filter, paginate, format and the report controller
//! - `display`: Plain-text rendering for the CLI
//! - `export`: CSV, JSON and YAML export of a filtered report
//! - `cli`: Command handlers
//! - `tui`: Interactive terminal interface
//!
//! # Example
//!
//! ```rust,ignore
//! use loan_report::models::PeriodQuery;
//! use loan_report::reports::{ReportController, ReportSettings};
//! use loan_report::storage::JsonRecordStore;
//!
//! let store = JsonRecordStore::new("records.json".into());
//! let controller = ReportController::new(&store, ReportSettings::default());
//! let page = controller.generate(&PeriodQuery::new("2024", "03"), controller.initial_page())?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod storage;
pub mod tui;

pub use error::ReportError;
