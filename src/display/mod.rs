//! Display formatting for terminal output
//!
//! Renders report pages as plain-text tables with a pagination strip and a
//! summary line.

pub mod report;

pub use report::{format_pagination_strip, format_report, format_report_table, format_summary};
