//! Core data models for loan-report
//!
//! Loan records as read from storage and the period a report is filtered by.

pub mod period;
pub mod record;

pub use period::{MonthSelection, PeriodQuery, PeriodSelector};
pub use record::{parse_timestamp, LoanStatus, Record};
