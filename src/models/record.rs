//! Equipment-loan record model
//!
//! Records are owned by the record store and only read here. Timestamps are
//! kept as the raw strings found in storage and parsed on demand, so one bad
//! value never prevents the rest of the collection from loading.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Lifecycle state of a loan
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum LoanStatus {
    #[default]
    Pending,
    Approved,
    Borrowed,
    Returned,
    Rejected,
    Overdue,
    /// Any status string this crate does not know about, kept verbatim
    Other(String),
}

impl LoanStatus {
    /// Display label for the status column
    pub fn label(&self) -> &str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Borrowed => "Borrowed",
            Self::Returned => "Returned",
            Self::Rejected => "Rejected",
            Self::Overdue => "Overdue",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for LoanStatus {
    fn from(raw: String) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "pending" => Self::Pending,
            "approved" => Self::Approved,
            "borrowed" => Self::Borrowed,
            "returned" => Self::Returned,
            "rejected" => Self::Rejected,
            "overdue" => Self::Overdue,
            _ => Self::Other(raw),
        }
    }
}

impl From<LoanStatus> for String {
    fn from(status: LoanStatus) -> Self {
        match status {
            LoanStatus::Other(raw) => raw,
            known => known.label().to_ascii_lowercase(),
        }
    }
}

impl fmt::Display for LoanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One equipment-loan entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// When the item was lent out
    #[serde(alias = "dateTime", alias = "loan_timestamp")]
    pub loan_timestamp: String,

    /// When the item came back, if it has
    #[serde(
        default,
        alias = "returnDateTime",
        alias = "return_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub return_timestamp: Option<String>,

    /// Identifier of the borrower
    #[serde(
        default,
        alias = "studentId",
        alias = "subject_id",
        deserialize_with = "lenient_text"
    )]
    pub subject_id: String,

    /// Name of the borrower
    #[serde(
        default,
        alias = "studentName",
        alias = "subject_name",
        deserialize_with = "lenient_text"
    )]
    pub subject_name: String,

    /// What was lent
    #[serde(
        default,
        alias = "equipment",
        alias = "item_label",
        deserialize_with = "lenient_text"
    )]
    pub item_label: String,

    /// Staff member who handled the loan
    #[serde(
        default,
        alias = "staffName",
        alias = "handler_name",
        skip_serializing_if = "Option::is_none"
    )]
    pub handler_name: Option<String>,

    #[serde(default, deserialize_with = "lenient_status")]
    pub status: LoanStatus,
}

/// Text cell that tolerates numbers, booleans and null as stored by older
/// front ends
fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(String::new()),
        serde_json::Value::String(text) => Ok(text),
        serde_json::Value::Number(number) => Ok(number.to_string()),
        serde_json::Value::Bool(flag) => Ok(flag.to_string()),
        other => Err(D::Error::custom(format!("expected text, found {}", other))),
    }
}

fn lenient_status<'de, D: Deserializer<'de>>(deserializer: D) -> Result<LoanStatus, D::Error> {
    let raw = lenient_text(deserializer)?;
    if raw.trim().is_empty() {
        Ok(LoanStatus::default())
    } else {
        Ok(LoanStatus::from(raw))
    }
}

impl Record {
    /// Create a record with the required fields
    pub fn new(
        loan_timestamp: impl Into<String>,
        subject_id: impl Into<String>,
        subject_name: impl Into<String>,
        item_label: impl Into<String>,
    ) -> Self {
        Self {
            loan_timestamp: loan_timestamp.into(),
            return_timestamp: None,
            subject_id: subject_id.into(),
            subject_name: subject_name.into(),
            item_label: item_label.into(),
            handler_name: None,
            status: LoanStatus::default(),
        }
    }

    pub fn with_return(mut self, return_timestamp: impl Into<String>) -> Self {
        self.return_timestamp = Some(return_timestamp.into());
        self
    }

    pub fn with_handler(mut self, handler_name: impl Into<String>) -> Self {
        self.handler_name = Some(handler_name.into());
        self
    }

    pub fn with_status(mut self, status: LoanStatus) -> Self {
        self.status = status;
        self
    }

    /// Parsed loan timestamp, `None` if the stored value is unreadable
    pub fn loaned_at(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.loan_timestamp)
    }

    /// Handler name with blank values treated as absent
    pub fn handler(&self) -> Option<&str> {
        self.handler_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse a stored timestamp into wall-clock date and time
///
/// Accepts RFC 3339 (the wall-clock fields of the given offset are kept),
/// ISO 8601 local date-times with `T` or a space, and bare `YYYY-MM-DD`
/// (midnight).
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }

    for format in DATE_TIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt);
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}
