//! Report period selection
//!
//! A period is a calendar year plus either one month or the whole year. Raw
//! user input arrives as a [`PeriodQuery`] and is validated into a
//! [`PeriodSelector`] before any filtering happens.

use chrono::{Datelike, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ReportError;

/// Month part of a period selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonthSelection {
    /// Every month of the selected year
    All,
    /// A single month, 1-12
    Month(u32),
}

impl MonthSelection {
    /// Parse `01`..`12`, `1`..`12` or `all` (case-insensitive)
    pub fn parse(s: &str) -> Result<Self, ReportError> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }

        match trimmed.parse::<u32>() {
            Ok(month) if (1..=12).contains(&month) => Ok(Self::Month(month)),
            _ => Err(ReportError::invalid_month(s)),
        }
    }

    /// Check whether a month number (1-12) is selected
    pub fn matches(&self, month: u32) -> bool {
        match self {
            Self::All => true,
            Self::Month(m) => *m == month,
        }
    }

    /// Cycle forward: 1, 2, .., 12, all, 1
    pub fn next(&self) -> Self {
        match self {
            Self::Month(12) => Self::All,
            Self::Month(m) => Self::Month(m + 1),
            Self::All => Self::Month(1),
        }
    }

    /// Cycle backward: all, 12, 11, .., 1, all
    pub fn prev(&self) -> Self {
        match self {
            Self::Month(1) => Self::All,
            Self::Month(m) => Self::Month(m - 1),
            Self::All => Self::Month(12),
        }
    }
}

impl fmt::Display for MonthSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Month(m) => write!(f, "{:02}", m),
        }
    }
}

/// A validated year/month selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PeriodSelector {
    pub year: i32,
    pub month: MonthSelection,
}

impl PeriodSelector {
    /// Select a single month
    pub fn monthly(year: i32, month: u32) -> Self {
        Self {
            year,
            month: MonthSelection::Month(month),
        }
    }

    /// Select a whole year
    pub fn whole_year(year: i32) -> Self {
        Self {
            year,
            month: MonthSelection::All,
        }
    }

    /// The current local month, used to pre-fill the selection on startup
    pub fn current_month() -> Self {
        let today = chrono::Local::now().date_naive();
        Self::monthly(today.year(), today.month())
    }

    /// Check if a loan timestamp falls within this period
    pub fn contains(&self, timestamp: &NaiveDateTime) -> bool {
        timestamp.year() == self.year && self.month.matches(timestamp.month())
    }
}

impl fmt::Display for PeriodSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.month {
            MonthSelection::All => write!(f, "{:04} (all months)", self.year),
            MonthSelection::Month(m) => write!(f, "{:04}-{:02}", self.year, m),
        }
    }
}

/// Unvalidated period input as typed or picked by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PeriodQuery {
    pub year: Option<String>,
    pub month: Option<String>,
}

impl PeriodQuery {
    pub fn new(year: impl Into<String>, month: impl Into<String>) -> Self {
        Self {
            year: Some(year.into()),
            month: Some(month.into()),
        }
    }

    /// Validate into a selector
    ///
    /// The year must be present and a whole number; the month must be present
    /// and either `all` or 1-12.
    pub fn validate(&self) -> Result<PeriodSelector, ReportError> {
        let year_input = self.year.as_deref().unwrap_or("");
        let month_input = self.month.as_deref().unwrap_or("");

        if month_input.trim().is_empty() {
            return Err(ReportError::invalid_month(month_input));
        }
        let year = year_input
            .trim()
            .parse::<i32>()
            .map_err(|_| ReportError::invalid_year(year_input))?;
        let month = MonthSelection::parse(month_input)?;

        Ok(PeriodSelector { year, month })
    }
}

impl From<PeriodSelector> for PeriodQuery {
    fn from(selector: PeriodSelector) -> Self {
        Self::new(selector.year.to_string(), selector.month.to_string())
    }
}
