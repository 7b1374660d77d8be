//! User settings for loan-report
//!
//! Manages report preferences: page size, pagination window width, the
//! calendar year offset used for display, and the page-reset policy.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::ReportPaths;
use crate::error::ReportError;
use crate::reports::format::is_valid_date_format;
use crate::reports::ReportSettings;

/// User settings for loan-report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Rows per report page
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Page-number buttons shown in the pagination strip
    #[serde(default = "default_max_visible_buttons")]
    pub max_visible_buttons: usize,

    /// Years added to the Gregorian year when displaying dates
    #[serde(default = "default_year_offset")]
    pub year_offset: i32,

    /// Text shown for absent or unreadable values
    #[serde(default = "default_absence_marker")]
    pub absence_marker: String,

    /// Date format preference (strftime format, applied after the year shift)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Whether selecting a new period jumps back to page 1
    #[serde(default = "default_reset_page")]
    pub reset_page_on_refilter: bool,

    /// Record collection path, overriding `data/records.json`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub records_file: Option<PathBuf>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_page_size() -> usize {
    10
}

fn default_max_visible_buttons() -> usize {
    10
}

fn default_year_offset() -> i32 {
    543
}

fn default_absence_marker() -> String {
    "-".to_string()
}

fn default_date_format() -> String {
    "%d-%m-%Y".to_string()
}

fn default_reset_page() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            page_size: default_page_size(),
            max_visible_buttons: default_max_visible_buttons(),
            year_offset: default_year_offset(),
            absence_marker: default_absence_marker(),
            date_format: default_date_format(),
            reset_page_on_refilter: default_reset_page(),
            records_file: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &ReportPaths) -> Result<Self, ReportError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| ReportError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                ReportError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ReportPaths) -> Result<(), ReportError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ReportError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| ReportError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Resolve which file holds the record collection
    pub fn records_path(&self, paths: &ReportPaths) -> PathBuf {
        self.records_file
            .clone()
            .unwrap_or_else(|| paths.records_file())
    }

    /// Build the controller settings, coercing unusable numbers to defaults
    pub fn report_settings(&self) -> ReportSettings {
        let page_size = if self.page_size == 0 {
            tracing::warn!(
                "page_size must be positive, using {}",
                default_page_size()
            );
            default_page_size()
        } else {
            self.page_size
        };
        let max_visible_buttons = if self.max_visible_buttons == 0 {
            default_max_visible_buttons()
        } else {
            self.max_visible_buttons
        };

        let date_format = if is_valid_date_format(&self.date_format) {
            self.date_format.clone()
        } else {
            tracing::warn!(
                format = %self.date_format,
                "invalid date_format, using {}",
                default_date_format()
            );
            default_date_format()
        };

        ReportSettings {
            page_size,
            max_visible_buttons,
            year_offset: self.year_offset,
            absence_marker: self.absence_marker.clone(),
            date_format,
            reset_page_on_refilter: self.reset_page_on_refilter,
        }
    }
}
