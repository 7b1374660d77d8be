//! Path management for loan-report
//!
//! Provides XDG-compliant path resolution for configuration, record data and
//! the diagnostic log.
//!
//! ## Path Resolution Order
//!
//! 1. `LOAN_REPORT_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/loan-report` or `~/.config/loan-report`
//! 3. Windows: `%APPDATA%\loan-report`

use std::path::PathBuf;

use crate::error::ReportError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "LOAN_REPORT_DATA_DIR";

/// Manages all paths used by loan-report
#[derive(Debug, Clone)]
pub struct ReportPaths {
    /// Base directory for all loan-report files
    base_dir: PathBuf,
}

impl ReportPaths {
    /// Create a new ReportPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if neither the override nor a home directory can be
    /// determined.
    pub fn new() -> Result<Self, ReportError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create ReportPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/loan-report/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/loan-report/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the default path of the loan record collection
    pub fn records_file(&self) -> PathBuf {
        self.data_dir().join("records.json")
    }

    /// Get the path of the diagnostic log used while the TUI owns the terminal
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("loan-report.log")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), ReportError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ReportError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| ReportError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if loan-report has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, ReportError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                ReportError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("loan-report"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, ReportError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| ReportError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("loan-report"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ReportPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ReportPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.data_dir().exists());
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ReportPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.records_file(),
            temp_dir.path().join("data").join("records.json")
        );
        assert_eq!(paths.log_file(), temp_dir.path().join("loan-report.log"));
    }
}
