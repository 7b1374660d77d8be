//! Configuration module for loan-report
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence
//! - Tracing subscriber setup

pub mod logging;
pub mod paths;
pub mod settings;

pub use paths::ReportPaths;
pub use settings::Settings;
