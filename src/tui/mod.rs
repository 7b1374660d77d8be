//! Terminal User Interface module
//!
//! Interactive loan report built on ratatui: pick a year and month, then
//! page through the matching records.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
