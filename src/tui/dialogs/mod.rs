//! Dialog modules for the TUI

pub mod alert;
pub mod help;
