//! Storage layer for loan-report
//!
//! Read-only access to the loan record collection.

pub mod file_io;
pub mod records;

pub use file_io::{json_file_valid, read_json};
pub use records::{JsonRecordStore, MemoryRecordStore, RecordStore};
