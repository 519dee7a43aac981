//! Spreadsheet input
//!
//! Reads the first worksheet of a workbook into an untyped [`Grid`](crate::types::Grid)
//! with no header row. Dates and durations are rendered to text.

mod loader;

pub use loader::{convert_cell, render_serial, GridLoader};
