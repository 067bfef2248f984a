//! FILENAME: engine/src/lib.rs
//! PURPOSE: Main library entry point for the spreadsheet grid engine.
//! CONTEXT: Re-exports public types and modules for use by other crates.

pub mod cell;
pub mod spreadsheet;
pub mod worksheet;
pub mod writeback;

// Re-export commonly used types at the crate root
pub use cell::{Cell, CellValue};
pub use spreadsheet::Spreadsheet;
pub use worksheet::{find_cells, ResolvedRect, Worksheet};
pub use writeback::RangeUpdate;
