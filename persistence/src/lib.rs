//! FILENAME: persistence/src/lib.rs
//! Persistence Module
//!
//! Handles the boundary to the external spreadsheet service: the service
//! trait the HTTP client implements, the per-operation fetch/flush context,
//! and JSON snapshots for fixtures and debugging.

mod context;
mod error;
mod service;
mod snapshot;

pub use context::SheetContext;
pub use error::{PersistenceError, ServiceError};
pub use service::{
    cell_value_from_json, cell_value_to_json, values_from_json_grid, SheetService,
    WorksheetValues,
};
pub use snapshot::{load_snapshot, save_snapshot};
