//! FILENAME: persistence/src/error.rs

use thiserror::Error;

/// The error surface of the external spreadsheet service collaborator.
/// Retry policy lives with the collaborator, not here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("HTTP {code} during {operation}: {detail}")]
    Http {
        code: u16,
        operation: String,
        detail: String,
    },
}

#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("fetch failed for spreadsheet {spreadsheet_id}: {source}")]
    Fetch {
        spreadsheet_id: String,
        #[source]
        source: ServiceError,
    },

    #[error("write-back failed for spreadsheet {spreadsheet_id}: {source}")]
    Write {
        spreadsheet_id: String,
        #[source]
        source: ServiceError,
    },

    #[error("spreadsheet not fetched in this operation: {0}")]
    NotFetched(String),

    #[error("invalid snapshot format: {0}")]
    InvalidFormat(String),
}
