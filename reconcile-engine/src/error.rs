//! FILENAME: reconcile-engine/src/error.rs

use crate::definition::FieldTag;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReconcileError {
    #[error("{0}")]
    InvalidRangeSyntax(#[from] parser::ParseError),

    #[error("anchor id not found: {0}")]
    AnchorNotFound(String),

    #[error("duplicate anchor id: {0}")]
    DuplicateAnchor(String),

    #[error("field {0} resolved to a non-text value")]
    FieldTypeMismatch(FieldTag),

    #[error("worksheet not found: {0}")]
    SheetNotFound(String),
}
