//! FILENAME: reconcile-engine/src/lib.rs
//! Row-association subsystem for tournament spreadsheets.
//!
//! This crate turns loosely structured, human-maintained sheet content into
//! typed domain records. It depends on `engine` only for shared types
//! (Cell, CellValue, Spreadsheet).
//!
//! Layers:
//! - `definition`: Serializable configuration (what a source IS)
//! - `matcher`: Windowed best-effort matching (HOW rows are associated)
//! - `lookup`: End-to-end anchor-id resolution (WHAT a lookup returns)
//! - `records`: Typed domain records (lobbies, matches, rosters)

pub mod definition;
pub mod error;
pub mod lookup;
pub mod matcher;
pub mod records;

pub use definition::{FieldBinding, FieldTag, SheetSource};
pub use error::ReconcileError;
pub use lookup::{from_id, AnchorRecord, FieldMatch};
pub use matcher::{find_corresponding_cell_best_effort, find_corresponding_cells_best_effort};
pub use records::{QualifierLobby, RosterEntry, ScheduledMatch};
