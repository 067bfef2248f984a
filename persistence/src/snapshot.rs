//! FILENAME: persistence/src/snapshot.rs
//! PURPOSE: Saves and loads spreadsheet snapshots as JSON files.
//! CONTEXT: Debugging a bad reconciliation needs the exact sheet content
//! the operation saw, and test fixtures want realistic tournament sheets
//! without a live service. Snapshots are plain serde JSON of the engine
//! types; they are not a cache and are never read on the hot path.

use crate::error::PersistenceError;
use engine::Spreadsheet;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Serializes `spreadsheet` (including dirty flags) to `path` as JSON.
pub fn save_snapshot(spreadsheet: &Spreadsheet, path: &Path) -> Result<(), PersistenceError> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), spreadsheet)?;
    log::debug!("saved snapshot of {} to {}", spreadsheet.id, path.display());
    Ok(())
}

/// Loads a snapshot written by [`save_snapshot`].
pub fn load_snapshot(path: &Path) -> Result<Spreadsheet, PersistenceError> {
    let file = File::open(path)?;
    let spreadsheet = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| PersistenceError::InvalidFormat(e.to_string()))?;
    Ok(spreadsheet)
}
