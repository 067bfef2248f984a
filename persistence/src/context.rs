//! FILENAME: persistence/src/context.rs
//! PURPOSE: Per-operation spreadsheet cache with explicit fetch and flush.
//! CONTEXT: One logical operation (a command invocation, a request) creates
//! one context, fetches the spreadsheets it needs, mutates them in memory,
//! and flushes. The context holds at most one snapshot per spreadsheet id
//! and invalidates it after a successful flush; nothing is cached across
//! operations.

use crate::error::PersistenceError;
use crate::service::SheetService;
use engine::Spreadsheet;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

pub struct SheetContext<S: SheetService> {
    service: S,
    spreadsheets: HashMap<String, Spreadsheet>,
}

impl<S: SheetService> SheetContext<S> {
    pub fn new(service: S) -> Self {
        SheetContext {
            service,
            spreadsheets: HashMap::new(),
        }
    }

    /// Returns the snapshot for `spreadsheet_id`, fetching it on first use.
    /// A second call within the same operation returns the cached snapshot
    /// unchanged.
    pub fn fetch(&mut self, spreadsheet_id: &str) -> Result<&mut Spreadsheet, PersistenceError> {
        match self.spreadsheets.entry(spreadsheet_id.to_string()) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let sheets = self
                    .service
                    .get_spreadsheet_with_values(spreadsheet_id)
                    .map_err(|source| PersistenceError::Fetch {
                        spreadsheet_id: spreadsheet_id.to_string(),
                        source,
                    })?;

                log::info!(
                    "fetched spreadsheet {} ({} worksheet(s))",
                    spreadsheet_id,
                    sheets.len()
                );

                let spreadsheet = Spreadsheet::from_values(
                    spreadsheet_id,
                    sheets.into_iter().map(|ws| (ws.name, ws.values)).collect(),
                );
                Ok(entry.insert(spreadsheet))
            }
        }
    }

    /// The cached snapshot, if this operation has fetched it.
    pub fn get(&self, spreadsheet_id: &str) -> Option<&Spreadsheet> {
        self.spreadsheets.get(spreadsheet_id)
    }

    pub fn get_mut(&mut self, spreadsheet_id: &str) -> Option<&mut Spreadsheet> {
        self.spreadsheets.get_mut(spreadsheet_id)
    }

    /// Drops the cached snapshot without writing anything.
    pub fn invalidate(&mut self, spreadsheet_id: &str) {
        self.spreadsheets.remove(spreadsheet_id);
    }

    /// Plans and executes the write-back for `spreadsheet_id`: one ranged
    /// write call covering every dirty worksheet. Dirty flags are cleared
    /// and the snapshot invalidated only after the service confirms the
    /// write; a clean snapshot is invalidated without any service call.
    pub fn flush(&mut self, spreadsheet_id: &str) -> Result<(), PersistenceError> {
        let spreadsheet = self
            .spreadsheets
            .get_mut(spreadsheet_id)
            .ok_or_else(|| PersistenceError::NotFetched(spreadsheet_id.to_string()))?;

        let updates = spreadsheet.get_updated_values_with_ranges();
        if updates.is_empty() {
            log::debug!("flush of {}: nothing dirty", spreadsheet_id);
            self.spreadsheets.remove(spreadsheet_id);
            return Ok(());
        }

        let mut ranges = Vec::with_capacity(updates.len());
        let mut values = Vec::with_capacity(updates.len());
        for update in updates {
            ranges.push(update.range);
            values.push(update.values);
        }

        self.service
            .write_ranges(spreadsheet_id, &ranges, &values)
            .map_err(|source| PersistenceError::Write {
                spreadsheet_id: spreadsheet_id.to_string(),
                source,
            })?;

        log::info!(
            "flushed spreadsheet {} ({} range(s))",
            spreadsheet_id,
            ranges.len()
        );

        spreadsheet.clear_dirty();
        self.spreadsheets.remove(spreadsheet_id);
        Ok(())
    }
}
